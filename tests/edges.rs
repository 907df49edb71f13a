mod common;

use common::synthetic_image::{alpha_channel, split_black_white, textured};
use pixel_pipelines::edges::{canny_with_report, EdgeClass, SuppressedAlpha};
use pixel_pipelines::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn sobel_responds_at_split_and_not_in_flat_regions() {
    init_logging();
    let img = split_black_white(5, 5, 2, 255);
    let out = sobel(img.as_view()).unwrap();
    for y in 0..5 {
        assert_eq!(out.pixel(0, y)[0], 0, "flat black column at y={y}");
        assert_eq!(out.pixel(4, y)[0], 0, "flat white column at y={y}");
        assert!(out.pixel(1, y)[0] >= 200, "left of split at y={y}");
        assert!(out.pixel(2, y)[0] >= 200, "right of split at y={y}");
    }
}

#[test]
fn prewitt_matches_sobel_on_a_clean_step() {
    let img = split_black_white(6, 4, 3, 255);
    let p = prewitt(img.as_view()).unwrap();
    let s = sobel(img.as_view()).unwrap();
    for x in 0..6 {
        assert_eq!(p.pixel(x, 1)[0] > 0, s.pixel(x, 1)[0] > 0, "x={x}");
    }
}

#[test]
fn derivative_operators_preserve_alpha() {
    let img = textured(17, 11);
    let alpha = alpha_channel(&img);
    for out in [
        sobel(img.as_view()).unwrap(),
        prewitt(img.as_view()).unwrap(),
        laplacian(img.as_view()).unwrap(),
    ] {
        assert_eq!(alpha_channel(&out), alpha);
    }
}

#[test]
fn canny_marks_the_boundary_column() {
    init_logging();
    let img = split_black_white(5, 5, 2, 255);
    let (out, report) = canny_with_report(img.as_view(), &CannyParams::new(50.0, 150.0)).unwrap();
    assert!(report.strong + report.weak > 0);
    let marked = (0..5).any(|y| (1..=2).any(|x| out.pixel(x, y)[0] >= 128));
    assert!(marked, "expected an edge next to the split");
    for y in 0..5 {
        assert_eq!(out.pixel(4, y), [0, 0, 0, 0], "flat white far from the split");
    }
}

#[test]
fn canny_emits_only_three_pixel_values() {
    let img = textured(20, 20);
    let out = canny(img.as_view(), &CannyParams::default()).unwrap();
    for px in out.as_bytes().chunks_exact(4) {
        assert!(
            px == [255, 255, 255, 255] || px == [128, 128, 128, 255] || px == [0, 0, 0, 0],
            "unexpected pixel {px:?}"
        );
    }
}

#[test]
fn canny_with_source_alpha_keeps_suppressed_opacity() {
    let img = textured(9, 9);
    let params = CannyParams {
        low_threshold: 10_000.0,
        high_threshold: 20_000.0,
        suppressed_alpha: SuppressedAlpha::Source,
    };
    let out = canny(img.as_view(), &params).unwrap();
    assert_eq!(alpha_channel(&out), alpha_channel(&img));
}

#[test]
fn canny_accepts_inverted_thresholds() {
    let img = split_black_white(8, 8, 4, 255);
    let out = canny(img.as_view(), &CannyParams::new(200.0, 100.0)).unwrap();
    assert!(out
        .as_bytes()
        .chunks_exact(4)
        .all(|p| p[0] != 128), "no weak band when low > high");
    assert_eq!(EdgeClass::classify(150.0, 200.0, 100.0), EdgeClass::Strong);
}

#[test]
fn edge_operators_are_deterministic() {
    let img = textured(33, 21);
    let a = canny(img.as_view(), &CannyParams::default()).unwrap();
    let b = canny(img.as_view(), &CannyParams::default()).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        sobel(img.as_view()).unwrap(),
        sobel(img.as_view()).unwrap()
    );
}
