use log::info;
use pixel_pipelines::config::load_config;
use pixel_pipelines::diagnostics::elapsed_ms;
use pixel_pipelines::image::io::{load_rgba_image, save_rgba_image, write_json_file};
use pixel_pipelines::image::ImageView;
use pixel_pipelines::OperationReport;
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgba_image(&config.input)?;
    let start = Instant::now();
    let (output, report) = config.operation.run(image.as_view())?;
    let elapsed = elapsed_ms(start);
    info!(
        "{} on {}x{} took {:.3} ms",
        config.operation.name(),
        image.width(),
        image.height(),
        elapsed
    );

    save_rgba_image(&output, &config.output)?;
    println!(
        "Saved {} result to {}",
        config.operation.name(),
        config.output.display()
    );

    if let Some(report_path) = &config.report {
        let summary = RunSummary {
            operation: config.operation.name(),
            width: image.width(),
            height: image.height(),
            elapsed_ms: elapsed,
            report,
        };
        write_json_file(report_path, &summary)?;
        println!("Saved report to {}", report_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: pixel_tool <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary {
    operation: &'static str,
    width: usize,
    height: usize,
    elapsed_ms: f64,
    report: Option<OperationReport>,
}
