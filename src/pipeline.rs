//! Serializable description of a single operation and its dispatch.
use crate::convolution;
use crate::edges::{self, CannyParams, CannyReport};
use crate::error::Result;
use crate::histogram::{self, ClaheParams, ClaheReport};
use crate::image::{RgbaImage, RgbaView};
use crate::tone;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    Blur,
    GaussianBlur,
    Sharpen {
        #[serde(default = "default_amount")]
        amount: f32,
    },
    Emboss {
        #[serde(default = "default_amount")]
        strength: f32,
    },
    Sobel,
    Prewitt,
    Laplacian,
    Canny(CannyParams),
    Clahe(ClaheParams),
    Equalize,
    Gamma {
        #[serde(default = "default_gamma")]
        gamma: f32,
    },
    Sigmoid {
        #[serde(default)]
        contrast: f32,
    },
    Brightness {
        delta: f32,
    },
    Contrast {
        factor: f32,
    },
}

fn default_amount() -> f32 {
    1.0
}

fn default_gamma() -> f32 {
    2.2
}

/// Stage report for the operations that produce one.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum OperationReport {
    Canny(CannyReport),
    Clahe(ClaheReport),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Blur => "blur",
            Operation::GaussianBlur => "gaussian_blur",
            Operation::Sharpen { .. } => "sharpen",
            Operation::Emboss { .. } => "emboss",
            Operation::Sobel => "sobel",
            Operation::Prewitt => "prewitt",
            Operation::Laplacian => "laplacian",
            Operation::Canny(_) => "canny",
            Operation::Clahe(_) => "clahe",
            Operation::Equalize => "equalize",
            Operation::Gamma { .. } => "gamma",
            Operation::Sigmoid { .. } => "sigmoid",
            Operation::Brightness { .. } => "brightness",
            Operation::Contrast { .. } => "contrast",
        }
    }

    pub fn run(&self, src: RgbaView<'_>) -> Result<(RgbaImage, Option<OperationReport>)> {
        let plain = |img: RgbaImage| -> (RgbaImage, Option<OperationReport>) { (img, None) };
        match self {
            Operation::Blur => convolution::blur(src).map(plain),
            Operation::GaussianBlur => convolution::gaussian_blur(src).map(plain),
            Operation::Sharpen { amount } => convolution::sharpen(src, *amount).map(plain),
            Operation::Emboss { strength } => convolution::emboss(src, *strength).map(plain),
            Operation::Sobel => edges::sobel(src).map(plain),
            Operation::Prewitt => edges::prewitt(src).map(plain),
            Operation::Laplacian => edges::laplacian(src).map(plain),
            Operation::Canny(params) => edges::canny_with_report(src, params)
                .map(|(img, report)| (img, Some(OperationReport::Canny(report)))),
            Operation::Clahe(params) => histogram::clahe_with_report(src, params)
                .map(|(img, report)| (img, Some(OperationReport::Clahe(report)))),
            Operation::Equalize => histogram::equalize(src).map(plain),
            Operation::Gamma { gamma } => tone::gamma_correction(src, *gamma).map(plain),
            Operation::Sigmoid { contrast } => tone::sigmoid_contrast(src, *contrast).map(plain),
            Operation::Brightness { delta } => tone::brightness(src, *delta).map(plain),
            Operation::Contrast { factor } => tone::contrast(src, *factor).map(plain),
        }
    }
}
