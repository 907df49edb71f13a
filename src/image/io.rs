//! Codec-side helpers for the tool binary.
//!
//! - `load_rgba_image`: decode a PNG/JPEG into an owned RGBA8 buffer.
//! - `save_rgba_image`: encode an `RgbaImage` using the path's extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! None of the pipelines call into this module; it stands in for the
//! external codec collaborator.
use super::rgba::RgbaImage;
use super::traits::ImageView;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to access {path}: {source}")]
    Fs {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize JSON for {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Buffer(#[from] crate::error::Error),
}

pub fn load_rgba_image(path: &Path) -> Result<RgbaImage, IoError> {
    let img = image::open(path)
        .map_err(|source| IoError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbaImage::from_raw(width, height, img.into_raw())?)
}

pub fn save_rgba_image(image: &RgbaImage, path: &Path) -> Result<(), IoError> {
    ensure_parent_dir(path)?;
    image::save_buffer(
        path,
        image.as_bytes(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::Rgba8,
    )
    .map_err(|source| IoError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), IoError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| IoError::Fs {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| IoError::Fs {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
