//! JSON configuration for the `pixel_tool` binary.
use crate::pipeline::Operation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct ToolConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Optional JSON report with stage timings and per-operation counters.
    #[serde(default)]
    pub report: Option<PathBuf>,
    pub operation: Operation,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load_config(path: &Path) -> Result<ToolConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(json: &str) -> Result<ToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::{CannyParams, SuppressedAlpha};

    #[test]
    fn parses_full_config() {
        let cfg = parse_config(
            r#"{
                "input": "in.png",
                "output": "out/edges.png",
                "report": "out/report.json",
                "operation": {"type": "canny", "low_threshold": 20, "suppressed_alpha": "source"}
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("in.png"));
        assert_eq!(cfg.report, Some(PathBuf::from("out/report.json")));
        assert_eq!(
            cfg.operation,
            Operation::Canny(CannyParams {
                low_threshold: 20.0,
                high_threshold: 150.0,
                suppressed_alpha: SuppressedAlpha::Source,
            })
        );
    }

    #[test]
    fn report_is_optional() {
        let cfg =
            parse_config(r#"{"input":"a.png","output":"b.png","operation":{"type":"equalize"}}"#)
                .unwrap();
        assert!(cfg.report.is_none());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_config(Path::new("/nonexistent/pixel_tool.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
