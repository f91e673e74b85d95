// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{GrayscopeError, Result};

/// Most pixels one image may have. Histogram bins count in `u32`.
pub const MAX_PIXELS: u64 = u32::MAX as u64;

/// Decoder limits applied before any pixels are allocated.
///
/// Filter behaviour is fixed and deliberately absent from this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Largest accepted encoded input, in bytes (default 50 MiB).
    pub max_input_bytes: usize,
    /// Widest accepted image, in pixels.
    pub max_image_width: u32,
    /// Tallest accepted image, in pixels.
    pub max_image_height: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 50 * 1024 * 1024,
            max_image_width: 16_384,
            max_image_height: 16_384,
        }
    }
}

impl PipelineConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        debug!(?config, "Pipeline config loaded");
        Ok(config)
    }

    /// Reject limits that would refuse every image.
    pub fn validate(&self) -> Result<()> {
        if self.max_input_bytes == 0 {
            return Err(GrayscopeError::Config("max_input_bytes must be positive".into()));
        }
        if self.max_image_width == 0 || self.max_image_height == 0 {
            return Err(GrayscopeError::Config(
                "max_image_width and max_image_height must be positive".into(),
            ));
        }
        if self.max_image_width as u64 * self.max_image_height as u64 > MAX_PIXELS {
            return Err(GrayscopeError::Config(format!(
                "max_image_width x max_image_height must not exceed {MAX_PIXELS} pixels"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PipelineConfig::from_json_str(r#"{ "max_image_width": 640 }"#).unwrap();
        assert_eq!(config.max_image_width, 640);
        assert_eq!(config.max_image_height, PipelineConfig::default().max_image_height);
        assert_eq!(config.max_input_bytes, PipelineConfig::default().max_input_bytes);
    }

    #[test]
    fn zero_limits_are_rejected() {
        let err = PipelineConfig::from_json_str(r#"{ "max_input_bytes": 0 }"#).unwrap_err();
        assert!(matches!(err, GrayscopeError::Config(_)));
    }

    #[test]
    fn pixel_budget_is_capped() {
        let err = PipelineConfig::from_json_str(
            r#"{ "max_image_width": 4294967295, "max_image_height": 2 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, GrayscopeError::Config(_)));

        let config = PipelineConfig::from_json_str(
            r#"{ "max_image_width": 65535, "max_image_height": 65537 }"#,
        )
        .unwrap();
        assert_eq!(config.max_image_width as u64 * config.max_image_height as u64, MAX_PIXELS);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = PipelineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, GrayscopeError::Serialization(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_input_bytes": 1024 }}"#).unwrap();

        let config = PipelineConfig::load(file.path()).unwrap();
        assert_eq!(config.max_input_bytes, 1024);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PipelineConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GrayscopeError::Io(_)));
    }
}
