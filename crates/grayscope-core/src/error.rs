// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Grayscope.

use thiserror::Error;

/// Top-level error type for all Grayscope operations.
#[derive(Debug, Error)]
pub enum GrayscopeError {
    // -- Decode errors --
    #[error("no image data supplied")]
    EmptyInput,

    #[error("image data is not a recognized format (expected PNG or JPEG)")]
    UnrecognizedFormat,

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to decode {format} image: {reason}")]
    Decode { format: String, reason: String },

    #[error("image data is {size} bytes, above the {limit} byte limit")]
    InputTooLarge { size: usize, limit: usize },

    #[error("image is {width}x{height}, above the {max_width}x{max_height} limit")]
    DimensionsTooLarge {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },

    // -- Raster errors --
    #[error("unsupported channel count {0}: expected 1, 3 or 4")]
    InvalidChannelCount(u8),

    #[error("invalid raster layout: {0}")]
    InvalidRaster(String),

    // -- Output / outer surfaces --
    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GrayscopeError {
    /// Whether this error was raised while turning encoded bytes into pixels.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::UnrecognizedFormat
                | Self::UnsupportedFormat(_)
                | Self::Decode { .. }
                | Self::InputTooLarge { .. }
                | Self::DimensionsTooLarge { .. }
        )
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, GrayscopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_category_covers_limits() {
        assert!(GrayscopeError::EmptyInput.is_decode_error());
        assert!(GrayscopeError::InputTooLarge { size: 10, limit: 5 }.is_decode_error());
        assert!(!GrayscopeError::InvalidChannelCount(2).is_decode_error());
        assert!(!GrayscopeError::Encode("boom".into()).is_decode_error());
    }

    #[test]
    fn channel_count_message_names_the_count() {
        let msg = GrayscopeError::InvalidChannelCount(2).to_string();
        assert!(msg.contains('2'), "{msg}");
    }
}
