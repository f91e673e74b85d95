// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grayscale conversion — ITU-R BT.601 luma from RGB(A) rasters.

use grayscope_core::error::{GrayscopeError, Result};
use grayscope_core::{GrayscaleImage, RasterImage};
use tracing::{debug, instrument};

// 0.299, 0.587 and 0.114 in 16.16 fixed point. They sum to 65536, so white
// maps to exactly 255.
const RED_WEIGHT: u32 = 19_595;
const GREEN_WEIGHT: u32 = 38_470;
const BLUE_WEIGHT: u32 = 7_471;
const ROUNDING: u32 = 1 << 15;

/// Luma of one RGB pixel, rounded to nearest.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * RED_WEIGHT + g as u32 * GREEN_WEIGHT + b as u32 * BLUE_WEIGHT + ROUNDING) >> 16)
        as u8
}

/// Convert a raster to single-channel luminance.
///
/// One-channel input is copied as-is. For RGBA the alpha channel is ignored,
/// not blended. Any other layout fails with `InvalidChannelCount`.
#[instrument(skip_all, fields(width = raster.width(), height = raster.height(), channels = raster.channels()))]
pub fn to_grayscale(raster: &RasterImage) -> Result<GrayscaleImage> {
    let data = match raster.channels() {
        1 => raster.as_raw().to_vec(),
        3 | 4 => raster.pixels().map(|px| luma(px[0], px[1], px[2])).collect(),
        other => return Err(GrayscopeError::InvalidChannelCount(other)),
    };
    debug!("Converted to grayscale");
    GrayscaleImage::new(raster.width(), raster.height(), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(width: u32, height: u32, channels: u8, data: &[u8]) -> RasterImage {
        RasterImage::new(width, height, channels, data.to_vec()).unwrap()
    }

    #[test]
    fn primaries_use_broadcast_weights() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn dimensions_are_preserved() {
        let rgb = raster(3, 2, 3, &[128; 18]);
        let gray = to_grayscale(&rgb).unwrap();
        assert_eq!((gray.width(), gray.height()), (3, 2));
        assert_eq!(gray.as_raw().len(), 6);
        assert!(gray.as_raw().iter().all(|&v| v == 128));
    }

    #[test]
    fn alpha_is_ignored() {
        let opaque = raster(1, 1, 4, &[255, 0, 0, 255]);
        let clear = raster(1, 1, 4, &[255, 0, 0, 0]);
        assert_eq!(to_grayscale(&opaque).unwrap().as_raw(), &[76]);
        assert_eq!(to_grayscale(&clear).unwrap().as_raw(), &[76]);
    }

    #[test]
    fn single_channel_is_copied_unchanged() {
        let source = raster(2, 2, 1, &[0, 64, 128, 255]);
        let once = to_grayscale(&source).unwrap();
        assert_eq!(once.as_raw(), source.as_raw());

        let again = to_grayscale(&raster(2, 2, 1, once.as_raw())).unwrap();
        assert_eq!(again, once);
    }

    #[test]
    fn gray_alpha_is_rejected() {
        let err = to_grayscale(&raster(1, 1, 2, &[10, 255])).unwrap_err();
        assert!(matches!(err, GrayscopeError::InvalidChannelCount(2)));
    }

    #[test]
    fn conversion_is_deterministic() {
        let rgb = raster(2, 1, 3, &[12, 200, 99, 250, 3, 47]);
        assert_eq!(to_grayscale(&rgb).unwrap(), to_grayscale(&rgb).unwrap());
    }
}
