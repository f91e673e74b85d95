// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PNG encoding of pipeline outputs, for display by an external renderer.

use std::io::Cursor;

use grayscope_core::error::{GrayscopeError, Result};
use grayscope_core::{GrayscaleImage, RasterImage};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};

/// Encode a grayscale image as 8-bit luma PNG.
pub fn encode_png_gray(image: &GrayscaleImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);
    image
        .as_gray_image()
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| GrayscopeError::Encode(format!("PNG encoding failed: {}", err)))?;
    Ok(buffer)
}

/// Encode a decoded raster as PNG, keeping its channel layout.
pub fn encode_png_raster(raster: &RasterImage) -> Result<Vec<u8>> {
    let color = match raster.channels() {
        1 => ExtendedColorType::L8,
        2 => ExtendedColorType::La8,
        3 => ExtendedColorType::Rgb8,
        4 => ExtendedColorType::Rgba8,
        other => return Err(GrayscopeError::InvalidChannelCount(other)),
    };

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(raster.as_raw(), raster.width(), raster.height(), color)
        .map_err(|err| GrayscopeError::Encode(format!("PNG encoding failed: {}", err)))?;
    Ok(buffer)
}
