// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory fixtures shared by the unit tests.

use std::io::Cursor;

use grayscope_core::GrayscaleImage;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbImage};

/// Encode `image` as PNG bytes.
pub fn png_bytes(image: DynamicImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("PNG encoding failed");
    buffer
}

/// Encode `image` as JPEG bytes at high quality.
pub fn jpeg_bytes(image: RgbImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, 95);
    image
        .write_with_encoder(encoder)
        .expect("JPEG encoding failed");
    buffer
}

/// Grayscale image from row-major samples.
pub fn gray(width: u32, height: u32, data: &[u8]) -> GrayscaleImage {
    GrayscaleImage::new(width, height, data.to_vec()).expect("valid grayscale layout")
}
