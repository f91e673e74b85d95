// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contrast enhancement — stretch every sample away from the image mean.

use grayscope_core::GrayscaleImage;
use grayscope_core::types::INTENSITY_LEVELS;
use tracing::{debug, instrument};

use crate::histogram::build_histogram;

/// Fixed contrast gain.
pub const ENHANCE_GAIN: f64 = 1.5;

/// Scale each sample's deviation from the (rounded) mean by [`ENHANCE_GAIN`].
///
/// Results are clamped to [0, 255] and truncated. A flat image has zero
/// deviation everywhere and comes back unchanged.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn enhance(image: &GrayscaleImage) -> GrayscaleImage {
    let histogram = build_histogram(image);
    let mean = (histogram.mean().unwrap_or_default() + 0.5).floor();
    debug!(mean, gain = ENHANCE_GAIN, "Enhancing contrast around mean");

    let lut = contrast_lut(mean, ENHANCE_GAIN);
    image.map_samples(|v| lut[v as usize])
}

fn contrast_lut(mean: f64, gain: f64) -> [u8; INTENSITY_LEVELS] {
    let mut lut = [0u8; INTENSITY_LEVELS];
    for (value, slot) in lut.iter_mut().enumerate() {
        let stretched = mean + gain * (value as f64 - mean);
        *slot = stretched.clamp(0.0, 255.0) as u8;
    }
    lut
}
