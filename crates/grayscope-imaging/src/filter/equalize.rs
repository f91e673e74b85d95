// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Histogram equalization via a cumulative-distribution lookup table.

use grayscope_core::{GrayscaleImage, Histogram};
use grayscope_core::types::INTENSITY_LEVELS;
use tracing::{debug, instrument, warn};

use crate::histogram::build_histogram;

/// Build the equalization lookup table for `histogram`.
///
/// The samples in the highest occupied bin are left out of the spread, and
/// the remaining cumulative count is split into 255 equal steps. Each
/// intensity maps to the step its cumulative count (rounded to the middle of
/// the step) falls into. Returns `None` when there are fewer than 255 samples
/// outside the top bin, which includes every single-valued image: there is no
/// range to stretch.
pub fn equalization_lut(histogram: &Histogram) -> Option<[u8; INTENSITY_LEVELS]> {
    let counts = histogram.counts();
    let top = counts.iter().rev().copied().find(|&c| c > 0)?;
    let step = (histogram.total() - top) / 255;
    if step == 0 {
        return None;
    }

    let mut lut = [0u8; INTENSITY_LEVELS];
    let mut running = step / 2;
    for (slot, &count) in lut.iter_mut().zip(counts.iter()) {
        *slot = (running / step).min(255) as u8;
        running += count;
    }
    Some(lut)
}

/// Equalize `image` using its own freshly computed histogram.
///
/// Images with no spread to redistribute are returned unchanged.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn equalize(image: &GrayscaleImage) -> GrayscaleImage {
    let histogram = build_histogram(image);
    match equalization_lut(&histogram) {
        Some(lut) => {
            debug!(
                min = ?histogram.min_value(),
                max = ?histogram.max_value(),
                "Equalization table built"
            );
            image.map_samples(|v| lut[v as usize])
        }
        None => {
            warn!("Histogram has no range to equalize; returning image unchanged");
            image.clone()
        }
    }
}
