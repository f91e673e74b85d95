// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Intensity histogram — one bin per 8-bit value.

use grayscope_core::{GrayscaleImage, Histogram};
use grayscope_core::types::INTENSITY_LEVELS;
use imageproc::stats;
use tracing::{debug, instrument};

/// Count how often each intensity occurs in `image`.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn build_histogram(image: &GrayscaleImage) -> Histogram {
    let channel = stats::histogram(image.as_gray_image());

    let mut counts = [0u64; INTENSITY_LEVELS];
    if let Some(bins) = channel.channels.first() {
        for (slot, &count) in counts.iter_mut().zip(bins.iter()) {
            *slot = count as u64;
        }
    }

    let histogram = Histogram::from_counts(counts);
    debug!(
        total = histogram.total(),
        peak = histogram.peak(),
        "Histogram built"
    );
    histogram
}
