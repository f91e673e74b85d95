// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tone filters — histogram equalization and fixed-gain contrast enhancement.
// Both work from a histogram computed on the spot from the image they are
// given, and both return a new buffer.

pub mod enhance;
pub mod equalize;

pub use enhance::{ENHANCE_GAIN, enhance};
pub use equalize::{equalization_lut, equalize};

use grayscope_core::{FilterKind, FilteredImage, GrayscaleImage};
use tracing::{info, instrument};

/// Apply the selected filter. `FilterKind::None` yields `None`.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn apply_filter(image: &GrayscaleImage, kind: FilterKind) -> Option<FilteredImage> {
    let filtered = match kind {
        FilterKind::None => return None,
        FilterKind::Equalize => equalize(image),
        FilterKind::Enhance => enhance(image),
    };
    info!(filter = %kind, "Filter applied");
    Some(FilteredImage {
        kind,
        image: filtered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::gray;

    #[test]
    fn none_is_a_no_op() {
        assert!(apply_filter(&gray(2, 1, &[1, 2]), FilterKind::None).is_none());
    }

    #[test]
    fn result_records_the_filter() {
        let img = gray(2, 1, &[100, 200]);
        let filtered = apply_filter(&img, FilterKind::Enhance).unwrap();
        assert_eq!(filtered.kind, FilterKind::Enhance);
        assert_eq!(filtered.image.as_raw(), &[75, 225]);
        // Source untouched.
        assert_eq!(img.as_raw(), &[100, 200]);
    }

    #[test]
    fn output_shape_matches_input() {
        let data: Vec<u8> = (0..60u8).map(|v| v * 4).collect();
        let img = gray(6, 10, &data);
        for kind in [FilterKind::Equalize, FilterKind::Enhance] {
            let out = apply_filter(&img, kind).unwrap().image;
            assert_eq!((out.width(), out.height()), (6, 10));
        }
    }
}
