// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline — decode, convert to grayscale, build the histogram, and optionally
// apply a tone filter, in one linear pass.

use grayscope_core::error::Result;
use grayscope_core::{
    FilterKind, FilteredImage, GrayscaleImage, Histogram, PipelineConfig, RasterImage,
    SourceFormat,
};
use tracing::{info, instrument};

use crate::decode::ImageDecoder;
use crate::filter::apply_filter;
use crate::grayscale::to_grayscale;
use crate::histogram::build_histogram;

/// Everything one pipeline run produces, for a renderer to display.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// The decoded input image.
    pub original: RasterImage,
    /// Encoding the input was decoded from.
    pub source_format: SourceFormat,
    /// Luminance of `original`.
    pub grayscale: GrayscaleImage,
    /// Intensity histogram of `grayscale`.
    pub histogram: Histogram,
    /// Filtered copy of `grayscale`, when a filter was selected.
    pub filtered: Option<FilteredImage>,
}

/// Single-entry image pipeline.
///
/// Holds only immutable configuration, so one `Pipeline` can serve concurrent
/// `run` calls.
///
/// ```ignore
/// let result = Pipeline::default().run(&bytes, FilterKind::Equalize)?;
/// plot(result.histogram.counts());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    decoder: ImageDecoder,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            decoder: ImageDecoder::new(config),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        self.decoder.config()
    }

    /// Run every stage on `data`. The first failing stage aborts the run and
    /// its error is returned; later stages are not invoked.
    #[instrument(skip(self, data, filter), fields(data_len = data.len(), filter = %filter))]
    pub fn run(&self, data: &[u8], filter: FilterKind) -> Result<PipelineResult> {
        let (original, source_format) = self.decoder.decode_with_format(data)?;
        let grayscale = to_grayscale(&original)?;
        let histogram = build_histogram(&grayscale);
        let filtered = apply_filter(&grayscale, filter);

        info!(
            format = %source_format,
            width = grayscale.width(),
            height = grayscale.height(),
            filtered = filtered.is_some(),
            "Pipeline complete"
        );

        Ok(PipelineResult {
            original,
            source_format,
            grayscale,
            histogram,
            filtered,
        })
    }
}

/// Run the pipeline with the default configuration.
pub fn run(data: &[u8], filter: FilterKind) -> Result<PipelineResult> {
    Pipeline::default().run(data, filter)
}
