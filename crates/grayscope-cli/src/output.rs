// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Writes pipeline results to disk for viewing.

use std::fs;
use std::path::{Path, PathBuf};

use grayscope_core::error::Result;
use grayscope_core::{FilterKind, Histogram, SourceFormat};
use grayscope_imaging::{PipelineResult, encode_png_gray};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Contents of `histogram.json`.
#[derive(Debug, Serialize)]
struct HistogramReport<'a> {
    source_format: &'a SourceFormat,
    width: u32,
    height: u32,
    channels: u8,
    filter: FilterKind,
    histogram: &'a Histogram,
}

/// Write `grayscale.png`, `histogram.json` and, when a filter ran,
/// `filtered-<kind>.png` into `dir`. Returns the paths written.
#[instrument(skip(result), fields(dir = %dir.display()))]
pub fn write_outputs(result: &PipelineResult, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let grayscale_path = dir.join("grayscale.png");
    fs::write(&grayscale_path, encode_png_gray(&result.grayscale)?)?;
    written.push(grayscale_path);

    if let Some(filtered) = &result.filtered {
        let path = dir.join(format!("filtered-{}.png", filtered.kind));
        fs::write(&path, encode_png_gray(&filtered.image)?)?;
        written.push(path);
    }

    let report = HistogramReport {
        source_format: &result.source_format,
        width: result.original.width(),
        height: result.original.height(),
        channels: result.original.channels(),
        filter: result
            .filtered
            .as_ref()
            .map(|f| f.kind)
            .unwrap_or_default(),
        histogram: &result.histogram,
    };
    let histogram_path = dir.join("histogram.json");
    fs::write(&histogram_path, serde_json::to_string_pretty(&report)?)?;
    written.push(histogram_path);

    for path in &written {
        debug!(path = %path.display(), "Output written");
    }
    info!(files = written.len(), "Outputs written");
    Ok(written)
}
