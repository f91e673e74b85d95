// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// grayscope-imaging — The image transform pipeline.
//
// Decodes JPEG/PNG bytes, converts to grayscale, builds a 256-bin intensity
// histogram, and applies an optional tone filter (equalize or enhance). Every
// stage returns a new buffer; nothing is modified in place.

pub mod decode;
pub mod encode;
pub mod filter;
pub mod grayscale;
pub mod histogram;
pub mod pipeline;

#[cfg(test)]
mod test_support;

// Re-export the stage entry points so callers can use `grayscope_imaging::run` etc.
pub use decode::{ImageDecoder, decode};
pub use encode::{encode_png_gray, encode_png_raster};
pub use filter::apply_filter;
pub use grayscale::to_grayscale;
pub use histogram::build_histogram;
pub use pipeline::{Pipeline, PipelineResult, run};
