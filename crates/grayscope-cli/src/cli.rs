// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use grayscope_core::FilterKind;

#[derive(Debug, Parser)]
#[clap(name = "grayscope", version, about = "Convert an image to grayscale, plot its histogram, and apply a tone filter")]
pub struct Cli {
    /// JPEG or PNG image to process.
    pub input: PathBuf,

    #[arg(long, short, default_value_t = FilterKind::None, help = "Tone filter to apply: none, equalize or enhance")]
    pub filter: FilterKind,

    #[arg(long, short, default_value = ".", help = "Directory to write grayscale.png, histogram.json and the filtered image into")]
    pub out_dir: PathBuf,

    #[arg(long, help = "JSON file with decoder limits")]
    pub config: Option<PathBuf>,
}
