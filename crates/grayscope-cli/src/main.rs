// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grayscope — command-line front end.
//
// Entry point. Initialises logging, loads the optional config, runs the
// pipeline on one image, and writes the results.

mod cli;
mod output;

use std::process::ExitCode;

use clap::Parser;
use grayscope_core::error::Result;
use grayscope_core::human_errors::humanize_error;
use grayscope_core::PipelineConfig;
use grayscope_imaging::Pipeline;
use grayscope_imaging::decode::is_supported_format;

use cli::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Grayscope starting");

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Grayscope failed");
            let human = humanize_error(&err);
            eprintln!("{}\n{}", human.message, human.suggestion);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };

    let data = std::fs::read(&cli.input)?;
    if !data.is_empty() && !is_supported_format(&data) {
        tracing::warn!(path = %cli.input.display(), "Input is not PNG or JPEG; decoding may fail");
    }

    let result = Pipeline::new(config).run(&data, cli.filter)?;
    let written = output::write_outputs(&result, &cli.out_dir)?;

    println!(
        "{}x{} {} image, mean intensity {:.1}",
        result.original.width(),
        result.original.height(),
        result.source_format,
        result.histogram.mean().unwrap_or_default()
    );
    for path in written {
        println!("wrote {}", path.display());
    }
    Ok(())
}
