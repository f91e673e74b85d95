// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grayscope — Core image types, configuration, and error definitions shared
// across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod types;

pub use config::{MAX_PIXELS, PipelineConfig};
pub use error::{GrayscopeError, Result};
pub use types::*;
