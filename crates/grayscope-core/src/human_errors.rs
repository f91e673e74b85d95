// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for whatever front end displays results.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Nothing here is retriable: the pipeline is deterministic, so the same input
// fails the same way every time.

use crate::error::GrayscopeError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user can fix it by choosing a different image or setting.
    ActionRequired,
    /// Something went wrong producing output; a different image will not help.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `GrayscopeError` into a `HumanError`.
pub fn humanize_error(err: &GrayscopeError) -> HumanError {
    match err {
        // -- Decode errors --
        GrayscopeError::EmptyInput => HumanError {
            message: "No image was provided.".into(),
            suggestion: "Choose a JPEG or PNG file and try again.".into(),
            severity: Severity::ActionRequired,
        },

        GrayscopeError::UnrecognizedFormat => HumanError {
            message: "This file doesn't look like an image.".into(),
            suggestion: "Only JPEG and PNG images are supported. Check that you picked the right file.".into(),
            severity: Severity::ActionRequired,
        },

        GrayscopeError::UnsupportedFormat(format) => HumanError {
            message: "This type of image isn't supported.".into(),
            suggestion: format!("Save the image as a JPEG or PNG first, then try again. (Format: {format})"),
            severity: Severity::ActionRequired,
        },

        GrayscopeError::Decode { format, .. } => HumanError {
            message: format!("This {format} image couldn't be read."),
            suggestion: "The file may be damaged or incomplete. Try opening it in another program, or upload it again.".into(),
            severity: Severity::ActionRequired,
        },

        GrayscopeError::InputTooLarge { limit, .. } => HumanError {
            message: "This file is too large.".into(),
            suggestion: format!("Choose an image smaller than {} MB.", limit / (1024 * 1024)),
            severity: Severity::ActionRequired,
        },

        GrayscopeError::DimensionsTooLarge {
            max_width,
            max_height,
            ..
        } => HumanError {
            message: "This image has too many pixels.".into(),
            suggestion: format!("Resize the image to at most {max_width}x{max_height} pixels, then try again."),
            severity: Severity::ActionRequired,
        },

        // -- Raster errors --
        GrayscopeError::InvalidChannelCount(channels) => HumanError {
            message: "This image's colour layout isn't supported.".into(),
            suggestion: format!(
                "The image has {channels} colour channel(s). Save it as an ordinary RGB or grayscale image and try again."
            ),
            severity: Severity::ActionRequired,
        },

        GrayscopeError::InvalidRaster(_) => HumanError {
            message: "The image data is inconsistent.".into(),
            suggestion: "The pixel data doesn't match the image size. Please report this problem.".into(),
            severity: Severity::Permanent,
        },

        // -- Output / outer surfaces --
        GrayscopeError::Encode(_) => HumanError {
            message: "The result couldn't be saved as an image.".into(),
            suggestion: "Please try again. If it keeps happening, report this problem.".into(),
            severity: Severity::Permanent,
        },

        GrayscopeError::Config(detail) => HumanError {
            message: "The settings file has a problem.".into(),
            suggestion: format!("Fix the setting and try again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        GrayscopeError::Io(_) => HumanError {
            message: "A file couldn't be read or written.".into(),
            suggestion: "Check that the file exists and that you have permission to use the folder.".into(),
            severity: Severity::ActionRequired,
        },

        GrayscopeError::Serialization(_) => HumanError {
            message: "The settings file couldn't be understood.".into(),
            suggestion: "Make sure the settings file is valid JSON.".into(),
            severity: Severity::ActionRequired,
        },
    }
}
