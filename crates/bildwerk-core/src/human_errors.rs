// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the editor status line.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity level drives how the status line is presented.

use crate::error::BildwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Device blip — retrying is likely to succeed.
    Transient,
    /// User must fix their input (field text, circle geometry).
    ActionRequired,
    /// Cannot be fixed by retrying — damaged file, unsupported format.
    Permanent,
}

/// A human-readable error with a plain English message and an actionable
/// suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as the status-line heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether retrying the same action may succeed without changes.
    pub retriable: bool,
    /// Severity level (drives icon/colour in the UI).
    pub severity: Severity,
}

/// Convert a `BildwerkError` into a `HumanError` suitable for the status line.
pub fn humanize_error(err: &BildwerkError) -> HumanError {
    match err {
        BildwerkError::Decode(_) => HumanError {
            message: "We couldn't read this image.".into(),
            suggestion: "The file may be damaged or in an unsupported format. Try a PNG or JPEG file instead.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        BildwerkError::Encode(_) => HumanError {
            message: "The image couldn't be written in that format.".into(),
            suggestion: "Try exporting as a PNG file instead.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        BildwerkError::Device(detail) => HumanError {
            message: "The camera isn't available right now.".into(),
            suggestion: format!(
                "Make sure a webcam is connected and not in use by another app, then try again. ({detail})"
            ),
            retriable: true,
            severity: Severity::Transient,
        },

        BildwerkError::Parse(detail) => HumanError {
            message: "One of the fields isn't a number.".into(),
            suggestion: format!("Use plain whole numbers like 640, or leave the field empty. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        BildwerkError::InvalidDimension(detail) => HumanError {
            message: "That size doesn't work.".into(),
            suggestion: format!("Width, height and radius must be bigger than zero. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        BildwerkError::OutOfBounds(detail) => HumanError {
            message: "The circle doesn't fit inside the image.".into(),
            suggestion: format!(
                "Move the centre or shrink the radius so the whole circle fits within the picture. ({detail})"
            ),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        BildwerkError::Io(_) => HumanError {
            message: "We couldn't read or write that file.".into(),
            suggestion: "Check that the file still exists and that you have permission to use it, then try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        BildwerkError::Serialization(_) => HumanError {
            message: "The settings file couldn't be understood.".into(),
            suggestion: "Your saved settings may be damaged. Defaults will be used; saving again will repair the file.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}
