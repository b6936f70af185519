// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Bildwerk image editor.

use serde::{Deserialize, Serialize};

use crate::error::{BildwerkError, Result};

/// Display-only colour channel selector.
///
/// The selector affects how the current buffer is *rendered*, never the
/// buffer itself — it is re-evaluated on every paint and does not persist
/// into the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    /// Show the image unchanged (identity display path).
    All,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All selector options, in the order they appear in the UI.
    pub const ALL_OPTIONS: [Channel; 4] =
        [Channel::All, Channel::Red, Channel::Green, Channel::Blue];

    /// Interleaved-RGB index of the channel, or `None` for `All`.
    pub fn index(&self) -> Option<usize> {
        match self {
            Channel::All => None,
            Channel::Red => Some(0),
            Channel::Green => Some(1),
            Channel::Blue => Some(2),
        }
    }

    /// UI label for the selector dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::All => "All channels",
            Channel::Red => "Red channel",
            Channel::Green => "Green channel",
            Channel::Blue => "Blue channel",
        }
    }

    /// Inverse of [`Channel::label`], used by the selector's change handler.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL_OPTIONS.into_iter().find(|c| c.label() == label)
    }
}

impl Default for Channel {
    fn default() -> Self {
        Channel::All
    }
}

/// A complete circle-annotation request.
///
/// Produced by [`TransformParams::circle`] only when centre x, centre y and
/// radius are all present. Coordinates may be negative here; geometric
/// validation happens in the circle annotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
}

/// One invocation's worth of transform parameters.
///
/// Mirrors the six optional input fields of the editor. Absent fields mean
/// "leave that aspect alone"; the circle fields are all-or-nothing — a
/// partial circle specification collapses to "no circle requested" rather
/// than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformParams {
    /// Target width in pixels, if the user asked for a resize.
    pub target_width: Option<i32>,
    /// Target height in pixels, if the user asked for a resize.
    pub target_height: Option<i32>,
    /// Amount to subtract from the HSV value channel (0 = no change).
    pub brightness_delta: i32,
    /// Circle centre x coordinate.
    pub circle_center_x: Option<i32>,
    /// Circle centre y coordinate.
    pub circle_center_y: Option<i32>,
    /// Circle radius in pixels.
    pub circle_radius: Option<i32>,
}

impl TransformParams {
    /// Build parameters from the editor's six text fields.
    ///
    /// Empty (or whitespace-only) fields become `None`; anything else must
    /// parse as a base-10 integer or the whole request fails with
    /// [`BildwerkError::Parse`] before it can reach the pipeline.
    pub fn from_fields(
        width: &str,
        height: &str,
        brightness: &str,
        center_x: &str,
        center_y: &str,
        radius: &str,
    ) -> Result<Self> {
        Ok(Self {
            target_width: parse_field("width", width)?,
            target_height: parse_field("height", height)?,
            brightness_delta: parse_field("brightness", brightness)?.unwrap_or(0),
            circle_center_x: parse_field("circle centre x", center_x)?,
            circle_center_y: parse_field("circle centre y", center_y)?,
            circle_radius: parse_field("circle radius", radius)?,
        })
    }

    /// The circle request, if all three circle fields are present.
    pub fn circle(&self) -> Option<CircleSpec> {
        match (self.circle_center_x, self.circle_center_y, self.circle_radius) {
            (Some(center_x), Some(center_y), Some(radius)) => Some(CircleSpec {
                center_x,
                center_y,
                radius,
            }),
            _ => None,
        }
    }

    /// True when no field was filled in at all (apply would be a no-op
    /// brightness round-trip).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_field(name: &str, text: &str) -> Result<Option<i32>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<i32>().map(Some).map_err(|_| {
        BildwerkError::Parse(format!("\"{trimmed}\" is not a whole number ({name})"))
    })
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// All-empty fields produce the default parameter set.
    #[test]
    fn from_fields_all_empty_is_default() {
        let params = TransformParams::from_fields("", "", "", "  ", "", "").unwrap();
        assert_eq!(params, TransformParams::default());
        assert!(params.is_empty());
        assert!(params.circle().is_none());
    }

    /// Filled fields parse as signed integers, with surrounding whitespace
    /// tolerated.
    #[test]
    fn from_fields_parses_integers() {
        let params =
            TransformParams::from_fields("640", " 480 ", "-30", "100", "120", "25").unwrap();
        assert_eq!(params.target_width, Some(640));
        assert_eq!(params.target_height, Some(480));
        assert_eq!(params.brightness_delta, -30);
        assert_eq!(
            params.circle(),
            Some(CircleSpec {
                center_x: 100,
                center_y: 120,
                radius: 25
            })
        );
        assert!(!params.is_empty());
    }

    /// Non-numeric text is rejected with a `Parse` error naming the field.
    #[test]
    fn from_fields_rejects_non_numeric_text() {
        let err = TransformParams::from_fields("wide", "", "", "", "", "").unwrap_err();
        assert!(matches!(err, BildwerkError::Parse(_)));
        assert!(err.to_string().contains("width"));
    }

    /// A partial circle specification collapses to "no circle requested"
    /// rather than an error.
    #[test]
    fn partial_circle_is_no_circle() {
        let params = TransformParams::from_fields("", "", "", "50", "", "10").unwrap();
        assert!(params.circle().is_none());

        let params = TransformParams::from_fields("", "", "", "50", "60", "").unwrap();
        assert!(params.circle().is_none());
    }

    /// Negative values parse successfully here; positivity is the pipeline
    /// validator's concern, not the parser's.
    #[test]
    fn negative_values_parse() {
        let params = TransformParams::from_fields("-5", "", "", "-1", "0", "0").unwrap();
        assert_eq!(params.target_width, Some(-5));
        assert_eq!(
            params.circle(),
            Some(CircleSpec {
                center_x: -1,
                center_y: 0,
                radius: 0
            })
        );
    }

    /// Channel labels round-trip through the selector helpers.
    #[test]
    fn channel_labels_round_trip() {
        for channel in Channel::ALL_OPTIONS {
            assert_eq!(Channel::from_label(channel.label()), Some(channel));
        }
        assert_eq!(Channel::from_label("Alpha channel"), None);
    }

    /// Only `All` lacks an interleaved index.
    #[test]
    fn channel_index_mapping() {
        assert_eq!(Channel::All.index(), None);
        assert_eq!(Channel::Red.index(), Some(0));
        assert_eq!(Channel::Green.index(), Some(1));
        assert_eq!(Channel::Blue.index(), Some(2));
    }
}
