// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Resizing — exact two-dimension scaling, or single-dimension scaling that
// preserves the original aspect ratio.

use image::imageops::{self, FilterType};
use tracing::{debug, instrument};

use bildwerk_core::error::{BildwerkError, Result};

use crate::buffer::PixelBuffer;

/// Resize a buffer.
///
/// - Both targets given: scale to exactly (width, height); aspect ratio may
///   distort.
/// - Only one given: the other dimension is derived so the original aspect
///   ratio is preserved (rounded, never below 1 pixel).
/// - Neither given: an equivalent copy is returned unchanged.
///
/// Resampling is bilinear (`FilterType::Triangle`), which is deterministic
/// and matches what the editor's preview does when scaling to fit.
#[instrument(skip(buffer), fields(target_width, target_height))]
pub fn resize(
    buffer: &PixelBuffer,
    target_width: Option<u32>,
    target_height: Option<u32>,
) -> Result<PixelBuffer> {
    let (src_w, src_h) = buffer.dimensions();

    let (out_w, out_h) = match (target_width, target_height) {
        (None, None) => return Ok(buffer.clone()),
        (Some(w), Some(h)) => (checked(w, "width")?, checked(h, "height")?),
        (Some(w), None) => {
            let w = checked(w, "width")?;
            (w, scaled(src_h, w, src_w))
        }
        (None, Some(h)) => {
            let h = checked(h, "height")?;
            (scaled(src_w, h, src_h), h)
        }
    };

    debug!(src_w, src_h, out_w, out_h, "resizing");
    let resized = imageops::resize(buffer.as_rgb(), out_w, out_h, FilterType::Triangle);
    Ok(PixelBuffer::from_rgb(resized))
}

fn checked(value: u32, name: &str) -> Result<u32> {
    if value == 0 {
        return Err(BildwerkError::InvalidDimension(format!(
            "target {name} must be positive"
        )));
    }
    Ok(value)
}

/// Derived dimension for a single-target resize: `other * target / reference`,
/// rounded to the nearest pixel, never below 1.
fn scaled(other: u32, target: u32, reference: u32) -> u32 {
    let derived = (f64::from(other) * f64::from(target) / f64::from(reference)).round() as u32;
    derived.max(1)
}

// -- Tests --------------------------------------------------------------------
