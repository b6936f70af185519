// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Circle annotation — a fixed-style outline drawn onto a copy of the buffer,
// with strict whole-circle bounds validation (no partial clipping).

use image::Rgb;
use imageproc::drawing::draw_hollow_circle_mut;
use tracing::{debug, instrument};

use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_core::types::CircleSpec;

use crate::buffer::PixelBuffer;

/// Annotation colour: pure red.
const OUTLINE: Rgb<u8> = Rgb([255, 0, 0]);

/// Draw a non-filled circle outline (2 px stroke, pure red) centred at
/// (`center_x`, `center_y`) with the given radius, onto a copy of the buffer.
///
/// Validation runs in order, first failure wins, each reported as
/// [`BildwerkError::OutOfBounds`]:
///
/// 1. the centre lies inside the buffer;
/// 2. the radius is positive;
/// 3. the circle's full bounding box lies inside the buffer — the strict
///    comparisons (`center_x + radius < width` etc.) are intentional, so a
///    circle touching the last pixel row or column is rejected wholesale
///    rather than drawn truncated.
#[instrument(skip(buffer), fields(center_x, center_y, radius))]
pub fn draw_circle(
    buffer: &PixelBuffer,
    center_x: i32,
    center_y: i32,
    radius: i32,
) -> Result<PixelBuffer> {
    let width = buffer.width() as i32;
    let height = buffer.height() as i32;

    if center_x < 0 || center_x >= width || center_y < 0 || center_y >= height {
        return Err(BildwerkError::OutOfBounds(format!(
            "centre ({center_x}, {center_y}) lies outside the {width}x{height} image"
        )));
    }
    if radius <= 0 {
        return Err(BildwerkError::OutOfBounds(format!(
            "radius must be positive, got {radius}"
        )));
    }
    if center_x - radius < 0
        || center_x + radius >= width
        || center_y - radius < 0
        || center_y + radius >= height
    {
        return Err(BildwerkError::OutOfBounds(format!(
            "circle of radius {radius} at ({center_x}, {center_y}) extends past the {width}x{height} image"
        )));
    }

    let mut annotated = buffer.clone().into_rgb();
    // Two concentric passes give the 2 px stroke.
    draw_hollow_circle_mut(&mut annotated, (center_x, center_y), radius, OUTLINE);
    draw_hollow_circle_mut(&mut annotated, (center_x, center_y), radius - 1, OUTLINE);

    debug!(center_x, center_y, radius, "circle drawn");
    Ok(PixelBuffer::from_rgb(annotated))
}

/// Convenience wrapper taking a complete [`CircleSpec`].
pub fn draw_circle_spec(buffer: &PixelBuffer, spec: CircleSpec) -> Result<PixelBuffer> {
    draw_circle(buffer, spec.center_x, spec.center_y, spec.radius)
}

// -- Tests --------------------------------------------------------------------
