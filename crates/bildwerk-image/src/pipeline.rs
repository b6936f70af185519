// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Transform pipeline — validates a parameter set, then runs
// resize -> brightness -> circle over a working copy. All-or-nothing: any
// failure aborts before anything is committed, so the caller's current
// buffer is never left half-transformed.

use tracing::{info, instrument};

use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_core::types::TransformParams;

use crate::buffer::PixelBuffer;
use crate::{brightness, circle, resize};

/// Apply a full parameter set to `source`, producing the transformed buffer.
///
/// Stages run unconditionally in fixed order — resize, brightness, circle
/// (the circle stage only when all three circle fields are present). All
/// parameters are validated before any stage runs, so a bad later-stage
/// input can never leave an earlier stage's output as the new state.
///
/// The source buffer is untouched; committing the result is the caller's
/// decision (see [`crate::session::Session::apply`]).
#[instrument(skip(source, params))]
pub fn apply(source: &PixelBuffer, params: &TransformParams) -> Result<PixelBuffer> {
    validate(params)?;

    let resized = resize::resize(
        source,
        params.target_width.map(|w| w as u32),
        params.target_height.map(|h| h as u32),
    )?;
    let adjusted = brightness::adjust_brightness(&resized, params.brightness_delta);
    let annotated = match params.circle() {
        Some(spec) => circle::draw_circle_spec(&adjusted, spec)?,
        None => adjusted,
    };

    info!(
        width = annotated.width(),
        height = annotated.height(),
        "pipeline complete"
    );
    Ok(annotated)
}

/// Reject non-positive dimensions up front. Present fields are checked
/// individually — a lone negative radius fails even though a partial circle
/// specification would never be drawn.
fn validate(params: &TransformParams) -> Result<()> {
    if let Some(width) = params.target_width
        && width <= 0
    {
        return Err(BildwerkError::InvalidDimension(format!(
            "target width must be positive, got {width}"
        )));
    }
    if let Some(height) = params.target_height
        && height <= 0
    {
        return Err(BildwerkError::InvalidDimension(format!(
            "target height must be positive, got {height}"
        )));
    }
    if let Some(radius) = params.circle_radius
        && radius <= 0
    {
        return Err(BildwerkError::InvalidDimension(format!(
            "circle radius must be positive, got {radius}"
        )));
    }
    Ok(())
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::solid;

    fn params() -> TransformParams {
        TransformParams::default()
    }

    /// Empty parameters yield an equivalent copy (brightness 0 round-trips
    /// byte-exactly).
    #[test]
    fn empty_params_are_identity() {
        let source = solid(40, 30, [120, 90, 60]);
        let out = apply(&source, &params()).unwrap();
        assert_eq!(out, source);
    }

    /// A non-positive dimension is rejected before any stage runs.
    #[test]
    fn rejects_non_positive_dimensions() {
        let source = solid(40, 30, [0, 0, 0]);

        for bad in [
            TransformParams {
                target_width: Some(-5),
                ..params()
            },
            TransformParams {
                target_height: Some(0),
                ..params()
            },
            TransformParams {
                circle_radius: Some(-3),
                ..params()
            },
        ] {
            let err = apply(&source, &bad).unwrap_err();
            assert!(matches!(err, BildwerkError::InvalidDimension(_)));
        }
    }

    /// A partial circle specification is treated as "no circle requested".
    #[test]
    fn partial_circle_is_skipped() {
        let source = solid(40, 30, [10, 10, 10]);
        let partial = TransformParams {
            circle_center_x: Some(20),
            circle_radius: Some(5),
            ..params()
        };
        let out = apply(&source, &partial).unwrap();
        assert_eq!(out, source);
    }

    /// A failing circle stage aborts the whole pipeline — the error surfaces
    /// and the source is untouched.
    #[test]
    fn circle_failure_aborts_pipeline() {
        let source = solid(40, 30, [10, 10, 10]);
        let before = source.clone();
        let bad_circle = TransformParams {
            circle_center_x: Some(39),
            circle_center_y: Some(15),
            circle_radius: Some(10),
            ..params()
        };
        let err = apply(&source, &bad_circle).unwrap_err();
        assert!(matches!(err, BildwerkError::OutOfBounds(_)));
        assert_eq!(source, before);
    }

    /// The end-to-end scenario: a red image resized by width only, darkened,
    /// then annotated.
    #[test]
    fn end_to_end_red_image() {
        let source = solid(100, 100, [255, 0, 0]);

        // Width 50, no height: aspect is preserved and the image stays red.
        let step1 = apply(
            &source,
            &TransformParams {
                target_width: Some(50),
                ..params()
            },
        )
        .unwrap();
        assert_eq!(step1.dimensions(), (50, 50));
        assert_eq!(step1.pixel(25, 25), [255, 0, 0]);

        // Brightness 50: darker red, same dimensions.
        let step2 = apply(
            &source,
            &TransformParams {
                target_width: Some(50),
                brightness_delta: 50,
                ..params()
            },
        )
        .unwrap();
        assert_eq!(step2.dimensions(), (50, 50));
        assert_eq!(step2.pixel(25, 25), [205, 0, 0]);

        // Circle at (25, 25) radius 10: the annotation ring is present and
        // the rest of the image is otherwise unchanged.
        let step3 = apply(
            &step2,
            &TransformParams {
                circle_center_x: Some(25),
                circle_center_y: Some(25),
                circle_radius: Some(10),
                ..params()
            },
        )
        .unwrap();
        assert_eq!(step3.pixel(35, 25), [255, 0, 0]);
        assert_eq!(step3.pixel(25, 25), [205, 0, 0]);
        assert_eq!(step3.pixel(0, 0), [205, 0, 0]);
    }

    /// Stages compose in one invocation as well.
    #[test]
    fn all_stages_in_one_call() {
        let source = solid(200, 100, [200, 150, 100]);
        let all = TransformParams {
            target_width: Some(100),
            target_height: Some(100),
            brightness_delta: 100,
            circle_center_x: Some(50),
            circle_center_y: Some(50),
            circle_radius: Some(20),
            ..params()
        };
        let out = apply(&source, &all).unwrap();
        assert_eq!(out.dimensions(), (100, 100));
        // Darkened body colour away from the ring.
        assert_eq!(out.pixel(5, 5), [100, 75, 50]);
        // Ring present.
        assert_eq!(out.pixel(70, 50), [255, 0, 0]);
    }
}
