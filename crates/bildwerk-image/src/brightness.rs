// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Brightness reduction — subtract a delta from the HSV value channel while
// leaving hue and saturation alone, so colours darken without shifting.

use image::RgbImage;
use tracing::instrument;

use crate::buffer::PixelBuffer;

/// Reduce brightness by `delta`.
///
/// Each pixel is converted to HSV (value on the 0-255 scale), `delta` is
/// subtracted from the value channel, the result is clamped to [0, 255], and
/// the pixel is converted back. Any delta is accepted — clamping absorbs
/// overflow in both directions, so negative deltas brighten.
///
/// A delta of 0 still round-trips through the conversion; for 8-bit inputs
/// the round-trip is byte-exact (the value channel and the chroma
/// intermediates reconstruct the original bytes within float rounding, and
/// the final round recovers them), which the tests assert.
#[instrument(skip(buffer), fields(delta))]
pub fn adjust_brightness(buffer: &PixelBuffer, delta: i32) -> PixelBuffer {
    let src = buffer.as_rgb();
    let adjusted = RgbImage::from_fn(src.width(), src.height(), |x, y| {
        let (h, s, v) = rgb_to_hsv(src.get_pixel(x, y).0);
        let darkened = (v - delta as f32).clamp(0.0, 255.0);
        image::Rgb(hsv_to_rgb(h, s, darkened))
    });
    PixelBuffer::from_rgb(adjusted)
}

/// RGB (0-255 per channel) to HSV with hue in degrees [0, 360), saturation
/// in [0, 1], and value on the 0-255 scale.
fn rgb_to_hsv(rgb: [u8; 3]) -> (f32, f32, f32) {
    let r = f32::from(rgb[0]);
    let g = f32::from(rgb[1]);
    let b = f32::from(rgb[2]);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let h = if chroma == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / chroma + 2.0)
    } else {
        60.0 * ((r - g) / chroma + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { chroma / max };

    (h, s, max)
}

/// Inverse of [`rgb_to_hsv`]; output channels are rounded to the nearest
/// 8-bit value.
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let chroma = v * s;
    let h_prime = (h / 60.0).rem_euclid(6.0);
    let x = chroma * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let m = v - chroma;

    let (r1, g1, b1) = match h_prime as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    [
        (r1 + m).round().clamp(0.0, 255.0) as u8,
        (g1 + m).round().clamp(0.0, 255.0) as u8,
        (b1 + m).round().clamp(0.0, 255.0) as u8,
    ]
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::solid;
    use image::Rgb;

    /// Delta 0 is byte-exact for every pixel of a varied image.
    #[test]
    fn zero_delta_is_byte_exact() {
        let mut img = RgbImage::new(16, 16);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgb([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8]);
        }
        let buffer = PixelBuffer::from_rgb(img);
        let out = adjust_brightness(&buffer, 0);
        assert_eq!(out, buffer);
    }

    /// A fully saturated red darkens along the value axis only.
    #[test]
    fn darken_pure_red() {
        let buffer = solid(4, 4, [255, 0, 0]);
        let out = adjust_brightness(&buffer, 50);
        for pixel in out.as_rgb().pixels() {
            assert_eq!(pixel.0, [205, 0, 0]);
        }
    }

    /// Hue and saturation survive a value reduction: halving the value of
    /// (200, 150, 100) halves every channel.
    #[test]
    fn hue_and_saturation_preserved() {
        let buffer = solid(2, 2, [200, 150, 100]);
        let out = adjust_brightness(&buffer, 100);
        assert_eq!(out.pixel(0, 0), [100, 75, 50]);
    }

    /// Extreme deltas clamp instead of wrapping — +1000 floors at black,
    /// -1000 ceils at full value.
    #[test]
    fn extreme_deltas_clamp() {
        let buffer = solid(3, 3, [90, 120, 60]);

        let black = adjust_brightness(&buffer, 1000);
        for pixel in black.as_rgb().pixels() {
            assert_eq!(pixel.0, [0, 0, 0]);
        }

        // Brightening a neutral grey saturates at white.
        let grey = solid(3, 3, [100, 100, 100]);
        let bright = adjust_brightness(&grey, -1000);
        for pixel in bright.as_rgb().pixels() {
            assert_eq!(pixel.0, [255, 255, 255]);
        }
    }

    /// Dimensions are unchanged and the input is not mutated.
    #[test]
    fn pure_and_dimension_preserving() {
        let buffer = solid(7, 5, [30, 60, 90]);
        let before = buffer.clone();
        let out = adjust_brightness(&buffer, 25);
        assert_eq!(out.dimensions(), (7, 5));
        assert_eq!(buffer, before);
    }
}
