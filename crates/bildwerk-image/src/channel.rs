// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Channel isolation — the display-only per-channel view. Never touches the
// session's committed buffers.

use image::RgbImage;
use tracing::instrument;

use bildwerk_core::types::Channel;

use crate::buffer::PixelBuffer;

/// Produce a new buffer where every pixel keeps only the selected channel;
/// the other two channels are zeroed. Dimensions are unchanged and the input
/// is not mutated.
///
/// Callers short-circuit `Channel::All` (the identity display path) before
/// reaching this function; passing it anyway returns an unchanged copy.
#[instrument(skip(buffer), fields(channel = channel.label()))]
pub fn isolate(buffer: &PixelBuffer, channel: Channel) -> PixelBuffer {
    let Some(keep) = channel.index() else {
        return buffer.clone();
    };

    let src = buffer.as_rgb();
    let isolated = RgbImage::from_fn(src.width(), src.height(), |x, y| {
        let mut pixel = [0u8; 3];
        pixel[keep] = src.get_pixel(x, y).0[keep];
        image::Rgb(pixel)
    });
    PixelBuffer::from_rgb(isolated)
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn sample() -> PixelBuffer {
        let mut img = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        img.put_pixel(2, 1, Rgb([200, 150, 100]));
        PixelBuffer::from_rgb(img)
    }

    /// For each colour channel, the selected channel survives and the other
    /// two are zero for every pixel.
    #[test]
    fn isolate_keeps_only_selected_channel() {
        let buffer = sample();
        for channel in [Channel::Red, Channel::Green, Channel::Blue] {
            let keep = channel.index().unwrap();
            let out = isolate(&buffer, channel);
            assert_eq!(out.dimensions(), buffer.dimensions());

            for (x, y, pixel) in out.as_rgb().enumerate_pixels() {
                let original = buffer.pixel(x, y);
                for idx in 0..3 {
                    if idx == keep {
                        assert_eq!(pixel.0[idx], original[idx]);
                    } else {
                        assert_eq!(pixel.0[idx], 0);
                    }
                }
            }
        }
    }

    /// The input buffer is left untouched.
    #[test]
    fn isolate_does_not_mutate_input() {
        let buffer = sample();
        let before = buffer.clone();
        let _ = isolate(&buffer, Channel::Green);
        assert_eq!(buffer, before);
    }

    /// `All` falls back to an unchanged copy.
    #[test]
    fn isolate_all_is_identity() {
        let buffer = sample();
        let out = isolate(&buffer, Channel::All);
        assert_eq!(out, buffer);
    }
}
