// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bildwerk-image — Pixel buffers and the transform pipeline for Bildwerk.
//
// Provides the owned RGB pixel buffer, the four transformations (resize,
// brightness reduction, circle annotation, and the display-only channel
// isolation), the pipeline that composes them, and the editing session
// holding the current/original buffer pair.

pub mod brightness;
pub mod buffer;
pub mod channel;
pub mod circle;
pub mod pipeline;
pub mod resize;
pub mod session;

// Re-export the primary types so callers can use `bildwerk_image::PixelBuffer`
// etc.
pub use buffer::PixelBuffer;
pub use session::Session;
