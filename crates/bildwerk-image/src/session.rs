// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Editing session — the current/original buffer pair and the commit rules
// around it.

use tracing::{info, instrument};

use bildwerk_core::error::Result;
use bildwerk_core::types::TransformParams;

use crate::buffer::PixelBuffer;
use crate::pipeline;

/// One editing session over a single loaded or captured image.
///
/// Holds exactly two buffers: `current`, replaced wholesale by each committed
/// transform, and `original`, set once at load/capture time and used only as
/// the reset source. The two never share storage — every assignment that
/// establishes one from the other deep-copies.
///
/// The session lifecycle is `load -> (apply | reset)*`; the "empty" state is
/// the absence of a `Session` (the presentation layer holds an
/// `Option<Session>`), and a fresh load/capture simply replaces the whole
/// session, discarding prior state.
#[derive(Debug, Clone)]
pub struct Session {
    current: PixelBuffer,
    original: PixelBuffer,
}

impl Session {
    /// Start a session from a freshly loaded or captured buffer.
    #[instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
    pub fn load(buffer: PixelBuffer) -> Self {
        info!("session started");
        Self {
            current: buffer.clone(),
            original: buffer,
        }
    }

    /// The working buffer all display paths read from.
    pub fn current(&self) -> &PixelBuffer {
        &self.current
    }

    /// The untouched baseline.
    pub fn original(&self) -> &PixelBuffer {
        &self.original
    }

    /// Run the transform pipeline over `current` and commit the result as
    /// the new `current`.
    ///
    /// All-or-nothing: on any error the previous `current` remains the
    /// active state and `original` is untouched either way.
    pub fn apply(&mut self, params: &TransformParams) -> Result<()> {
        let transformed = pipeline::apply(&self.current, params)?;
        self.current = transformed;
        Ok(())
    }

    /// Restore `current` to a deep copy of `original`.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
        info!("session reset to original");
    }
}

// -- Tests --------------------------------------------------------------------
