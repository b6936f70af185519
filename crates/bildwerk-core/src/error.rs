// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Bildwerk.

use thiserror::Error;

/// Top-level error type for all Bildwerk operations.
///
/// Every variant is recoverable at the next user action. Camera frame-read
/// failures (`Device`) are additionally swallowed per-frame by the live
/// preview loop so a single dropped frame never interrupts the stream.
#[derive(Debug, Error)]
pub enum BildwerkError {
    // -- Image source errors --
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("image encoding failed: {0}")]
    Encode(String),

    // -- Camera errors --
    #[error("camera device error: {0}")]
    Device(String),

    // -- Parameter errors --
    #[error("invalid parameter text: {0}")]
    Parse(String),

    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("circle out of bounds: {0}")]
    OutOfBounds(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BildwerkError>;
