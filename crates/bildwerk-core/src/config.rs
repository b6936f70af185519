// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which camera device to open (0 = default webcam).
    pub camera_index: u32,
    /// Requested camera frame width. The device may deliver the closest
    /// supported resolution instead.
    pub camera_width: u32,
    /// Requested camera frame height.
    pub camera_height: u32,
    /// Quality used when exporting JPEG files (1-100).
    pub jpeg_quality: u8,
    /// Start the live camera preview automatically on launch.
    pub auto_start_preview: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            camera_index: 0,
            camera_width: 640,
            camera_height: 480,
            jpeg_quality: 90,
            auto_start_preview: false,
        }
    }
}
