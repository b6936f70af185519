// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the camera handle and persisted configuration,
// and provides the file open/export helpers the Dioxus pages call.
//
// The camera is `Send` but not `Sync`, so it lives behind `Arc<Mutex<>>` for
// safe sharing between the page handlers and the preview poll loop.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_core::AppConfig;
use bildwerk_image::PixelBuffer;

use super::camera::CameraFeed;
use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// All fields are cheaply cloneable (Arc-wrapped) so that the struct can be
/// passed into closures and async blocks without lifetime issues.
#[derive(Clone)]
pub struct AppServices {
    camera: Arc<Mutex<Option<CameraFeed>>>,
    config: Arc<Mutex<AppConfig>>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise all services. Call once at app startup.
    ///
    /// An unreadable config file falls back to defaults; the camera is not
    /// opened until the user (or the auto-start setting) asks for it.
    pub fn init() -> Self {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = load_config(&dir).unwrap_or_else(|| {
            info!("no saved config, using defaults");
            AppConfig::default()
        });

        Self {
            camera: Arc::new(Mutex::new(None)),
            config: Arc::new(Mutex::new(config)),
            data_dir: dir,
        }
    }

    // -- Camera --------------------------------------------------------------

    /// Open the configured camera and start streaming. Returns the actual
    /// resolution the device delivers.
    pub fn start_camera(&self) -> Result<(u32, u32)> {
        let cfg = self.config();
        let feed = CameraFeed::open(cfg.camera_index, cfg.camera_width, cfg.camera_height)?;
        let resolution = feed.resolution();
        *self.camera.lock().expect("camera lock poisoned") = Some(feed);
        Ok(resolution)
    }

    /// Release the camera device.
    pub fn stop_camera(&self) {
        let released = self
            .camera
            .lock()
            .expect("camera lock poisoned")
            .take()
            .is_some();
        if released {
            info!("camera stopped");
        }
    }

    /// Whether a camera stream is currently open.
    pub fn camera_running(&self) -> bool {
        self.camera.lock().expect("camera lock poisoned").is_some()
    }

    /// Grab one frame from the running camera.
    pub fn grab_frame(&self) -> Result<PixelBuffer> {
        let mut guard = self.camera.lock().expect("camera lock poisoned");
        match *guard {
            Some(ref mut feed) => feed.grab(),
            None => Err(BildwerkError::Device("camera is not running".into())),
        }
    }

    // -- Files ---------------------------------------------------------------

    /// Load an image file into a pixel buffer.
    pub fn load_image(&self, path: &Path) -> Result<PixelBuffer> {
        let buffer = PixelBuffer::open(path)?;
        info!(
            path = %path.display(),
            width = buffer.width(),
            height = buffer.height(),
            "image opened"
        );
        Ok(buffer)
    }

    /// Write a buffer to disk. JPEG output uses the configured quality;
    /// other formats are inferred from the extension.
    pub fn export_image(&self, buffer: &PixelBuffer, path: &Path) -> Result<()> {
        let is_jpeg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"));

        if is_jpeg {
            let bytes = buffer.to_jpeg_bytes(self.config().jpeg_quality)?;
            std::fs::write(path, bytes).map_err(BildwerkError::Io)?;
        } else {
            buffer.save(path)?;
        }

        info!(path = %path.display(), "image exported");
        Ok(())
    }

    // -- Config --------------------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Update and persist the config.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.config.lock().expect("config lock poisoned") = config.clone();
        persist_config(&self.data_dir, config)
    }
}

// -- Config persistence -------------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unreadable config");
            None
        }
    }
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(data_dir.join(CONFIG_FILE), json).map_err(BildwerkError::Io)?;
    Ok(())
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Persisted config reads back unchanged; a missing file yields `None`.
    #[test]
    fn config_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(dir.path()).is_none());

        let config = AppConfig {
            camera_index: 2,
            jpeg_quality: 60,
            ..AppConfig::default()
        };
        persist_config(dir.path(), &config).unwrap();
        assert_eq!(load_config(dir.path()), Some(config));
    }

    /// A corrupt config file is ignored rather than crashing startup.
    #[test]
    fn corrupt_config_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert!(load_config(dir.path()).is_none());
    }
}
