// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Camera capture — wraps a nokhwa camera stream and hands frames to the
// core as ordinary pixel buffers. The core has no awareness of timing; the
// editor page owns the poll loop.

use nokhwa::{
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
    Camera,
};
use tracing::{info, instrument};

use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_image::PixelBuffer;

/// An open camera stream delivering RGB frames.
pub struct CameraFeed {
    camera: Camera,
    width: u32,
    height: u32,
}

impl CameraFeed {
    /// Open camera `index` at a requested resolution. The device may choose
    /// the closest format it supports; the actual resolution is reported by
    /// [`CameraFeed::resolution`].
    #[instrument]
    pub fn open(index: u32, width: u32, height: u32) -> Result<Self> {
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
            CameraFormat::new(Resolution::new(width, height), FrameFormat::YUYV, 30),
        ));

        let mut camera = Camera::new(CameraIndex::Index(index), requested)
            .map_err(|err| BildwerkError::Device(format!("failed to open camera {index}: {err}")))?;

        camera
            .open_stream()
            .map_err(|err| BildwerkError::Device(format!("failed to start camera stream: {err}")))?;

        let actual = camera.resolution();
        info!(
            width = actual.width(),
            height = actual.height(),
            "camera stream open"
        );

        Ok(Self {
            camera,
            width: actual.width(),
            height: actual.height(),
        })
    }

    /// Grab one frame and decode it to an owned RGB buffer. Blocks until the
    /// next frame is ready.
    pub fn grab(&mut self) -> Result<PixelBuffer> {
        let frame = self
            .camera
            .frame()
            .map_err(|err| BildwerkError::Device(format!("frame read failed: {err}")))?;

        let rgb = frame
            .decode_image::<RgbFormat>()
            .map_err(|err| BildwerkError::Device(format!("frame decode failed: {err}")))?;

        Ok(PixelBuffer::from_rgb(rgb))
    }

    /// The resolution the device actually delivers.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
