// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel buffer — the owned, dimensioned 8-bit RGB raster every transform
// reads and produces. Decoding and encoding go through the `image` crate.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tracing::{debug, info, instrument};

use bildwerk_core::error::{BildwerkError, Result};

/// An owned 8-bit, 3-channel RGB raster with interleaved pixel data.
///
/// The wrapped `RgbImage` guarantees `data.len() == width * height * 3` at
/// all times; any operation that changes dimensions produces a new buffer.
/// `Clone` is a deep copy — two buffers never share storage, which is what
/// lets a session hold `current` and `original` without aliasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    image: RgbImage,
}

impl PixelBuffer {
    // -- Construction ---------------------------------------------------------

    /// Load a buffer from an image file on disk.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let img = image::open(path.as_ref()).map_err(|err| {
            BildwerkError::Decode(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        info!(width = img.width(), height = img.height(), "image loaded");
        Ok(Self {
            image: img.to_rgb8(),
        })
    }

    /// Decode a buffer from raw encoded bytes (PNG, JPEG, BMP, ...).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)
            .map_err(|err| BildwerkError::Decode(format!("failed to decode image: {err}")))?;
        debug!(
            width = img.width(),
            height = img.height(),
            "image decoded from bytes"
        );
        Ok(Self {
            image: img.to_rgb8(),
        })
    }

    /// Build a buffer from already-decoded interleaved RGB data, as delivered
    /// by a camera frame.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        let actual = data.len();
        let image = RgbImage::from_raw(width, height, data).ok_or_else(|| {
            BildwerkError::Decode(format!(
                "raw frame size mismatch: {width}x{height} needs {expected} bytes, got {actual}"
            ))
        })?;
        Ok(Self { image })
    }

    /// Wrap an already-decoded `RgbImage`.
    pub fn from_rgb(image: RgbImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// (width, height) pair.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// The RGB triple at (x, y). Panics outside the buffer, like the
    /// underlying `RgbImage`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    /// Borrow the underlying `RgbImage`.
    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the buffer and return the underlying `RgbImage`.
    pub fn into_rgb(self) -> RgbImage {
        self.image
    }

    // -- Output ---------------------------------------------------------------

    /// Write the buffer to a file. The format is inferred from the extension.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.image.save(path.as_ref()).map_err(|err| {
            BildwerkError::Encode(format!(
                "failed to save image to {}: {}",
                path.as_ref().display(),
                err
            ))
        })
    }

    /// Encode the buffer as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        DynamicImage::ImageRgb8(self.image.clone())
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|err| BildwerkError::Encode(format!("PNG encoding failed: {err}")))?;
        Ok(buffer)
    }

    /// Encode the buffer as JPEG bytes with the given quality (1-100).
    pub fn to_jpeg_bytes(&self, quality: u8) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
        self.image
            .write_with_encoder(encoder)
            .map_err(|err| BildwerkError::Encode(format!("JPEG encoding failed: {err}")))?;
        Ok(buffer)
    }
}

/// Solid-colour buffer, handy for tests and benchmarks.
pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> PixelBuffer {
    PixelBuffer::from_rgb(RgbImage::from_pixel(width, height, Rgb(rgb)))
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    /// Raw data whose length disagrees with the dimensions is rejected.
    #[test]
    fn from_raw_rejects_length_mismatch() {
        let err = PixelBuffer::from_raw(10, 10, vec![0u8; 299]).unwrap_err();
        assert!(matches!(err, BildwerkError::Decode(_)));

        let ok = PixelBuffer::from_raw(10, 10, vec![0u8; 300]).unwrap();
        assert_eq!(ok.dimensions(), (10, 10));
    }

    /// `Clone` produces fully independent storage.
    #[test]
    fn clone_is_a_deep_copy() {
        let original = solid(4, 4, [10, 20, 30]);
        let mut copy = original.clone();
        copy.image.put_pixel(0, 0, Rgb([255, 255, 255]));

        assert_eq!(original.pixel(0, 0), [10, 20, 30]);
        assert_eq!(copy.pixel(0, 0), [255, 255, 255]);
    }

    /// PNG encoding round-trips losslessly through `from_bytes`.
    #[test]
    fn png_bytes_round_trip() {
        let buffer = solid(6, 3, [200, 50, 100]);
        let png = buffer.to_png_bytes().unwrap();
        let restored = PixelBuffer::from_bytes(&png).unwrap();
        assert_eq!(restored, buffer);
    }

    /// Garbage bytes surface a `Decode` error, not a panic.
    #[test]
    fn from_bytes_rejects_garbage() {
        let err = PixelBuffer::from_bytes(b"not an image at all").unwrap_err();
        assert!(matches!(err, BildwerkError::Decode(_)));
    }

    /// Save-then-open via a real temp file preserves dimensions and pixels.
    #[test]
    fn save_and_open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");

        let buffer = solid(8, 5, [0, 128, 255]);
        buffer.save(&path).unwrap();

        let restored = PixelBuffer::open(&path).unwrap();
        assert_eq!(restored, buffer);
    }

    /// Opening a missing file reports a decode failure naming the path.
    #[test]
    fn open_missing_file_fails() {
        let err = PixelBuffer::open("/no/such/file.png").unwrap_err();
        assert!(matches!(err, BildwerkError::Decode(_)));
        assert!(err.to_string().contains("/no/such/file.png"));
    }
}
