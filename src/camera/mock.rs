//! Mock camera for testing without a device or photo files.

use image::{Rgb, RgbImage};
use std::fs;
use std::path::PathBuf;

use crate::camera::types::{CaptureError, CaptureResult, PermissionStatus};
use crate::camera::Camera;
use crate::config;

/// A camera that synthesizes solid-color JPEG photos.
///
/// Photos are written into `output_dir`, one file per shot. Permission
/// denials and capture failures can be injected for tests.
#[derive(Debug, Clone)]
pub struct MockCamera {
    /// Photo width (pixels)
    pub width: u32,
    /// Photo height (pixels)
    pub height: u32,
    /// Fill color of synthesized photos
    pub color: [u8; 3],
    /// Directory where photos are written
    pub output_dir: PathBuf,
    deny_camera: bool,
    deny_microphone: bool,
    fail_capture: bool,
    shot: usize,
}

impl MockCamera {
    /// Create a mock camera writing photos into `output_dir`, sized from the
    /// global configuration
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let cfg = config::get();
        Self {
            width: cfg.mock.width,
            height: cfg.mock.height,
            color: [0, 0, 0],
            output_dir: output_dir.into(),
            deny_camera: false,
            deny_microphone: false,
            fail_capture: false,
            shot: 0,
        }
    }

    /// Set the photo dimensions
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the photo fill color
    pub fn color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    /// Make `request_permissions` report the given denials
    pub fn deny(mut self, camera: bool, microphone: bool) -> Self {
        self.deny_camera = camera;
        self.deny_microphone = microphone;
        self
    }

    /// Make every `take_photo` call fail
    pub fn fail_capture(mut self) -> Self {
        self.fail_capture = true;
        self
    }
}

impl Camera for MockCamera {
    fn request_permissions(&mut self) -> PermissionStatus {
        if self.deny_camera || self.deny_microphone {
            PermissionStatus::Denied {
                camera: self.deny_camera,
                microphone: self.deny_microphone,
            }
        } else {
            PermissionStatus::Granted
        }
    }

    fn take_photo(&mut self) -> CaptureResult<PathBuf> {
        if self.fail_capture {
            return Err(CaptureError::Capture("mock capture failure".to_string()));
        }

        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("mock_photo_{}.jpg", self.shot));
        self.shot += 1;

        let img = RgbImage::from_pixel(self.width, self.height, Rgb(self.color));
        img.save_with_format(&path, image::ImageFormat::Jpeg)
            .map_err(|e| CaptureError::Capture(e.to_string()))?;

        Ok(path)
    }
}
