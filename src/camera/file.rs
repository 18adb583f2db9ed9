//! File-backed camera: an existing image file stands in for the device.

use std::fs;
use std::path::PathBuf;

use crate::camera::types::{CaptureError, CaptureResult, PermissionStatus};
use crate::camera::Camera;

/// A camera whose "photo" is an image file already on disk.
///
/// The CLI stand-in for a device camera: permissions map to file
/// readability, and every shot returns the same path.
#[derive(Debug, Clone)]
pub struct FileCamera {
    /// Path to the source image
    pub path: PathBuf,
}

impl FileCamera {
    /// Create a camera backed by the image at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Camera for FileCamera {
    fn request_permissions(&mut self) -> PermissionStatus {
        // Readability of the backing file is the closest analogue to camera
        // access; there is no microphone to deny.
        match fs::metadata(&self.path) {
            Ok(meta) if meta.is_file() => PermissionStatus::Granted,
            _ => PermissionStatus::Denied {
                camera: true,
                microphone: false,
            },
        }
    }

    fn take_photo(&mut self) -> CaptureResult<PathBuf> {
        if !self.path.is_file() {
            return Err(CaptureError::Capture(format!(
                "no photo at {}",
                self.path.display()
            )));
        }
        Ok(self.path.clone())
    }
}
