//! Camera capture and photo encoding.
//!
//! The device camera is modeled as the [`Camera`] trait, an explicit
//! capability handle owned by the caller: request permissions, take a photo,
//! get a JPEG file back. Two implementations ship with the crate:
//!
//! - [`FileCamera`] treats an existing image file as the photo source
//! - [`MockCamera`] synthesizes solid-color JPEGs for testing
//!
//! [`capture_image`] drives a handle through one capture: take the photo,
//! read the file, and base64-encode it into a `data:image/jpeg;base64,...`
//! URL ready for upload.

pub mod file;
pub mod mock;
pub mod types;

pub use file::FileCamera;
pub use mock::MockCamera;
pub use types::{CaptureError, CaptureResult, CapturedImage, PermissionStatus};

use base64::Engine;
use std::fs;
use tracing::debug;

/// A camera capability handle
pub trait Camera {
    /// Request camera and microphone access.
    ///
    /// Fire-and-forget from the caller's perspective: nothing downstream
    /// consumes the result beyond showing the denial notice.
    fn request_permissions(&mut self) -> PermissionStatus;

    /// Take a photo, returning the path of the resulting JPEG file
    fn take_photo(&mut self) -> CaptureResult<std::path::PathBuf>;
}

/// Capture one photo from the camera and encode it for upload.
///
/// Runs the full capture step: take the photo, read the file from disk, and
/// base64-encode it into a data URL. All failures come back as typed
/// [`CaptureError`] values; nothing panics on a misbehaving handle.
pub fn capture_image(camera: &mut dyn Camera) -> CaptureResult<CapturedImage> {
    let path = camera.take_photo()?;
    let bytes = fs::read(&path)?;
    debug!(path = %path.display(), size = bytes.len(), "photo captured");

    Ok(CapturedImage {
        data_url: encode_data_url(&bytes),
        path,
    })
}

/// Encode raw JPEG bytes as a `data:image/jpeg;base64,...` URL
pub fn encode_data_url(bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:image/jpeg;base64,{}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_url_prefix() {
        let url = encode_data_url(&[0xff, 0xd8, 0xff]);
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(url, "data:image/jpeg;base64,/9j/");
    }

    #[test]
    fn test_encode_data_url_empty() {
        assert_eq!(encode_data_url(&[]), "data:image/jpeg;base64,");
    }
}
