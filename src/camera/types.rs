// Core types for camera capture

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A captured photo, encoded and ready for upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedImage {
    /// Base64 data URL (`data:image/jpeg;base64,...`)
    pub data_url: String,

    /// Path to the photo file on disk
    pub path: PathBuf,
}

/// Outcome of a permission request.
///
/// Camera and microphone are requested together; denial of either blocks the
/// capture flow but leaves the application usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Both camera and microphone access granted
    Granted,
    /// At least one permission refused
    Denied {
        /// Camera access refused
        camera: bool,
        /// Microphone access refused
        microphone: bool,
    },
}

impl PermissionStatus {
    /// Whether capture may proceed
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }

    /// User-facing notice for a denial, `None` when granted
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            PermissionStatus::Granted => None,
            PermissionStatus::Denied { .. } => {
                Some("Camera and Microphone permissions are required to use this app.")
            }
        }
    }
}

/// Result type for capture operations
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Error types for capture operations
#[derive(Debug)]
pub enum CaptureError {
    /// No active camera handle
    NoCamera,

    /// The capture step itself failed
    Capture(String),

    /// I/O error reading the captured photo
    Io(std::io::Error),
}

impl std::fmt::Display for CaptureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureError::NoCamera => write!(f, "No active camera"),
            CaptureError::Capture(msg) => write!(f, "Capture error: {}", msg),
            CaptureError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::NoCamera => None,
            CaptureError::Capture(_) => None,
            CaptureError::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        CaptureError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granted_has_no_notice() {
        assert!(PermissionStatus::Granted.is_granted());
        assert_eq!(PermissionStatus::Granted.notice(), None);
    }

    #[test]
    fn test_denied_notice_text() {
        let status = PermissionStatus::Denied {
            camera: true,
            microphone: false,
        };
        assert!(!status.is_granted());
        assert_eq!(
            status.notice(),
            Some("Camera and Microphone permissions are required to use this app.")
        );
    }
}
