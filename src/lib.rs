//! Med Vision - camera capture, image analysis upload, and report rendering.
//!
//! This crate provides:
//! - Camera capture behind an explicit capability handle (file-backed and mock)
//! - Base64 photo encoding and single-shot upload to an analysis backend
//! - Classification of free-text report fields into bullet, numbered, or
//!   paragraph blocks
//! - Terminal rendering of the structured report
//!
//! # Example
//!
//! ```rust
//! use med_vision::report::{format_text, FormattedBlock};
//!
//! let block = format_text(Some("- First\n- Second")).unwrap();
//! assert_eq!(
//!     block,
//!     FormattedBlock::Bullets(vec!["First".to_string(), "Second".to_string()])
//! );
//! ```

pub mod camera;
pub mod config;
pub mod render;
pub mod report;
pub mod screen;
pub mod session;
pub mod upload;

// Re-export camera types
pub use camera::{
    Camera, CaptureError, CaptureResult, CapturedImage, FileCamera, MockCamera,
    PermissionStatus, capture_image,
};

// Re-export report types
pub use report::{AnalysisReport, FormattedBlock, TaskResult, format_text, resolve_title};

// Re-export rendering
pub use render::{render_block, render_report};

// Re-export screen controller
pub use screen::{CycleOutcome, HealthScreen};

// Re-export session management
pub use session::{Session, cleanup_old_sessions, list_sessions};

// Re-export upload client
pub use upload::{UploadConfig, UploadOutcome, check_health, upload_image};
