//! Screen-level controller for the capture-and-analyze flow.
//!
//! [`HealthScreen`] owns the only mutable state in the system: an optional
//! camera handle, the `loading` gate, and the most recent report. One call to
//! [`HealthScreen::capture_and_analyze`] runs a full cycle - permission
//! check, capture, encode, upload - and replaces the report wholesale. The
//! loading gate keeps a single upload in flight; further attempts while
//! pending report [`CycleOutcome::Busy`].

use tracing::warn;

use crate::camera::{capture_image, Camera, CaptureError};
use crate::report::AnalysisReport;
use crate::upload::{upload_image, UploadConfig, UploadOutcome};

/// Outcome of one capture-and-analyze cycle
#[derive(Debug)]
pub enum CycleOutcome {
    /// A new report was received and stored
    Analyzed,
    /// An upload is already in flight
    Busy,
    /// No camera handle is attached
    NoCamera,
    /// Camera or microphone access was refused
    PermissionDenied {
        /// User-facing notice text
        notice: String,
    },
    /// The capture step failed
    CaptureFailed(CaptureError),
    /// The upload settled as a failure
    UploadFailed {
        /// User-facing message from the upload client
        message: String,
    },
}

impl CycleOutcome {
    /// User-facing message for a non-success outcome, `None` for `Analyzed`
    pub fn notice(&self) -> Option<String> {
        match self {
            CycleOutcome::Analyzed => None,
            CycleOutcome::Busy => Some("Analysis already in progress.".to_string()),
            CycleOutcome::NoCamera => Some("No camera is available.".to_string()),
            CycleOutcome::PermissionDenied { notice } => Some(notice.clone()),
            CycleOutcome::CaptureFailed(_) => {
                Some("Failed to capture image. Please try again.".to_string())
            }
            CycleOutcome::UploadFailed { message } => Some(message.clone()),
        }
    }
}

/// Controller for one analysis screen
pub struct HealthScreen {
    camera: Option<Box<dyn Camera>>,
    config: UploadConfig,
    report: Option<AnalysisReport>,
    loading: bool,
}

impl HealthScreen {
    /// Create a screen with no camera attached
    pub fn new(config: UploadConfig) -> Self {
        Self {
            camera: None,
            config,
            report: None,
            loading: false,
        }
    }

    /// Attach a camera handle
    pub fn attach_camera(&mut self, camera: Box<dyn Camera>) {
        self.camera = Some(camera);
    }

    /// The most recent report, if any
    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// Whether an upload is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Run one capture-and-analyze cycle.
    ///
    /// The previous report is discarded at the start of each attempt; on any
    /// failure the screen ends up with no report rather than a stale one.
    pub fn capture_and_analyze(&mut self) -> CycleOutcome {
        if self.loading {
            return CycleOutcome::Busy;
        }

        self.report = None;

        let Some(camera) = self.camera.as_mut() else {
            return CycleOutcome::NoCamera;
        };

        let permissions = camera.request_permissions();
        if let Some(notice) = permissions.notice() {
            return CycleOutcome::PermissionDenied {
                notice: notice.to_string(),
            };
        }

        let captured = match capture_image(camera.as_mut()) {
            Ok(captured) => captured,
            Err(e) => {
                warn!(error = %e, "capture failed");
                return CycleOutcome::CaptureFailed(e);
            }
        };

        self.loading = true;
        let outcome = upload_image(&self.config, &captured.data_url);
        self.loading = false;

        match outcome {
            UploadOutcome::Success(report) => {
                self.report = Some(report);
                CycleOutcome::Analyzed
            }
            UploadOutcome::Failure { message } => CycleOutcome::UploadFailed { message },
        }
    }
}
