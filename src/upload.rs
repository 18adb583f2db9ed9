//! Upload client for the image analysis backend.
//!
//! One call, one POST: the encoded photo goes up as JSON, and the structured
//! report comes back. There is no retry, queueing, or caching; the caller
//! decides whether to re-invoke after a failure.
//!
//! Failures never propagate as errors. Everything collapses into
//! [`UploadOutcome::Failure`] with one of two user-facing messages, matching
//! the backend contract: a server rejection reads "Failed to analyze the
//! image.", anything transport-shaped reads "Network error. Please try
//! again." The underlying detail is preserved in the log only.
//!
//! # Configuration
//!
//! Upload settings can be configured via environment variables:
//! - `MED_VISION_ENDPOINT`: analysis API endpoint URL
//! - `MED_VISION_CONNECT_TIMEOUT`: connection timeout (seconds)
//! - `MED_VISION_MAX_TIME`: whole-request timeout (seconds)

use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use crate::config;
use crate::report::AnalysisReport;

/// User-facing message for a server-side rejection (non-2xx response)
pub const MSG_ANALYSIS_FAILED: &str = "Failed to analyze the image.";

/// User-facing message for a transport failure or unreadable response
pub const MSG_NETWORK_ERROR: &str = "Network error. Please try again.";

/// Configuration for the upload client
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Analysis API endpoint URL
    pub endpoint: String,
    /// Timeout for the initial connection (seconds)
    pub connect_timeout: u64,
    /// Timeout for the whole request (seconds)
    pub max_time: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        let cfg = config::get();
        Self {
            endpoint: cfg.backend.endpoint.clone(),
            connect_timeout: cfg.backend.connect_timeout,
            max_time: cfg.backend.max_time,
        }
    }
}

impl UploadConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout = seconds;
        self
    }

    pub fn max_time(mut self, seconds: u64) -> Self {
        self.max_time = seconds;
        self
    }
}

/// Outcome of one upload attempt
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// HTTP 2xx with a parseable report body
    Success(AnalysisReport),
    /// Anything else, reduced to a user-facing message
    Failure {
        /// Message suitable for direct display
        message: String,
    },
}

impl UploadOutcome {
    /// Whether the upload produced a report
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success(_))
    }

    /// The report, if the upload succeeded
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            UploadOutcome::Success(report) => Some(report),
            UploadOutcome::Failure { .. } => None,
        }
    }

    fn network_failure() -> Self {
        UploadOutcome::Failure {
            message: MSG_NETWORK_ERROR.to_string(),
        }
    }

    fn analysis_failure() -> Self {
        UploadOutcome::Failure {
            message: MSG_ANALYSIS_FAILED.to_string(),
        }
    }
}

/// Upload an encoded photo for analysis.
///
/// Issues a single POST of `{"image_data": <data-url>, "is_url": false}` to
/// the configured endpoint and blocks until it settles. Returns
/// [`UploadOutcome`], never an error.
pub fn upload_image(config: &UploadConfig, data_url: &str) -> UploadOutcome {
    let body = serde_json::json!({
        "image_data": data_url,
        "is_url": false,
    });

    let request_json = match serde_json::to_string(&body) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "failed to serialize upload body");
            return UploadOutcome::network_failure();
        }
    };

    let output = match run_curl(config, &request_json) {
        Ok(output) => output,
        Err(e) => {
            warn!(error = %e, endpoint = %config.endpoint, "upload transport failed");
            return UploadOutcome::network_failure();
        }
    };

    let Some((status, response_body)) = split_curl_output(&output) else {
        warn!(endpoint = %config.endpoint, "unreadable curl output");
        return UploadOutcome::network_failure();
    };

    if status == 0 {
        // curl reports 000 when the connection never completed
        warn!(endpoint = %config.endpoint, "connection failed");
        return UploadOutcome::network_failure();
    }

    if !(200..300).contains(&status) {
        warn!(status, body = %response_body, "analysis backend rejected upload");
        return UploadOutcome::analysis_failure();
    }

    match AnalysisReport::from_json(&response_body) {
        Ok(report) => {
            debug!(status, tasks = report.tasks.len(), "analysis received");
            UploadOutcome::Success(report)
        }
        Err(e) => {
            warn!(status, error = %e, "unparseable analysis response");
            UploadOutcome::network_failure()
        }
    }
}

/// POST the body with curl, returning raw stdout (`<body>\n<http_code>`).
///
/// The body goes via stdin; encoded photos are far larger than argv limits
/// allow.
fn run_curl(config: &UploadConfig, request_json: &str) -> std::io::Result<String> {
    let mut child = Command::new("curl")
        .args([
            "-s",
            "-X", "POST",
            &config.endpoint,
            "-H", "Content-Type: application/json",
            "--data-binary", "@-",
            "-w", "\n%{http_code}",
            "--connect-timeout", &config.connect_timeout.to_string(),
            "--max-time", &config.max_time.to_string(),
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(request_json.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() && output.stdout.is_empty() {
        return Err(std::io::Error::other(
            String::from_utf8_lossy(&output.stderr).to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Split curl output written with `-w "\n%{http_code}"` into status and body
fn split_curl_output(output: &str) -> Option<(u16, String)> {
    let (body, status_line) = output.rsplit_once('\n')?;
    let status = status_line.trim().parse().ok()?;
    Some((status, body.to_string()))
}

/// Check if the analysis endpoint is reachable (connection-only check).
///
/// Any HTTP response counts as reachable, even 4xx/5xx; only a failed
/// connection does not.
pub fn check_health(endpoint: &str, timeout_secs: u64) -> std::io::Result<bool> {
    let output = Command::new("curl")
        .args([
            "-s",
            "-o", "/dev/null",
            "-w", "%{http_code}",
            "--connect-timeout", &timeout_secs.to_string(),
            "--max-time", &timeout_secs.to_string(),
            "-I",
            endpoint,
        ])
        .output()?;

    let status = String::from_utf8_lossy(&output.stdout);
    // 000 means the connection failed entirely
    let code: u16 = status.trim().parse().unwrap_or(0);
    Ok(code > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_curl_output_basic() {
        let (status, body) = split_curl_output("{\"ok\":true}\n200").unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, "{\"ok\":true}");
    }

    #[test]
    fn test_split_curl_output_multiline_body() {
        let (status, body) = split_curl_output("line one\nline two\n500").unwrap();
        assert_eq!(status, 500);
        assert_eq!(body, "line one\nline two");
    }

    #[test]
    fn test_split_curl_output_empty_body() {
        let (status, body) = split_curl_output("\n000").unwrap();
        assert_eq!(status, 0);
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_curl_output_garbage() {
        assert_eq!(split_curl_output("no status here"), None);
        assert_eq!(split_curl_output(""), None);
    }

    #[test]
    fn test_upload_config_builder() {
        let config = UploadConfig::new("http://localhost:9000/analyze")
            .connect_timeout(3)
            .max_time(30);

        assert_eq!(config.endpoint, "http://localhost:9000/analyze");
        assert_eq!(config.connect_timeout, 3);
        assert_eq!(config.max_time, 30);
    }

    #[test]
    fn test_outcome_accessors() {
        let failure = UploadOutcome::Failure {
            message: MSG_ANALYSIS_FAILED.to_string(),
        };
        assert!(!failure.is_success());
        assert!(failure.report().is_none());

        let success = UploadOutcome::Success(AnalysisReport::default());
        assert!(success.is_success());
        assert!(success.report().is_some());
    }
}
