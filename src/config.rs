//! Configuration management with environment variable support.
//!
//! This module provides centralized configuration for Med Vision, supporting:
//! - Environment variables for all configurable values
//! - Sensible defaults that match the original hardcoded values
//! - A cached global instance for library-wide access
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `MED_VISION_ENDPOINT` | Analysis API endpoint URL | `https://medalyzer-backend.onrender.com/api/v1/analyze-image` |
//! | `MED_VISION_CONNECT_TIMEOUT` | Connection timeout in seconds | `10` |
//! | `MED_VISION_MAX_TIME` | Whole-request timeout in seconds | `120` |
//! | `MED_VISION_SESSION_DIR` | Base directory for capture sessions | `/tmp/med-vision` |
//! | `MED_VISION_MOCK_SIZE` | Mock camera photo size | `800x600` |
//!
//! # Example
//!
//! ```bash
//! # Point at a locally running analysis backend
//! export MED_VISION_ENDPOINT="http://127.0.0.1:8000/api/v1/analyze-image"
//!
//! # Use a custom session directory
//! export MED_VISION_SESSION_DIR="/var/tmp/med-vision-sessions"
//! ```

use std::env;
use std::sync::OnceLock;

// ============================================================================
// Default Values (matching original hardcoded values)
// ============================================================================

/// Default analysis API endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://medalyzer-backend.onrender.com/api/v1/analyze-image";

/// Default connection timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// Default whole-request timeout (seconds)
pub const DEFAULT_MAX_TIME: u64 = 120;

/// Default session base directory
pub const DEFAULT_SESSION_DIR: &str = "/tmp/med-vision";

/// Default mock camera photo width (pixels)
pub const DEFAULT_MOCK_WIDTH: u32 = 800;

/// Default mock camera photo height (pixels)
pub const DEFAULT_MOCK_HEIGHT: u32 = 600;

// ============================================================================
// Environment Variable Names
// ============================================================================

/// Environment variable for the analysis endpoint
pub const ENV_ENDPOINT: &str = "MED_VISION_ENDPOINT";

/// Environment variable for the connection timeout
pub const ENV_CONNECT_TIMEOUT: &str = "MED_VISION_CONNECT_TIMEOUT";

/// Environment variable for the whole-request timeout
pub const ENV_MAX_TIME: &str = "MED_VISION_MAX_TIME";

/// Environment variable for the session directory
pub const ENV_SESSION_DIR: &str = "MED_VISION_SESSION_DIR";

/// Environment variable for the mock camera size
pub const ENV_MOCK_SIZE: &str = "MED_VISION_MOCK_SIZE";

// ============================================================================
// Configuration Getters (with caching)
// ============================================================================

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration (initialized from environment on first access)
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Centralized configuration for Med Vision
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend upload configuration
    pub backend: BackendSettings,
    /// Session configuration
    pub session: SessionSettings,
    /// Mock camera configuration
    pub mock: MockSettings,
}

/// Analysis-backend-related settings
#[derive(Debug, Clone)]
pub struct BackendSettings {
    /// API endpoint URL
    pub endpoint: String,
    /// Connection timeout (seconds)
    pub connect_timeout: u64,
    /// Whole-request timeout (seconds)
    pub max_time: u64,
}

/// Session-related settings
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Base directory for session storage
    pub base_dir: String,
}

/// Mock camera settings
#[derive(Debug, Clone)]
pub struct MockSettings {
    /// Mock photo width (pixels)
    pub width: u32,
    /// Mock photo height (pixels)
    pub height: u32,
}

impl Config {
    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            backend: BackendSettings::from_env(),
            session: SessionSettings::from_env(),
            mock: MockSettings::from_env(),
        }
    }

    /// Create configuration with all defaults (ignoring environment)
    pub fn defaults() -> Self {
        Self {
            backend: BackendSettings::defaults(),
            session: SessionSettings::defaults(),
            mock: MockSettings::defaults(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl BackendSettings {
    /// Create backend settings from environment variables
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var(ENV_ENDPOINT)
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            connect_timeout: env::var(ENV_CONNECT_TIMEOUT)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            max_time: env::var(ENV_MAX_TIME)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_TIME),
        }
    }

    /// Create backend settings with defaults
    pub fn defaults() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_time: DEFAULT_MAX_TIME,
        }
    }
}

impl SessionSettings {
    /// Create session settings from environment variables
    pub fn from_env() -> Self {
        Self {
            base_dir: env::var(ENV_SESSION_DIR)
                .unwrap_or_else(|_| DEFAULT_SESSION_DIR.to_string()),
        }
    }

    /// Create session settings with defaults
    pub fn defaults() -> Self {
        Self {
            base_dir: DEFAULT_SESSION_DIR.to_string(),
        }
    }
}

impl MockSettings {
    /// Create mock camera settings from environment variables
    pub fn from_env() -> Self {
        let (width, height) = env::var(ENV_MOCK_SIZE)
            .ok()
            .and_then(|s| parse_mock_size(&s))
            .unwrap_or((DEFAULT_MOCK_WIDTH, DEFAULT_MOCK_HEIGHT));

        Self { width, height }
    }

    /// Create mock camera settings with hardcoded defaults
    pub fn defaults() -> Self {
        Self {
            width: DEFAULT_MOCK_WIDTH,
            height: DEFAULT_MOCK_HEIGHT,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse a "WxH" size string into (width, height)
fn parse_mock_size(size: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = size.split('x').collect();
    if parts.len() == 2 {
        let w = parts[0].parse().ok()?;
        let h = parts[1].parse().ok()?;
        Some((w, h))
    } else {
        None
    }
}

/// Get the analysis endpoint from environment (convenience function)
pub fn endpoint() -> String {
    get().backend.endpoint.clone()
}

/// Get the session base directory (convenience function)
pub fn session_base_dir() -> String {
    get().session.base_dir.clone()
}
