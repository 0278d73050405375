//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the portfolio backend.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Portfolio document location.
    pub document: DocumentConfig,

    /// Cross-origin policy applied to every response.
    pub cors: CorsConfig,

    /// Contact-form forwarding settings.
    pub contact: ContactConfig,

    /// Static asset locations (CV, images).
    pub assets: AssetsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Portfolio document location.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Path to the JSON document loaded at startup.
    pub path: PathBuf,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/portfolio.json"),
        }
    }
}

/// Cross-origin policy.
///
/// The allow-list is static for the lifetime of the process.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable the CORS layer.
    pub enabled: bool,

    /// Origins allowed to read responses. A single "*" entry allows any
    /// origin (incompatible with `allow_credentials`).
    pub allowed_origins: Vec<String>,

    /// Allow credentialed requests from the listed origins.
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allow_credentials: false,
        }
    }
}

/// Contact-form forwarding settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Enable the contact endpoint. When disabled the route answers 404.
    pub enabled: bool,

    /// Messaging webhook that receives forwarded form submissions.
    pub webhook_url: String,

    /// Connection establishment timeout for the webhook call, in seconds.
    pub connect_timeout_secs: u64,

    /// Total request timeout for the webhook call, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            webhook_url: String::new(),
            connect_timeout_secs: 5,
            request_timeout_secs: 10,
        }
    }
}

/// Static asset locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Path to the CV document served at /cv.
    pub cv_path: PathBuf,

    /// Filename offered to the client in the download dialog.
    pub cv_download_name: String,

    /// Directory that /images/{filename} is served from.
    pub images_dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            cv_path: PathBuf::from("docs/cv.pdf"),
            cv_download_name: "cv.pdf".to_string(),
            images_dir: PathBuf::from("static/images"),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum request body size in bytes. Contact submissions are the only
    /// inbound bodies, so this stays small.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 64 * 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
