//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files,
//! with defaults matching the original deployment (port 5000, the
//! business's WhatsApp number).

use serde::{Deserialize, Serialize};

/// Root configuration for the order gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// WhatsApp handoff settings.
    pub whatsapp: WhatsAppConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Security hardening settings.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g. "0.0.0.0").
    pub host: String,

    /// Port to bind. Overridable via the PORT environment variable.
    pub port: u16,
}

impl ListenerConfig {
    /// Full bind address, "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// WhatsApp handoff configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WhatsAppConfig {
    /// Recipient identifier for the wa.me deep link, digits only.
    /// Overridable via the WHATSAPP_NUMBER environment variable.
    pub number: String,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            number: "2347026972403".to_string(),
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

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 64 * 1024, // orders are small
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl ObservabilityConfig {
    /// Default tracing filter directives, used when RUST_LOG is unset.
    pub fn filter_directives(&self) -> String {
        format!(
            "order_gateway={level},tower_http={level}",
            level = self.log_level
        )
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
