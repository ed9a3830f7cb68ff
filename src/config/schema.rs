//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the action router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Action naming convention.
    pub naming: NamingConfig,

    /// URL building settings.
    pub url: UrlConfig,

    /// Request path and view name adjustments.
    pub adjustment: AdjustmentConfig,

    /// Where registered actions come from.
    pub registry: RegistryConfig,

    /// Resolution cache settings.
    pub cache: CacheConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub admin: AdminConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
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

/// Naming convention settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Suffix of every action component name.
    pub action_suffix: String,

    /// Bare name of the action serving `/`.
    pub root_action_name: String,

    /// Package that action identities are rooted in.
    pub root_package: String,

    /// Delimiter inserted between decamelized words.
    pub decamelize_delimiter: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            action_suffix: "Action".to_string(),
            root_action_name: "root".to_string(),
            root_package: "app.web".to_string(),
            decamelize_delimiter: "/".to_string(),
        }
    }
}

/// URL building settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Query fragment marking a URL as a redirect.
    pub redirect_marker: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            redirect_marker: "redirect=true".to_string(),
        }
    }
}

/// Adjustments applied before resolution and during view inference.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AdjustmentConfig {
    /// Prefix removed from request paths before resolving (e.g. "/api").
    pub request_path_prefix: Option<String>,

    /// Leading view-name words retried without (e.g. "sp" for mobile views).
    pub view_retry_prefixes: Vec<String>,
}

/// Registry source configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// Path to a TOML file of `[[actions]]`.
    pub path: Option<String>,

    /// Reload the registry file when it changes.
    pub watch: bool,

    /// Actions declared inline in the main config.
    pub actions: Vec<ActionConfig>,
}

/// Contents of a registry file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistryFile {
    pub actions: Vec<ActionConfig>,
}

/// One registered action.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionConfig {
    /// Qualified identity, e.g. "app.web.sea.SeaLandAction".
    pub identity: String,

    /// Disabled actions exist but are never dispatched to.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Handler methods; empty means a single zero-arity `index`.
    #[serde(default)]
    pub executes: Vec<ExecuteConfig>,
}

/// One handler method and its parameter arity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExecuteConfig {
    #[serde(default = "default_method")]
    pub method: String,

    /// Required trailing path parameters.
    #[serde(default)]
    pub params: usize,

    /// Optional trailing path parameters after the required ones.
    #[serde(default)]
    pub optional_params: usize,
}

fn default_enabled() -> bool {
    true
}

fn default_method() -> String {
    "index".to_string()
}

/// Resolution cache settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,

    /// Entries kept before new outcomes stop being memoized.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: 10_000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format ("pretty" or "json").
    pub log_format: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Admin endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Mount the `/_admin` routes.
    pub enabled: bool,

    /// API key for authentication (Bearer token).
    pub api_key: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            // WARNING: This is a placeholder! Change this in production.
            api_key: "CHANGE_ME_IN_PRODUCTION".to_string(),
        }
    }
}
