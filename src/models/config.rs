//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_brand_name() -> String {
    "Client Portal".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Server settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Cookie signing key for flash messages. Must be at least 64 bytes.
    pub secret: String,
    /// Base URL of the backend REST API, without a trailing `/api`.
    pub api_url: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    pub support_email: String,
}
