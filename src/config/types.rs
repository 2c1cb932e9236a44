use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub vertex: VertexConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexConfig {
    pub project_id: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// API key appended to request URLs (express mode). Requests are sent
    /// unauthenticated when unset, e.g. against a local mock endpoint.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the Vertex AI endpoint. Defaults to the regional
    /// `https://{location}-aiplatform.googleapis.com` host.
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl VertexConfig {
    pub fn base_url(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://{}-aiplatform.googleapis.com", self.location))
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub(super) fn default_location() -> String {
    "us-central1".to_string()
}

pub(super) fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

pub(super) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(super) fn default_port() -> u16 {
    8080
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}
