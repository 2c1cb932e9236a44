mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Loads configuration from the process environment. A `.env` file, if
/// present, has already been merged into the environment by `main`.
pub fn load() -> Result<Config> {
    let project_id = env::var("GOOGLE_CLOUD_PROJECT")
        .map_err(|_| Error::config("GOOGLE_CLOUD_PROJECT must be set"))?;

    let location = env_or("GOOGLE_CLOUD_REGION", types::default_location);
    let model = env_or("VERTEX_AI_MODEL", types::default_model);
    let api_key = env::var("GOOGLE_API_KEY").ok();
    let endpoint = env::var("VERTEX_AI_ENDPOINT").ok();

    let host = env_or("HOST", types::default_host);
    let port = match env::var("PORT") {
        Ok(raw) => raw
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{raw}'")))?,
        Err(_) => types::default_port(),
    };
    let level = env_or("LOG_LEVEL", types::default_log_level);

    let config = Config {
        vertex: VertexConfig {
            project_id,
            location,
            model,
            api_key,
            endpoint,
        },
        server: ServerConfig {
            host,
            port,
            logs: LogsConfig { level },
        },
    };

    debug!(
        "Loaded configuration for project '{}' in '{}'",
        config.vertex.project_id, config.vertex.location
    );

    Ok(config)
}

fn env_or(key: &str, default: fn() -> String) -> String {
    env::var(key).unwrap_or_else(|_| default())
}
