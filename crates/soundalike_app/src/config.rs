//! Startup configuration for the metadata request, resolved once from the
//! environment.

use soundalike_engine::DEFAULT_ENDPOINT;

pub const ENV_API_KEY: &str = "SOUNDALIKE_API_KEY";
pub const ENV_ARTIST: &str = "SOUNDALIKE_ARTIST";
pub const ENV_ENDPOINT: &str = "SOUNDALIKE_ENDPOINT";

const DEFAULT_ARTIST: &str = "Queen";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
    /// Subject artist the similar-artists lookup is relative to.
    pub artist: String,
    pub api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: env_or(ENV_ENDPOINT, DEFAULT_ENDPOINT),
            artist: env_or(ENV_ARTIST, DEFAULT_ARTIST),
            api_key: env_or(ENV_API_KEY, ""),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
