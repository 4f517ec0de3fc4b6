use serde::Deserialize;
use std::sync::OnceLock;

const DEFAULT_IDENTITY_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the upstream identity service.
    pub identity_url: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn log_level(self) -> tracing::Level {
        match self {
            Environment::Development => tracing::Level::DEBUG,
            Environment::Production => tracing::Level::INFO,
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    /// Reads the configuration from the process environment and stores it
    /// for the lifetime of the server.
    pub fn init() -> Result<&'static Config, String> {
        let config = Config::from_lookup(|key| std::env::var(key).ok())?;
        CONFIG
            .set(config)
            .map_err(|_| "Config already initialized".to_string())?;
        CONFIG
            .get()
            .ok_or_else(|| "Config not initialized".to_string())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, String> {
        let identity_url = lookup("IDENTITY_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_IDENTITY_URL.to_string());
        if !(identity_url.starts_with("http://") || identity_url.starts_with("https://")) {
            return Err(format!("IDENTITY_URL must be an http(s) URL, got `{identity_url}`"));
        }

        let environment = match lookup("ENVIRONMENT")
            .unwrap_or_else(|| "development".to_string())
            .to_lowercase()
            .as_str()
        {
            "production" => Environment::Production,
            _ => Environment::Development,
        };

        Ok(Config {
            identity_url,
            environment,
        })
    }
}
