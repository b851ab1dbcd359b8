use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsSection,
    pub environment: EnvironmentLabel,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// Layering: optional TOML file, then `TODO_`-prefixed variables, then
    /// the bare `PORT` / `FRONTEND_URL` / `NODE_ENV` variables recognized
    /// for deployment-platform compatibility.
    pub fn load() -> Result<Self> {
        let config_path = env::var("TODO_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("TODO")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse().context("invalid PORT")?;
        }
        if let Ok(origin) = env::var("FRONTEND_URL") {
            if !origin.trim().is_empty() {
                config.cors.frontend_url = Some(origin);
            }
        }
        if let Ok(label) = env::var("NODE_ENV") {
            config.environment = EnvironmentLabel(label);
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

/// Cross-origin policy. With no configured origin any caller is permitted;
/// a configured origin is allowed exclusively, with credentials.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CorsSection {
    pub frontend_url: Option<String>,
}

/// Deployment environment label surfaced in the health payload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EnvironmentLabel(pub String);

impl Default for EnvironmentLabel {
    fn default() -> Self {
        Self("development".to_string())
    }
}

impl std::fmt::Display for EnvironmentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
