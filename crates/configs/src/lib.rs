use anyhow::{anyhow, Result};
use common::utils::logging::LogFormat;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    /// `compact` or `json`
    #[serde(default)]
    pub format: String,
}

/// Where the active configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Fallback,
}

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

/// Load and validate `path`. Only a missing file falls back to `fallback`;
/// an unreadable, malformed or invalid file is an error.
pub fn load_or_fallback(path: &str, fallback: impl FnOnce() -> AppConfig) -> Result<(AppConfig, ConfigSource)> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok((fallback(), ConfigSource::Fallback)),
        Err(e) => return Err(anyhow!("failed to read {path}: {e}")),
    };
    let mut cfg = parse(&content).map_err(|e| anyhow!("{path}: {e}"))?;
    cfg.normalize_and_validate().map_err(|e| anyhow!("{path}: {e}"))?;
    Ok((cfg, ConfigSource::File))
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// `load_or_fallback` against `CONFIG_PATH` (default `config.toml`).
    pub fn load_or_else(fallback: impl FnOnce() -> AppConfig) -> Result<(Self, ConfigSource)> {
        load_or_fallback(&config_path(), fallback)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl LoggingConfig {
    pub fn log_format(&self) -> LogFormat {
        self.format.parse().unwrap_or_default()
    }

    fn validate(&self) -> Result<()> {
        self.format.parse::<LogFormat>()?;
        Ok(())
    }
}
