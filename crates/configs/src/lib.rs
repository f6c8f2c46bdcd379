//! Process configuration: defaults, then an optional TOML file, then
//! environment variables.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::Deserialize;

mod duration;

pub use duration::parse_duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: String,
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".into(),
            server: ServerConfig::default(),
            catalog: CatalogConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Port of the gRPC listener.
    #[serde(default = "default_grpc_port")]
    pub grpc_port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".into(), port: 8000, grpc_port: default_grpc_port(), worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Path of the YAML catalog document.
    pub data_file: String,
    /// `extended` or `minimal`.
    #[serde(default = "default_validation")]
    pub validation: String,
}

fn default_validation() -> String { "extended".into() }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { data_file: "data/services.yaml".into(), validation: default_validation() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub jwt_secret: String,
    /// Go-style duration, e.g. `24h` or `1h30m`.
    #[serde(default = "default_token_duration")]
    pub token_duration: String,
}

fn default_token_duration() -> String { "24h".into() }

impl Default for AuthConfig {
    fn default() -> Self {
        Self { enabled: false, jwt_secret: String::new(), token_duration: default_token_duration() }
    }
}

impl AuthConfig {
    pub fn token_duration(&self) -> Result<Duration> {
        parse_duration(&self.token_duration)
            .map_err(|e| anyhow!("invalid auth.token_duration {:?}: {e}", self.token_duration))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// `*` allows every origin.
    pub origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self { Self { origins: vec!["*".into()] } }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
    /// `compact` or `json`.
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self { Self { level: "info".into(), format: "compact".into() } }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        load_from_file(&path)
    } else {
        Ok(AppConfig::default())
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Defaults, `CONFIG_PATH` (or `./config.toml`) if present, then process env.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.apply_env(|key| std::env::var(key).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Override fields from environment-style variables looked up through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("ENVIRONMENT") { self.environment = v; }
        if let Some(v) = lookup("SERVER_HOST") { self.server.host = v; }
        if let Some(v) = lookup("HTTP_PORT") {
            self.server.port = v.trim().parse().map_err(|e| anyhow!("invalid HTTP_PORT {v:?}: {e}"))?;
        }
        if let Some(v) = lookup("GRPC_PORT") {
            self.server.grpc_port = v.trim().parse().map_err(|e| anyhow!("invalid GRPC_PORT {v:?}: {e}"))?;
        }
        if let Some(v) = lookup("TOKIO_WORKER_THREADS") {
            let n = v.trim().parse().map_err(|e| anyhow!("invalid TOKIO_WORKER_THREADS {v:?}: {e}"))?;
            self.server.worker_threads = Some(n);
        }
        if let Some(v) = lookup("LOCAL_DATA_STORAGE") { self.catalog.data_file = v; }
        if let Some(v) = lookup("VALIDATION_POLICY") { self.catalog.validation = v; }
        if let Some(v) = lookup("ENABLE_AUTH") { self.auth.enabled = parse_bool(&v); }
        if let Some(v) = lookup("JWT_SECRET_KEY") { self.auth.jwt_secret = v; }
        if let Some(v) = lookup("JWT_TOKEN_DURATION") { self.auth.token_duration = v; }
        if let Some(v) = lookup("CORS_ORIGINS") {
            self.cors.origins = v.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect();
        }
        if let Some(v) = lookup("LOG_LEVEL") { self.log.level = v; }
        if let Some(v) = lookup("LOG_FORMAT") { self.log.format = v; }
        Ok(())
    }

    /// Same as [`AppConfig::apply_env`] but from a fixed map; handy in tests.
    pub fn apply_env_map(&mut self, vars: &HashMap<String, String>) -> Result<()> {
        self.apply_env(|k| vars.get(k).cloned())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        if self.cors.origins.is_empty() {
            self.cors.origins = vec!["*".into()];
        }
        let validation = self.catalog.validation.trim().to_ascii_lowercase();
        if validation != "extended" && validation != "minimal" {
            return Err(anyhow!("catalog.validation must be \"extended\" or \"minimal\", got {:?}", self.catalog.validation));
        }
        self.catalog.validation = validation;

        if self.catalog.data_file.trim().is_empty() {
            return Err(anyhow!("LOCAL_DATA_STORAGE cannot be empty"));
        }
        if !Path::new(&self.catalog.data_file).exists() {
            return Err(anyhow!("data file does not exist: {}", self.catalog.data_file));
        }

        if self.auth.enabled {
            if self.auth.jwt_secret.is_empty() {
                return Err(anyhow!("JWT_SECRET_KEY is required when ENABLE_AUTH is true"));
            }
            if self.auth.token_duration()?.is_zero() {
                return Err(anyhow!("JWT_TOKEN_DURATION must be positive"));
            }
        }
        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "0.0.0.0".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        if self.grpc_port == 0 {
            return Err(anyhow!("server.grpc_port must be within 1..=65535"));
        }
        if self.grpc_port == self.port {
            return Err(anyhow!("server.grpc_port and server.port must differ, both are {}", self.port));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

fn default_grpc_port() -> u16 { 9000 }

fn parse_bool(v: &str) -> bool {
    matches!(v.trim(), "true" | "1" | "yes")
}
