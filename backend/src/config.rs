//! Runtime configuration.
//!
//! Values are resolved from built-in defaults, then an optional `vida.yaml`
//! in the data directory, then `VIDA_*` environment variables. The data
//! directory itself can only come from the environment or the default, since
//! it is where `vida.yaml` is looked up.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "vida.yaml";

const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_PAYMENT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    /// Origin allowed by CORS
    pub frontend_origin: String,
    /// Simulated payment processing time
    pub payment_delay: Duration,
    /// Directory served for non-API paths, if any
    pub static_dir: Option<PathBuf>,
}

/// Optional overrides read from `vida.yaml`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    bind_addr: Option<String>,
    frontend_origin: Option<String>,
    payment_delay_ms: Option<u64>,
    static_dir: Option<PathBuf>,
}

/// Platform data directory, falling back to the working directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Vida")
}

impl AppConfig {
    /// Defaults rooted at `data_dir`
    pub fn with_data_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            frontend_origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
            payment_delay: Duration::from_millis(DEFAULT_PAYMENT_DELAY_MS),
            static_dir: None,
        }
    }

    /// Resolve configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve configuration with `env` standing in for the environment
    pub fn resolve<F>(env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = env("VIDA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let mut config = Self::with_data_dir(&data_dir);

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let file: ConfigFile = serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;
            config.apply_file(file)?;
            info!("Loaded configuration from {}", config_path.display());
        }

        config.apply_env(env)?;
        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) -> Result<()> {
        if let Some(addr) = file.bind_addr {
            self.bind_addr = parse_bind_addr(&addr)?;
        }
        if let Some(origin) = file.frontend_origin {
            self.frontend_origin = origin;
        }
        if let Some(delay_ms) = file.payment_delay_ms {
            self.payment_delay = Duration::from_millis(delay_ms);
        }
        if let Some(dir) = file.static_dir {
            self.static_dir = Some(dir);
        }
        Ok(())
    }

    fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = env("VIDA_BIND_ADDR") {
            self.bind_addr = parse_bind_addr(&addr)?;
        }
        if let Some(origin) = env("VIDA_FRONTEND_ORIGIN") {
            self.frontend_origin = origin;
        }
        if let Some(delay) = env("VIDA_PAYMENT_DELAY_MS") {
            match delay.trim().parse::<u64>() {
                Ok(ms) => self.payment_delay = Duration::from_millis(ms),
                Err(e) => warn!(
                    "Ignoring VIDA_PAYMENT_DELAY_MS={}: {}. Using {}ms.",
                    delay,
                    e,
                    self.payment_delay.as_millis()
                ),
            }
        }
        if let Some(dir) = env("VIDA_STATIC_DIR") {
            self.static_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }
}

fn parse_bind_addr(value: &str) -> Result<SocketAddr> {
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", value))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_data_dir(default_data_dir())
    }
}
