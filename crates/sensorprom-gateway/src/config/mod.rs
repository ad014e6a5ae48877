//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use sensorprom_core::error::{Result, SensorPromError};

pub use schema::{AppConfig, DataSection, RandomSection, SensorSection, ServerSection};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "sensorprom.yaml";

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SensorPromError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path, "no config file, using defaults");
            Ok(AppConfig::default())
        }
        Err(e) => Err(SensorPromError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<AppConfig> {
    let cfg: AppConfig = serde_yaml::from_str(s)
        .map_err(|e| SensorPromError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
