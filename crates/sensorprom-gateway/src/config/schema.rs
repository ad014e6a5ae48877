use serde::Deserialize;
use sensorprom_core::error::{Result, SensorPromError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub sensor: SensorSection,

    #[serde(default)]
    pub data: DataSection,

    #[serde(default)]
    pub random: RandomSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            sensor: SensorSection::default(),
            data: DataSection::default(),
            random: RandomSection::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SensorPromError::BadRequest(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        self.sensor.validate()?;
        self.data.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

/// Simulated temperature sensor.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensorSection {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "default_base_celsius")]
    pub base_celsius: f64,

    #[serde(default = "default_variation_celsius")]
    pub variation_celsius: f64,
}

impl Default for SensorSection {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            base_celsius: default_base_celsius(),
            variation_celsius: default_variation_celsius(),
        }
    }
}

impl SensorSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=3_600_000).contains(&self.interval_ms) {
            return Err(SensorPromError::BadRequest(
                "sensor.interval_ms must be between 100 and 3600000".into(),
            ));
        }
        if !self.base_celsius.is_finite() {
            return Err(SensorPromError::BadRequest(
                "sensor.base_celsius must be finite".into(),
            ));
        }
        if !self.variation_celsius.is_finite() || self.variation_celsius < 0.0 {
            return Err(SensorPromError::BadRequest(
                "sensor.variation_celsius must be finite and >= 0".into(),
            ));
        }
        Ok(())
    }
}

/// Simulated `/api/data` workload.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSection {
    #[serde(default = "default_max_latency_ms")]
    pub max_latency_ms: u64,

    #[serde(default = "default_error_rate")]
    pub error_rate: f64,
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            max_latency_ms: default_max_latency_ms(),
            error_rate: default_error_rate(),
        }
    }
}

impl DataSection {
    pub fn validate(&self) -> Result<()> {
        if self.max_latency_ms > 60_000 {
            return Err(SensorPromError::BadRequest(
                "data.max_latency_ms must be at most 60000".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.error_rate) {
            return Err(SensorPromError::BadRequest(
                "data.error_rate must be between 0 and 1".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomSection {
    /// Fixed seed for reproducible runs; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_interval_ms() -> u64 {
    5000
}
fn default_base_celsius() -> f64 {
    20.0
}
fn default_variation_celsius() -> f64 {
    5.0
}
fn default_max_latency_ms() -> u64 {
    100
}
fn default_error_rate() -> f64 {
    0.1
}
