//! Shared application state for the sensorprom service.
//!
//! Built once in `main` and cloned into every handler and the sensor task.

use std::sync::Arc;

use sensorprom_core::error::Result;
use sensorprom_core::random::RandomSource;

use crate::config::AppConfig;
use crate::obs::metrics::AppMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AppConfig,
    metrics: Arc<AppMetrics>,
    rng: Arc<dyn RandomSource>,
}

impl AppState {
    /// Build application state and register all instruments.
    pub fn new(cfg: AppConfig, rng: Arc<dyn RandomSource>) -> Result<Self> {
        let metrics = Arc::new(AppMetrics::new()?);
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, metrics, rng }),
        })
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<AppMetrics> {
        Arc::clone(&self.inner.metrics)
    }

    pub fn rng(&self) -> Arc<dyn RandomSource> {
        Arc::clone(&self.inner.rng)
    }
}
