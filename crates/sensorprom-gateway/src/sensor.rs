//! Simulated temperature sensor driving the `sensor_temperature_celsius` gauge.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::info;

use sensorprom_core::error::Result;
use sensorprom_core::metrics::Gauge;
use sensorprom_core::random::RandomSource;

use crate::app_state::AppState;
use crate::config::SensorSection;

pub struct SensorSimulator {
    gauge: Arc<Gauge>,
    rng: Arc<dyn RandomSource>,
    base: f64,
    variation: f64,
    interval: Duration,
}

impl SensorSimulator {
    /// Fails with `BadRequest` when `cfg` is out of range; a zero interval
    /// would otherwise panic inside the spawned task.
    pub fn new(
        gauge: Arc<Gauge>,
        rng: Arc<dyn RandomSource>,
        cfg: &SensorSection,
    ) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            gauge,
            rng,
            base: cfg.base_celsius,
            variation: cfg.variation_celsius,
            interval: Duration::from_millis(cfg.interval_ms),
        })
    }

    pub fn from_state(state: &AppState) -> Result<Self> {
        Self::new(
            state.metrics().temperature.clone(),
            state.rng(),
            &state.cfg().sensor,
        )
    }

    /// Take one reading: `base ± variation`, written to the gauge.
    pub fn tick(&self) -> f64 {
        let value = self.base + self.rng.uniform(-self.variation, self.variation);
        self.gauge.set(value);
        tracing::debug!(celsius = value, "sensor reading");
        value
    }

    /// Tick immediately, then once per interval, until `shutdown` flips to
    /// `true` or its sender is dropped.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!(interval_ms = self.interval.as_millis() as u64, "sensor simulator started");
        let mut ticker = tokio::time::interval(self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick();
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        info!("sensor simulator stopped");
    }
}
