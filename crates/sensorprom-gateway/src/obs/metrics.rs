//! Instruments published by the demo service.

use std::sync::Arc;
use std::time::Duration;

use sensorprom_core::error::Result;
use sensorprom_core::metrics::{encode_text, CounterVec, Gauge, HistogramVec, Registry};

pub const REQUESTS_TOTAL: &str = "http_requests_total";
pub const SENSOR_TEMPERATURE: &str = "sensor_temperature_celsius";
pub const REQUEST_DURATION: &str = "http_request_duration_seconds";

pub struct AppMetrics {
    registry: Registry,
    /// Labels: endpoint, method, status.
    pub requests: Arc<CounterVec>,
    pub temperature: Arc<Gauge>,
    /// Labels: endpoint. Seconds, default bucket ladder.
    pub request_duration: Arc<HistogramVec>,
}

impl AppMetrics {
    /// Build the registry and register every instrument. Any failure here is
    /// a startup error.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let requests = registry.register_counter_vec(
            REQUESTS_TOTAL,
            "Total number of HTTP requests",
            &["endpoint", "method", "status"],
        )?;
        let temperature =
            registry.register_gauge(SENSOR_TEMPERATURE, "Current temperature in Celsius")?;
        let request_duration = registry.register_histogram_vec(
            REQUEST_DURATION,
            "HTTP request duration in seconds",
            &["endpoint"],
        )?;

        Ok(Self {
            registry,
            requests,
            temperature,
            request_duration,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn count_request(&self, endpoint: &str, method: &str, status: &str) -> Result<()> {
        self.requests.inc(&[endpoint, method, status])
    }

    pub fn observe_duration(&self, endpoint: &str, elapsed: Duration) -> Result<()> {
        self.request_duration.observe_duration(&[endpoint], elapsed)
    }

    /// Render all registered metrics in Prometheus text exposition format.
    pub fn render(&self) -> String {
        encode_text(self.registry.collect())
    }
}
