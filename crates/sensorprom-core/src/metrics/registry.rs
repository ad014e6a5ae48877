//! Registry owning every instrument exposed on `/metrics`.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Result, SensorPromError};

use super::counter::CounterVec;
use super::desc::{Collector, MetricFamily};
use super::gauge::Gauge;
use super::histogram::HistogramVec;

/// Name-keyed set of collectors. Constructed once and shared by `Arc`.
#[derive(Default)]
pub struct Registry {
    collectors: RwLock<BTreeMap<String, Arc<dyn Collector>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collector. A taken name fails with `DuplicateName` and leaves
    /// the registry untouched.
    pub fn register(&self, collector: Arc<dyn Collector>) -> Result<()> {
        let name = collector.desc().name.clone();
        let mut collectors = self.collectors.write();
        if collectors.contains_key(&name) {
            return Err(SensorPromError::DuplicateName(name));
        }
        tracing::debug!(metric = %name, kind = collector.desc().kind.as_str(), "metric registered");
        collectors.insert(name, collector);
        Ok(())
    }

    pub fn register_counter_vec(
        &self,
        name: &str,
        help: &str,
        label_names: &[&str],
    ) -> Result<Arc<CounterVec>> {
        let counter = Arc::new(CounterVec::new(name, help, label_names)?);
        self.register(counter.clone())?;
        Ok(counter)
    }

    pub fn register_gauge(&self, name: &str, help: &str) -> Result<Arc<Gauge>> {
        let gauge = Arc::new(Gauge::new(name, help)?);
        self.register(gauge.clone())?;
        Ok(gauge)
    }

    pub fn register_histogram_vec(
        &self,
        name: &str,
        help: &str,
        label_names: &[&str],
    ) -> Result<Arc<HistogramVec>> {
        let histogram = Arc::new(HistogramVec::new(name, help, label_names)?);
        self.register(histogram.clone())?;
        Ok(histogram)
    }

    /// Lazily snapshot every instrument, ordered by metric name.
    ///
    /// The registry lock is released before the first instrument is read.
    pub fn collect(&self) -> impl Iterator<Item = MetricFamily> {
        let collectors: Vec<Arc<dyn Collector>> =
            self.collectors.read().values().cloned().collect();
        collectors.into_iter().map(|c| c.collect())
    }

    pub fn names(&self) -> Vec<String> {
        self.collectors.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.collectors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.collectors.read().is_empty()
    }
}
