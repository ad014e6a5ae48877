use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;

use super::desc::{Collector, Desc, MetricFamily, MetricKind, Sample, SampleValue};

/// Monotonic counter with one series per label value tuple.
pub struct CounterVec {
    desc: Desc,
    map: DashMap<Vec<String>, AtomicU64>,
}

impl CounterVec {
    pub fn new(name: &str, help: &str, label_names: &[&str]) -> Result<Self> {
        Ok(Self {
            desc: Desc::new(name, help, MetricKind::Counter, label_names)?,
            map: DashMap::new(),
        })
    }

    /// Increment by 1.
    pub fn inc(&self, values: &[&str]) -> Result<()> {
        self.inc_by(values, 1)
    }

    /// Increment by an arbitrary value, creating the series on first use.
    pub fn inc_by(&self, values: &[&str], v: u64) -> Result<()> {
        self.desc.check_arity(values)?;
        let key: Vec<String> = values.iter().map(|s| s.to_string()).collect();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
        Ok(())
    }

    /// Current value of one series, `None` if it was never incremented.
    pub fn get(&self, values: &[&str]) -> Option<u64> {
        let key: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        self.map.get(&key).map(|c| c.load(Ordering::Relaxed))
    }

    /// Number of live series.
    pub fn series_len(&self) -> usize {
        self.map.len()
    }
}

impl Collector for CounterVec {
    fn desc(&self) -> &Desc {
        &self.desc
    }

    fn collect(&self) -> MetricFamily {
        let mut rows: Vec<(Vec<String>, u64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        let samples = rows
            .into_iter()
            .map(|(key, v)| Sample {
                labels: self.desc.label_pairs(&key),
                value: SampleValue::Counter(v),
            })
            .collect();
        MetricFamily::from_desc(&self.desc, samples)
    }
}
