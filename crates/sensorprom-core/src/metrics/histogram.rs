//! Bucketed distribution of observed values (seconds, by convention).
//!
//! Each series keeps cumulative bucket counts, the sum and the total count
//! behind one mutex, so a scrape never sees a bucket bumped without the
//! matching sum/count update.

use dashmap::DashMap;
use parking_lot::Mutex;
use std::time::Duration;

use crate::error::{Result, SensorPromError};

use super::desc::{Collector, Desc, MetricFamily, MetricKind, Sample, SampleValue};

/// Upper bounds used when no custom ladder is given.
pub const DEFAULT_BUCKETS: [f64; 12] = [
    0.005,
    0.01,
    0.025,
    0.05,
    0.1,
    0.25,
    0.5,
    1.0,
    2.5,
    5.0,
    10.0,
    f64::INFINITY,
];

/// Point-in-time view of one histogram series.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSnapshot {
    /// `(upper_bound, cumulative_count)`, ending with `+Inf`.
    pub buckets: Vec<(f64, u64)>,
    pub sum: f64,
    pub count: u64,
}

struct SeriesState {
    buckets: Vec<u64>,
    sum: f64,
    count: u64,
}

impl SeriesState {
    fn new(len: usize) -> Self {
        Self {
            buckets: vec![0; len],
            sum: 0.0,
            count: 0,
        }
    }
}

pub struct HistogramVec {
    desc: Desc,
    bounds: Vec<f64>,
    map: DashMap<Vec<String>, Mutex<SeriesState>>,
}

impl HistogramVec {
    /// Histogram over [`DEFAULT_BUCKETS`].
    pub fn new(name: &str, help: &str, label_names: &[&str]) -> Result<Self> {
        Self::with_buckets(name, help, label_names, DEFAULT_BUCKETS.to_vec())
    }

    /// Histogram over a custom ladder. Bounds must be strictly increasing;
    /// `+Inf` is appended when missing.
    pub fn with_buckets(
        name: &str,
        help: &str,
        label_names: &[&str],
        mut bounds: Vec<f64>,
    ) -> Result<Self> {
        let desc = Desc::new(name, help, MetricKind::Histogram, label_names)?;

        if bounds.iter().any(|b| b.is_nan()) {
            return Err(SensorPromError::InvalidBuckets(format!("{name}: NaN bound")));
        }
        if bounds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SensorPromError::InvalidBuckets(format!(
                "{name}: bounds must be strictly increasing"
            )));
        }
        if bounds.last() != Some(&f64::INFINITY) {
            bounds.push(f64::INFINITY);
        }

        Ok(Self {
            desc,
            bounds,
            map: DashMap::new(),
        })
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Record one observation into every bucket whose bound is >= `v`.
    pub fn observe(&self, values: &[&str], v: f64) -> Result<()> {
        self.desc.check_arity(values)?;
        let key: Vec<String> = values.iter().map(|s| s.to_string()).collect();

        let series = self
            .map
            .entry(key)
            .or_insert_with(|| Mutex::new(SeriesState::new(self.bounds.len())));
        let mut st = series.lock();

        let mut hit = false;
        for (i, &b) in self.bounds.iter().enumerate() {
            if v <= b {
                st.buckets[i] += 1;
                hit = true;
            }
        }
        // NaN compares false against every bound; file it under +Inf.
        if !hit {
            if let Some(last) = st.buckets.last_mut() {
                *last += 1;
            }
        }
        st.sum += v;
        st.count += 1;
        Ok(())
    }

    /// Observe a wall-clock duration in seconds.
    pub fn observe_duration(&self, values: &[&str], d: Duration) -> Result<()> {
        self.observe(values, d.as_secs_f64())
    }

    pub fn snapshot(&self, values: &[&str]) -> Option<HistogramSnapshot> {
        let key: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        self.map.get(&key).map(|s| self.snapshot_of(&s.lock()))
    }

    fn snapshot_of(&self, st: &SeriesState) -> HistogramSnapshot {
        HistogramSnapshot {
            buckets: self
                .bounds
                .iter()
                .copied()
                .zip(st.buckets.iter().copied())
                .collect(),
            sum: st.sum,
            count: st.count,
        }
    }
}

impl Collector for HistogramVec {
    fn desc(&self) -> &Desc {
        &self.desc
    }

    fn collect(&self) -> MetricFamily {
        let mut rows: Vec<(Vec<String>, HistogramSnapshot)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), self.snapshot_of(&r.value().lock())))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        let samples = rows
            .into_iter()
            .map(|(key, snap)| Sample {
                labels: self.desc.label_pairs(&key),
                value: SampleValue::Histogram(snap),
            })
            .collect();
        MetricFamily::from_desc(&self.desc, samples)
    }
}
