use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;

use super::desc::{Collector, Desc, MetricFamily, MetricKind, Sample, SampleValue};

/// Single unlabeled float value, last write wins.
///
/// The value lives in an `AtomicU64` as raw `f64` bits, so `get` returns
/// exactly what `set` stored (NaN payloads and signed zero included).
pub struct Gauge {
    desc: Desc,
    bits: AtomicU64,
}

impl Gauge {
    pub fn new(name: &str, help: &str) -> Result<Self> {
        Ok(Self {
            desc: Desc::new(name, help, MetricKind::Gauge, &[])?,
            bits: AtomicU64::new(0f64.to_bits()),
        })
    }

    pub fn set(&self, v: f64) {
        self.bits.store(v.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl Collector for Gauge {
    fn desc(&self) -> &Desc {
        &self.desc
    }

    fn collect(&self) -> MetricFamily {
        let sample = Sample {
            labels: Vec::new(),
            value: SampleValue::Gauge(self.get()),
        };
        MetricFamily::from_desc(&self.desc, vec![sample])
    }
}
