//! Metric identity and the snapshot types produced by collection.

use crate::error::{Result, SensorPromError};

use super::histogram::HistogramSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
    Histogram,
}

impl MetricKind {
    /// Name used on the `# TYPE` line.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Histogram => "histogram",
        }
    }
}

/// Stable identity of one instrument: name, help, kind, and label schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Desc {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    pub label_names: Vec<String>,
}

impl Desc {
    pub fn new(name: &str, help: &str, kind: MetricKind, label_names: &[&str]) -> Result<Self> {
        if !valid_metric_name(name) {
            return Err(SensorPromError::InvalidName(format!("metric name {name:?}")));
        }
        for (i, label) in label_names.iter().enumerate() {
            if !valid_label_name(label) {
                return Err(SensorPromError::InvalidName(format!(
                    "label {label:?} on {name}"
                )));
            }
            if kind == MetricKind::Histogram && *label == "le" {
                return Err(SensorPromError::InvalidName(format!(
                    "label \"le\" is reserved on histogram {name}"
                )));
            }
            if label_names[..i].contains(label) {
                return Err(SensorPromError::InvalidName(format!(
                    "duplicate label {label:?} on {name}"
                )));
            }
        }

        Ok(Self {
            name: name.to_string(),
            help: help.to_string(),
            kind,
            label_names: label_names.iter().map(|l| l.to_string()).collect(),
        })
    }

    /// Fail with `LabelArity` unless `values` matches the declared label keys.
    pub fn check_arity(&self, values: &[&str]) -> Result<()> {
        if values.len() != self.label_names.len() {
            return Err(SensorPromError::LabelArity {
                metric: self.name.clone(),
                expected: self.label_names.len(),
                got: values.len(),
            });
        }
        Ok(())
    }

    /// Pair a series key with the label names, sorted by label name.
    pub(crate) fn label_pairs(&self, values: &[String]) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .label_names
            .iter()
            .cloned()
            .zip(values.iter().cloned())
            .collect();
        pairs.sort();
        pairs
    }
}

fn valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

fn valid_label_name(name: &str) -> bool {
    if name.starts_with("__") {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Anything the registry can own and scrape.
pub trait Collector: Send + Sync {
    fn desc(&self) -> &Desc;
    /// Snapshot every series of this instrument.
    fn collect(&self) -> MetricFamily;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    Counter(u64),
    Gauge(f64),
    Histogram(HistogramSnapshot),
}

/// One series at collection time.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub labels: Vec<(String, String)>,
    pub value: SampleValue,
}

/// All series of one instrument at collection time.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFamily {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    pub samples: Vec<Sample>,
}

impl MetricFamily {
    pub(crate) fn from_desc(desc: &Desc, samples: Vec<Sample>) -> Self {
        Self {
            name: desc.name.clone(),
            help: desc.help.clone(),
            kind: desc.kind,
            samples,
        }
    }
}
