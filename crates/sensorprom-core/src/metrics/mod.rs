//! In-process metric instruments and their Prometheus text rendering.
//!
//! Instruments register with a [`Registry`] that is constructed once at
//! startup and shared by `Arc`. Labeled instruments keep one series per label
//! value tuple in a `DashMap`; series are created lazily and never evicted.

pub mod counter;
pub mod desc;
pub mod encode;
pub mod gauge;
pub mod histogram;
pub mod registry;

pub use counter::CounterVec;
pub use desc::{Collector, Desc, MetricFamily, MetricKind, Sample, SampleValue};
pub use encode::{encode_text, TEXT_CONTENT_TYPE};
pub use gauge::Gauge;
pub use histogram::{HistogramSnapshot, HistogramVec, DEFAULT_BUCKETS};
pub use registry::Registry;
