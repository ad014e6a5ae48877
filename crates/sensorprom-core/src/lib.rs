//! sensorprom core: the in-process metrics model shared by the gateway.
//!
//! This crate defines the metric instruments (counter, gauge, histogram), the
//! registry that owns them, the Prometheus text encoder, and the injectable
//! random source used by the simulated workloads. It carries no transport or
//! runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Programmer errors such as a label arity mismatch surface as
//! `SensorPromError` so callers decide how loudly to fail.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod random;

/// Shared result type.
pub use error::{Result, SensorPromError};
