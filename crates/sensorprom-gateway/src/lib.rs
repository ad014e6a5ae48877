//! sensorprom service library entry.
//!
//! Wires config, the metric instruments, the HTTP handlers, and the sensor
//! simulator into one service. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod sensor;
