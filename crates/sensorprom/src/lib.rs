//! Top-level facade crate for sensorprom.
//!
//! Re-exports the metrics core and the service library so users can depend on a single crate.

pub mod core {
    pub use sensorprom_core::*;
}

pub mod gateway {
    pub use sensorprom_gateway::*;
}
