//! Service instruments and their registry.
//!
//! Everything here is rendered by the `/metrics` handler in `ops`.

pub mod metrics;
