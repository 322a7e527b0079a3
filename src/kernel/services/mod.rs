//! Services layer (ports + adapters).
//!
//! - `ports`: host-facing traits and data contracts used by the kernel.
//! - `adapters`: OS specific implementations and the snapshot host.

pub mod adapters;
pub mod ports;
