//! panenav - directional focus navigation across editor splits and docked panels.
//!
//! Modules:
//! - core: geometry and key primitives
//! - kernel::nav: target collection, banding, clamped stepping, mode dispatch
//! - kernel::chord: `Ctrl+W` prefix sequences
//! - kernel::services: host ports and adapters (settings, snapshot host)

pub mod core;
pub mod kernel;
