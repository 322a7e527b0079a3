//! Headless navigation core.

pub mod chord;
pub mod nav;
pub mod services;

pub use chord::{ChordDispatcher, ChordOutcome};
pub use nav::{Axis, NavDirection, NavTarget, TargetHandle};
