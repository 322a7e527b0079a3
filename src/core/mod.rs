//! Core primitives shared by the navigation kernel:
//! - geom: screen-space points and rectangles
//! - event: key representation used by chord matching

pub mod event;
pub mod geom;

pub use event::{Key, KeyCode, KeyModifiers};
pub use geom::{Pos, Rect};
