//! Directional window navigation.
//!
//! Every focusable pane (editor split or docked panel) is reduced to a screen
//! rectangle plus an activation handle. A move then runs:
//! collect -> band (same row/column as a reference point) -> locate current -> step.
//!
//! Nothing here is cached: targets are rebuilt from the host on every request.

pub mod band;
pub mod collect;
pub mod direction;
pub mod dispatch;
pub mod navigator;
pub mod row;
pub mod target;
pub mod window;

pub use band::{in_band, select_band};
pub use collect::{collect_panel_targets, collect_split_targets, collect_targets, split_rows};
pub use direction::{Axis, NavDirection};
pub use dispatch::{navigate_direction, select_relative_pane};
pub use navigator::{
    clamped_index, current_index, focus_outside_grid, focused_panel, navigate_directional,
    navigate_from_panel, navigate_in_band,
};
pub use row::{select_window_in_row, windows_in_row};
pub use target::{Activate, NavTarget, TargetHandle, WorkspaceTarget};
pub use window::{select_next_window, select_previous_window, select_window};
