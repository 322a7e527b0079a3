//! Split-only navigation, used when docked panels stay out of directional moves.

use crate::core::Pos;
use crate::kernel::services::ports::SplitPaneHost;

use super::band::select_band;
use super::collect::split_rows;
use super::direction::Axis;
use super::navigator::clamped_index;
use super::target::NavTarget;

/// Splits lined up with `anchor` across `axis`, ordered along it.
pub fn windows_in_row<S>(host: &S, anchor: Pos, axis: Axis) -> Vec<NavTarget<S::Pane>>
where
    S: SplitPaneHost + ?Sized,
{
    select_band(anchor, axis, split_rows(host))
}

/// Focuses the split `offset` steps away from `current` in the row through `anchor`.
///
/// `current` is located by identity here; a split outside the row is a no-op.
pub fn select_window_in_row<S>(
    host: &mut S,
    current: &S::Pane,
    anchor: Pos,
    offset: i32,
    axis: Axis,
) -> bool
where
    S: SplitPaneHost + ?Sized,
{
    let row = windows_in_row(&*host, anchor, axis);
    let Some(pos) = row.iter().position(|target| &target.handle == current) else {
        tracing::debug!(len = row.len(), "current split is outside the row");
        return false;
    };
    let selected = clamped_index(pos, offset, row.len());
    if selected == pos {
        return false;
    }
    host.activate_split_pane(&row[selected].handle);
    tracing::debug!(from = pos, to = selected, offset, "split selected");
    true
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/nav/row.rs"]
mod tests;
