use crate::core::{Pos, Rect};
use crate::kernel::services::ports::{grid_panels, DockedPanelHost, Workspace};

use super::band::select_band;
use super::collect::collect_targets;
use super::direction::{Axis, NavDirection};
use super::target::{Activate, NavTarget};

/// Position of the focused pane inside `band`.
///
/// Matching is by overlap, not equality, so two snapshots of the same pane that
/// drifted by a pixel still line up.
pub fn current_index<H>(current_bounds: &Rect, band: &[NavTarget<H>]) -> Option<usize> {
    band.iter()
        .position(|target| target.bounds.intersects(current_bounds))
}

/// `current + offset`, clamped into `0..len`. Never wraps.
pub fn clamped_index(current: usize, offset: i32, len: usize) -> usize {
    let last = len.saturating_sub(1) as i64;
    (current as i64 + i64::from(offset)).clamp(0, last) as usize
}

/// Moves focus `offset` steps through an already ordered band.
///
/// Returns `false` when the focused pane is not in the band or the move would
/// stay in place (already at the edge).
pub fn navigate_in_band<W, H>(
    host: &mut W,
    current_bounds: &Rect,
    band: &[NavTarget<H>],
    offset: i32,
) -> bool
where
    W: ?Sized,
    H: Activate<W>,
{
    let Some(current) = current_index(current_bounds, band) else {
        tracing::debug!(len = band.len(), "focused pane is outside the band");
        return false;
    };
    let target = clamped_index(current, offset, band.len());
    if target == current {
        return false;
    }
    band[target].handle.activate(host);
    tracing::debug!(from = current, to = target, offset, "focus moved");
    true
}

/// Directional move across splits and docked panels alike.
///
/// `reference` picks the row or column, `current_bounds` locates the focused pane
/// in it. Positive offsets go right/down.
pub fn navigate_directional<W>(
    workspace: &mut W,
    reference: Pos,
    current_bounds: Rect,
    offset: i32,
    axis: Axis,
) -> bool
where
    W: Workspace + ?Sized,
{
    let targets = collect_targets(&*workspace);
    let band = select_band(reference, axis, targets);
    navigate_in_band(workspace, &current_bounds, &band, offset)
}

/// The docked panel holding keyboard focus, if any.
pub fn focused_panel<W>(workspace: &W) -> Option<W::Panel>
where
    W: DockedPanelHost + ?Sized,
{
    grid_panels(workspace)
        .into_iter()
        .map(|(_, panel)| panel)
        .find(|panel| workspace.panel_owns_focus(panel))
}

/// Focus sits in a floating or detached panel, which has no place in the grid.
pub fn focus_outside_grid<W>(workspace: &W) -> bool
where
    W: DockedPanelHost + ?Sized,
{
    workspace
        .panel_ids()
        .iter()
        .filter_map(|id| workspace.panel(id))
        .any(|panel| {
            !workspace.presentation_mode(&panel).is_grid_member()
                && workspace.panel_owns_focus(&panel)
        })
}

/// Directional move starting from a docked panel, measured from its centre.
pub fn navigate_from_panel<W>(workspace: &mut W, panel: &W::Panel, direction: NavDirection) -> bool
where
    W: Workspace + ?Sized,
{
    if !workspace.is_panel_visible(panel) || !workspace.presentation_mode(panel).is_grid_member() {
        return false;
    }
    let Some(bounds) = workspace.panel_screen_rect_if_realized(panel) else {
        return false;
    };
    let (offset, axis) = direction.to_navigation_params();
    tracing::debug!(panel = ?panel, direction = direction.label(), "navigate from panel");
    navigate_directional(workspace, bounds.center(), bounds, offset, axis)
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/nav/navigator.rs"]
mod tests;
