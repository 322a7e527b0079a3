//! Entry points bound to window-movement commands.

use crate::kernel::services::ports::{
    caret_screen_point, split_rect, CaretHost, NavigationConfig, Workspace,
};

use super::direction::{Axis, NavDirection};
use super::navigator::{
    focus_outside_grid, focused_panel, navigate_directional, navigate_from_panel,
};
use super::row::select_window_in_row;

/// Moves focus `offset` panes along `axis`, starting from the split holding `caret`.
///
/// With extended navigation docked panels are candidates too; otherwise only
/// splits are. A missing workspace or focused split makes this a no-op.
pub fn select_relative_pane<W>(
    workspace: Option<&mut W>,
    caret: &W::Caret,
    offset: i32,
    axis: Axis,
    config: &NavigationConfig,
) -> bool
where
    W: Workspace + CaretHost + ?Sized,
{
    let Some(workspace) = workspace else {
        return false;
    };
    let Some(current) = workspace.current_split_pane() else {
        return false;
    };
    let anchor = caret_screen_point(&*workspace, caret);

    if config.extended {
        let Some(bounds) = split_rect(&*workspace, &current) else {
            return false;
        };
        return navigate_directional(workspace, anchor, bounds, offset, axis);
    }

    select_window_in_row(workspace, &current, anchor, offset, axis)
}

/// Routes a direction to the right origin: the focused docked panel if there is
/// one, otherwise the split holding `caret`. Focus in a floating or detached
/// panel moves nothing, even when a caret is given.
pub fn navigate_direction<W>(
    workspace: &mut W,
    caret: Option<&W::Caret>,
    direction: NavDirection,
    config: &NavigationConfig,
) -> bool
where
    W: Workspace + CaretHost + ?Sized,
{
    if let Some(panel) = focused_panel(&*workspace) {
        return navigate_from_panel(workspace, &panel, direction);
    }
    if focus_outside_grid(&*workspace) {
        tracing::debug!(direction = direction.label(), "focus in a floating panel, move ignored");
        return false;
    }
    let Some(caret) = caret else {
        return false;
    };
    let (offset, axis) = direction.to_navigation_params();
    select_relative_pane(Some(workspace), caret, offset, axis, config)
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/nav/dispatch.rs"]
mod tests;
