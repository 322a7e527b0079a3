//! Gathers every pane that can take part in spatial navigation right now.

use crate::kernel::services::ports::{grid_panels, split_rect, SplitPaneHost, Workspace};

use super::target::{NavTarget, TargetHandle, WorkspaceTarget};

/// Splits followed by docked panels. Order is irrelevant, bands re-sort.
pub fn collect_targets<W>(workspace: &W) -> Vec<WorkspaceTarget<W>>
where
    W: Workspace + ?Sized,
{
    let splits = collect_split_targets(workspace);
    let panels = collect_panel_targets(workspace);

    let mut targets = Vec::with_capacity(splits.len() + panels.len());
    targets.extend(splits);
    targets.extend(panels);
    tracing::trace!(count = targets.len(), "collected navigation targets");
    targets
}

pub fn collect_split_targets<W>(workspace: &W) -> Vec<WorkspaceTarget<W>>
where
    W: Workspace + ?Sized,
{
    split_rows(workspace)
        .into_iter()
        .map(|row| NavTarget::new(row.bounds, TargetHandle::Split(row.handle)))
        .collect()
}

/// Floating and detached panels, hidden ones, and panels without a realized
/// surface are not part of the grid.
pub fn collect_panel_targets<W>(workspace: &W) -> Vec<WorkspaceTarget<W>>
where
    W: Workspace + ?Sized,
{
    grid_panels(workspace)
        .into_iter()
        .filter_map(|(id, panel)| {
            let Some(rect) = workspace.panel_screen_rect_if_realized(&panel) else {
                tracing::trace!(panel = %id, "panel not realized, skipped");
                return None;
            };
            Some(NavTarget::new(rect, TargetHandle::Panel(panel)))
        })
        .collect()
}

/// Split handles paired with their rectangles. Splits with nothing displayed are left out.
pub fn split_rows<S>(host: &S) -> Vec<NavTarget<S::Pane>>
where
    S: SplitPaneHost + ?Sized,
{
    host.split_panes()
        .into_iter()
        .filter_map(|pane| {
            let rect = split_rect(host, &pane)?;
            Some(NavTarget::new(rect, pane))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/nav/collect.rs"]
mod tests;
