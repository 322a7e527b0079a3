//! Index based split selection: `select pane N`, next and previous.

use crate::kernel::services::ports::SplitPaneHost;

/// Focuses the `n`th split (1-based, host order). Out of range does nothing.
pub fn select_window<S>(host: &mut S, n: usize) -> bool
where
    S: SplitPaneHost + ?Sized,
{
    let Some(index) = n.checked_sub(1) else {
        return false;
    };
    let panes = host.split_panes();
    let Some(pane) = panes.get(index) else {
        tracing::debug!(n, count = panes.len(), "no split with that number");
        return false;
    };
    host.activate_split_pane(pane);
    true
}

pub fn select_next_window<S>(host: &mut S) -> bool
where
    S: SplitPaneHost + ?Sized,
{
    cycle_window(host, 1)
}

pub fn select_previous_window<S>(host: &mut S) -> bool
where
    S: SplitPaneHost + ?Sized,
{
    cycle_window(host, -1)
}

/// Steps through splits in host order, wrapping at both ends.
fn cycle_window<S>(host: &mut S, step: i64) -> bool
where
    S: SplitPaneHost + ?Sized,
{
    let Some(current) = host.current_split_pane() else {
        return false;
    };
    let panes = host.split_panes();
    let Some(pos) = panes.iter().position(|pane| *pane == current) else {
        return false;
    };
    let len = panes.len() as i64;
    let next = (pos as i64 + step).rem_euclid(len) as usize;
    if next == pos {
        return false;
    }
    host.activate_split_pane(&panes[next]);
    true
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/nav/window.rs"]
mod tests;
