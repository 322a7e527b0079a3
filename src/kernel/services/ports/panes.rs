use std::fmt;

use crate::core::Rect;

/// Split panes living inside the editor tab area.
pub trait SplitPaneHost {
    type Pane: Clone + PartialEq + fmt::Debug;

    fn split_panes(&self) -> Vec<Self::Pane>;

    fn current_split_pane(&self) -> Option<Self::Pane>;

    fn has_displayed_content(&self, pane: &Self::Pane) -> bool;

    /// Screen rectangle of the pane's tab container.
    fn split_screen_rect(&self, pane: &Self::Pane) -> Option<Rect>;

    fn activate_split_pane(&mut self, pane: &Self::Pane);
}

/// Rectangle of a split that currently shows something; empty splits have none.
pub fn split_rect<H>(host: &H, pane: &H::Pane) -> Option<Rect>
where
    H: SplitPaneHost + ?Sized,
{
    if !host.has_displayed_content(pane) {
        return None;
    }
    host.split_screen_rect(pane)
}
