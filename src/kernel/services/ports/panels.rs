use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Rect;

pub type PanelId = String;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    #[default]
    Docked,
    Floating,
    /// Shown in its own OS window.
    Detached,
}

impl PresentationMode {
    /// Only docked panels take part in the on-screen grid.
    pub fn is_grid_member(self) -> bool {
        matches!(self, Self::Docked)
    }
}

/// Auxiliary panels docked around the editor area (explorer, terminal, problems, ...).
pub trait DockedPanelHost {
    type Panel: Clone + fmt::Debug;

    fn panel_ids(&self) -> Vec<PanelId>;

    fn panel(&self, id: &str) -> Option<Self::Panel>;

    fn is_panel_visible(&self, panel: &Self::Panel) -> bool;

    fn presentation_mode(&self, panel: &Self::Panel) -> PresentationMode;

    /// `None` when the panel surface is not realized on screen.
    fn panel_screen_rect_if_realized(&self, panel: &Self::Panel) -> Option<Rect>;

    /// Whether keyboard focus currently sits inside this panel.
    fn panel_owns_focus(&self, panel: &Self::Panel) -> bool;

    fn activate_panel(&mut self, panel: &Self::Panel);
}

/// Visible panels in docked presentation, in host order.
pub fn grid_panels<H>(host: &H) -> Vec<(PanelId, H::Panel)>
where
    H: DockedPanelHost + ?Sized,
{
    host.panel_ids()
        .into_iter()
        .filter_map(|id| {
            let panel = host.panel(&id)?;
            if !host.is_panel_visible(&panel) {
                return None;
            }
            if !host.presentation_mode(&panel).is_grid_member() {
                return None;
            }
            Some((id, panel))
        })
        .collect()
}
