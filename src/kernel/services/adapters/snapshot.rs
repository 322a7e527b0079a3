//! In-memory workspace built from a serialized layout.
//!
//! Implements every host port so the navigation kernel can run without a live
//! windowing system: the CLI replays key sequences against it and tests use it
//! as a fixture.

use serde::{Deserialize, Serialize};

use crate::core::{Pos, Rect};
use crate::kernel::services::ports::{
    CaretHost, DockedPanelHost, PanelId, PresentationMode, SplitPaneHost,
};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    #[serde(default)]
    pub splits: Vec<SplitSnapshot>,
    #[serde(default)]
    pub panels: Vec<PanelSnapshot>,
    /// Index into `splits`.
    #[serde(default)]
    pub current_split: Option<usize>,
    #[serde(default)]
    pub focused_panel: Option<PanelId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tab container bounds on screen.
    pub rect: Rect,
    #[serde(default = "default_true")]
    pub has_content: bool,
    /// Offset from `rect` origin to the text content area (tab row, gutter).
    #[serde(default)]
    pub content_inset: Pos,
    /// Caret pixel position inside the content area.
    #[serde(default)]
    pub caret: Pos,
}

impl SplitSnapshot {
    pub fn new(rect: Rect) -> Self {
        Self {
            name: None,
            rect,
            has_content: true,
            content_inset: Pos::default(),
            caret: Pos::default(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn empty(mut self) -> Self {
        self.has_content = false;
        self
    }

    pub fn with_caret(mut self, caret: Pos) -> Self {
        self.caret = caret;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub id: PanelId,
    pub rect: Rect,
    #[serde(default)]
    pub mode: PresentationMode,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub realized: bool,
}

impl PanelSnapshot {
    pub fn new(id: impl Into<PanelId>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
            mode: PresentationMode::Docked,
            visible: true,
            realized: true,
        }
    }

    pub fn mode(mut self, mode: PresentationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn unrealized(mut self) -> Self {
        self.realized = false;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitRef(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelRef(pub usize);

/// Caret of the editor shown in a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotCaret {
    pub split: SplitRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    Split(usize),
    Panel(PanelId),
}

pub struct SnapshotWorkspace {
    layout: LayoutSnapshot,
    activations: Vec<Focus>,
}

impl SnapshotWorkspace {
    pub fn new(layout: LayoutSnapshot) -> Self {
        Self {
            layout,
            activations: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn layout(&self) -> &LayoutSnapshot {
        &self.layout
    }

    /// Panel focus wins over the current split, as keyboard focus can only be in one place.
    pub fn focus(&self) -> Option<Focus> {
        if let Some(id) = &self.layout.focused_panel {
            return Some(Focus::Panel(id.clone()));
        }
        self.layout.current_split.map(Focus::Split)
    }

    pub fn focus_label(&self) -> String {
        match self.focus() {
            Some(Focus::Split(index)) => self.split_label(index),
            Some(Focus::Panel(id)) => id,
            None => "none".to_string(),
        }
    }

    pub fn split_label(&self, index: usize) -> String {
        self.layout
            .splits
            .get(index)
            .and_then(|split| split.name.clone())
            .unwrap_or_else(|| format!("split #{}", index + 1))
    }

    /// Caret of the current split, unless focus sits in a docked panel.
    pub fn current_caret(&self) -> Option<SnapshotCaret> {
        if self.layout.focused_panel.is_some() {
            return None;
        }
        let index = self.layout.current_split?;
        Some(SnapshotCaret {
            split: SplitRef(index),
        })
    }

    /// Every focus change made through the host ports, oldest first.
    pub fn activations(&self) -> &[Focus] {
        &self.activations
    }

    pub fn take_activations(&mut self) -> Vec<Focus> {
        std::mem::take(&mut self.activations)
    }

    fn split(&self, pane: &SplitRef) -> Option<&SplitSnapshot> {
        self.layout.splits.get(pane.0)
    }

    fn panel_snapshot(&self, panel: &PanelRef) -> Option<&PanelSnapshot> {
        self.layout.panels.get(panel.0)
    }
}

impl SplitPaneHost for SnapshotWorkspace {
    type Pane = SplitRef;

    fn split_panes(&self) -> Vec<SplitRef> {
        (0..self.layout.splits.len()).map(SplitRef).collect()
    }

    fn current_split_pane(&self) -> Option<SplitRef> {
        self.layout
            .current_split
            .filter(|index| *index < self.layout.splits.len())
            .map(SplitRef)
    }

    fn has_displayed_content(&self, pane: &SplitRef) -> bool {
        self.split(pane).is_some_and(|split| split.has_content)
    }

    fn split_screen_rect(&self, pane: &SplitRef) -> Option<Rect> {
        self.split(pane).map(|split| split.rect)
    }

    fn activate_split_pane(&mut self, pane: &SplitRef) {
        if self.split(pane).is_none() {
            return;
        }
        self.layout.current_split = Some(pane.0);
        self.layout.focused_panel = None;
        self.activations.push(Focus::Split(pane.0));
    }
}

impl DockedPanelHost for SnapshotWorkspace {
    type Panel = PanelRef;

    fn panel_ids(&self) -> Vec<PanelId> {
        self.layout
            .panels
            .iter()
            .map(|panel| panel.id.clone())
            .collect()
    }

    fn panel(&self, id: &str) -> Option<PanelRef> {
        self.layout
            .panels
            .iter()
            .position(|panel| panel.id == id)
            .map(PanelRef)
    }

    fn is_panel_visible(&self, panel: &PanelRef) -> bool {
        self.panel_snapshot(panel).is_some_and(|p| p.visible)
    }

    fn presentation_mode(&self, panel: &PanelRef) -> PresentationMode {
        self.panel_snapshot(panel)
            .map(|p| p.mode)
            .unwrap_or_default()
    }

    fn panel_screen_rect_if_realized(&self, panel: &PanelRef) -> Option<Rect> {
        let snapshot = self.panel_snapshot(panel)?;
        if !snapshot.visible || !snapshot.realized {
            return None;
        }
        Some(snapshot.rect)
    }

    fn panel_owns_focus(&self, panel: &PanelRef) -> bool {
        match (self.panel_snapshot(panel), &self.layout.focused_panel) {
            (Some(snapshot), Some(focused)) => snapshot.id == *focused,
            _ => false,
        }
    }

    fn activate_panel(&mut self, panel: &PanelRef) {
        let Some(id) = self.panel_snapshot(panel).map(|p| p.id.clone()) else {
            return;
        };
        self.layout.focused_panel = Some(id.clone());
        self.activations.push(Focus::Panel(id));
    }
}

impl CaretHost for SnapshotWorkspace {
    type Caret = SnapshotCaret;

    fn caret_xy(&self, caret: &SnapshotCaret) -> Pos {
        self.split(&caret.split)
            .map(|split| split.caret)
            .unwrap_or_default()
    }

    fn content_origin_on_screen(&self, caret: &SnapshotCaret) -> Pos {
        self.split(&caret.split)
            .map(|split| {
                split
                    .rect
                    .origin()
                    .translate(split.content_inset.x, split.content_inset.y)
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/snapshot.rs"]
mod tests;
