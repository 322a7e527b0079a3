//! Service ports: host-facing traits + data contracts.

pub mod caret;
pub mod config;
pub mod panels;
pub mod panes;
pub mod settings;

pub use caret::{caret_screen_point, CaretHost};
pub use config::NavigationConfig;
pub use panels::{grid_panels, DockedPanelHost, PanelId, PresentationMode};
pub use panes::{split_rect, SplitPaneHost};
pub use settings::{default_chord_rules, ChordRule, NavigationSettings, Settings};

/// A host that knows both kinds of focusable panes.
pub trait Workspace: SplitPaneHost + DockedPanelHost {}

impl<T: SplitPaneHost + DockedPanelHost + ?Sized> Workspace for T {}
