use crate::core::Rect;
use crate::kernel::services::ports::{DockedPanelHost, SplitPaneHost, Workspace};

/// Something that can take focus once a navigation picks it.
pub trait Activate<W: ?Sized> {
    fn activate(&self, host: &mut W);
}

/// Which kind of pane a target stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetHandle<S, P> {
    Split(S),
    Panel(P),
}

impl<W> Activate<W> for TargetHandle<<W as SplitPaneHost>::Pane, <W as DockedPanelHost>::Panel>
where
    W: Workspace + ?Sized,
{
    fn activate(&self, host: &mut W) {
        match self {
            TargetHandle::Split(pane) => host.activate_split_pane(pane),
            TargetHandle::Panel(panel) => host.activate_panel(panel),
        }
    }
}

/// A pane reduced to its screen rectangle and the handle that focuses it.
///
/// Bounds are a snapshot taken during collection; a target must not outlive the
/// request that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget<H> {
    pub bounds: Rect,
    pub handle: H,
}

impl<H> NavTarget<H> {
    pub fn new(bounds: Rect, handle: H) -> Self {
        Self { bounds, handle }
    }
}

pub type WorkspaceTarget<W> = NavTarget<
    TargetHandle<<W as SplitPaneHost>::Pane, <W as DockedPanelHost>::Panel>,
>;
