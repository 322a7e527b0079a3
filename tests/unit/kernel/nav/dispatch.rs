use super::*;
use crate::core::{Pos, Rect};
use crate::kernel::services::adapters::{
    Focus, LayoutSnapshot, PanelSnapshot, SnapshotCaret, SnapshotWorkspace, SplitRef,
    SplitSnapshot,
};
use crate::kernel::services::ports::{DockedPanelHost, PresentationMode, SplitPaneHost};

fn caret_in(split: usize) -> SnapshotCaret {
    SnapshotCaret {
        split: SplitRef(split),
    }
}

/// Two stacked splits above a docked terminal.
fn stacked_with_terminal() -> SnapshotWorkspace {
    SnapshotWorkspace::new(LayoutSnapshot {
        splits: vec![
            SplitSnapshot::new(Rect::new(0, 0, 100, 50)).with_caret(Pos::new(55, 10)),
            SplitSnapshot::new(Rect::new(0, 50, 100, 50)).with_caret(Pos::new(55, 10)),
        ],
        panels: vec![PanelSnapshot::new("terminal", Rect::new(0, 100, 100, 40))],
        current_split: Some(0),
        focused_panel: None,
    })
}

#[test]
fn caret_point_selects_lower_split() {
    for extended in [false, true] {
        let mut ws = stacked_with_terminal();
        let config = NavigationConfig::with_extended(extended);
        assert!(select_relative_pane(Some(&mut ws), &caret_in(0), 1, Axis::Vertical, &config));
        assert_eq!(ws.activations(), &[Focus::Split(1)], "extended={extended}");
    }
}

#[test]
fn narrow_mode_never_reaches_docked_panels() {
    let mut ws = stacked_with_terminal();
    ws.activate_split_pane(&SplitRef(1));
    ws.take_activations();

    let config = NavigationConfig::with_extended(false);
    assert!(!select_relative_pane(Some(&mut ws), &caret_in(1), 1, Axis::Vertical, &config));
    assert!(ws.activations().is_empty());
}

#[test]
fn extended_mode_reaches_docked_panels() {
    let mut ws = stacked_with_terminal();
    ws.activate_split_pane(&SplitRef(1));
    ws.take_activations();

    let config = NavigationConfig::with_extended(true);
    assert!(select_relative_pane(Some(&mut ws), &caret_in(1), 1, Axis::Vertical, &config));
    assert_eq!(ws.activations(), &[Focus::Panel("terminal".to_string())]);
}

#[test]
fn missing_workspace_is_noop() {
    let config = NavigationConfig::with_extended(true);
    assert!(!select_relative_pane::<SnapshotWorkspace>(
        None,
        &caret_in(0),
        1,
        Axis::Vertical,
        &config
    ));
}

#[test]
fn missing_current_split_is_noop() {
    let mut layout = stacked_with_terminal().layout().clone();
    layout.current_split = None;
    let mut ws = SnapshotWorkspace::new(layout);
    for extended in [false, true] {
        let config = NavigationConfig::with_extended(extended);
        assert!(!select_relative_pane(Some(&mut ws), &caret_in(0), 1, Axis::Vertical, &config));
    }
    assert!(ws.activations().is_empty());
}

#[test]
fn extended_mode_needs_current_split_rect() {
    let mut layout = stacked_with_terminal().layout().clone();
    layout.splits[0].has_content = false;
    let mut ws = SnapshotWorkspace::new(layout);
    let config = NavigationConfig::with_extended(true);
    assert!(!select_relative_pane(Some(&mut ws), &caret_in(0), 1, Axis::Vertical, &config));
}

#[test]
fn content_inset_shifts_caret_reference() {
    let mut layout = LayoutSnapshot {
        splits: vec![
            SplitSnapshot::new(Rect::new(0, 0, 100, 100)).with_caret(Pos::new(0, 5)),
            SplitSnapshot::new(Rect::new(0, 100, 100, 100)),
            SplitSnapshot::new(Rect::new(100, 0, 100, 100)),
        ],
        current_split: Some(0),
        ..LayoutSnapshot::default()
    };
    // The inset puts the caret on x=100, the edge shared with the right-hand split,
    // so that split joins the column and sorts ahead of the lower one.
    layout.splits[0].content_inset = Pos::new(100, 0);
    let mut ws = SnapshotWorkspace::new(layout);
    let config = NavigationConfig::with_extended(false);
    assert!(select_relative_pane(Some(&mut ws), &caret_in(0), 1, Axis::Vertical, &config));
    assert_eq!(ws.activations(), &[Focus::Split(2)]);
}

#[test]
fn navigate_direction_starts_from_focused_panel() {
    let mut ws = stacked_with_terminal();
    let terminal = ws.panel("terminal").expect("terminal");
    ws.activate_panel(&terminal);
    ws.take_activations();

    let config = NavigationConfig::default();
    assert!(navigate_direction(&mut ws, None, NavDirection::Up, &config));
    assert_eq!(ws.activations(), &[Focus::Split(1)]);
}

#[test]
fn navigate_direction_without_caret_or_panel_is_noop() {
    let mut ws = stacked_with_terminal();
    let config = NavigationConfig::default();
    assert!(!navigate_direction(&mut ws, None, NavDirection::Down, &config));
}

#[test]
fn navigate_direction_uses_caret_in_split() {
    let mut ws = stacked_with_terminal();
    let caret = ws.current_caret();
    let config = NavigationConfig::default();
    assert!(navigate_direction(&mut ws, caret.as_ref(), NavDirection::Down, &config));
    assert_eq!(ws.activations(), &[Focus::Split(1)]);
}

#[test]
fn focus_in_floating_panel_ignores_caret() {
    let mut layout = stacked_with_terminal().layout().clone();
    layout.panels.push(
        PanelSnapshot::new("find", Rect::new(10, 10, 40, 20)).mode(PresentationMode::Floating),
    );
    let mut ws = SnapshotWorkspace::new(layout);
    let find = ws.panel("find").expect("find");
    ws.activate_panel(&find);
    ws.take_activations();
    assert!(focus_outside_grid(&ws));

    let caret = caret_in(0);
    for extended in [false, true] {
        let config = NavigationConfig::with_extended(extended);
        assert!(!navigate_direction(&mut ws, Some(&caret), NavDirection::Down, &config));
    }
    assert!(ws.activations().is_empty());
    assert_eq!(ws.focus_label(), "find");
}

#[test]
fn focus_in_docked_panel_is_inside_grid() {
    let mut ws = stacked_with_terminal();
    assert!(!focus_outside_grid(&ws));
    let terminal = ws.panel("terminal").expect("terminal");
    ws.activate_panel(&terminal);
    assert!(!focus_outside_grid(&ws));
}
