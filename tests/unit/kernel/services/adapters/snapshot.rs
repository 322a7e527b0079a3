use super::*;

const LAYOUT: &str = r#"{
    "splits": [
        { "name": "main.rs", "rect": { "x": 300, "y": 0, "w": 500, "h": 400 },
          "content_inset": { "x": 40, "y": 30 }, "caret": { "x": 12, "y": 18 } },
        { "rect": { "x": 800, "y": 0, "w": 500, "h": 400 }, "has_content": false }
    ],
    "panels": [
        { "id": "project", "rect": { "x": 0, "y": 0, "w": 300, "h": 600 } },
        { "id": "find", "rect": { "x": 20, "y": 20, "w": 100, "h": 100 }, "mode": "floating" },
        { "id": "git", "rect": { "x": 0, "y": 0, "w": 1, "h": 1 }, "visible": false }
    ],
    "current_split": 0
}"#;

#[test]
fn layout_json_fills_defaults() {
    let ws = SnapshotWorkspace::from_json(LAYOUT).unwrap();
    let layout = ws.layout();
    assert!(layout.splits[0].has_content);
    assert!(!layout.splits[1].has_content);
    assert_eq!(layout.panels[0].mode, PresentationMode::Docked);
    assert_eq!(layout.panels[1].mode, PresentationMode::Floating);
    assert!(!layout.panels[2].visible);
    assert!(layout.panels[2].realized);
    assert_eq!(layout.focused_panel, None);
}

#[test]
fn caret_maps_through_content_origin() {
    let ws = SnapshotWorkspace::from_json(LAYOUT).unwrap();
    let caret = ws.current_caret().unwrap();
    assert_eq!(ws.caret_xy(&caret), Pos::new(12, 18));
    assert_eq!(ws.content_origin_on_screen(&caret), Pos::new(340, 30));
}

#[test]
fn activating_panel_moves_focus_and_hides_caret() {
    let mut ws = SnapshotWorkspace::from_json(LAYOUT).unwrap();
    let project = ws.panel("project").unwrap();
    ws.activate_panel(&project);
    assert_eq!(ws.focus(), Some(Focus::Panel("project".to_string())));
    assert!(ws.panel_owns_focus(&project));
    assert_eq!(ws.current_caret(), None);

    ws.activate_split_pane(&SplitRef(0));
    assert_eq!(ws.focus_label(), "main.rs");
    assert!(!ws.panel_owns_focus(&project));
    assert_eq!(
        ws.take_activations(),
        vec![Focus::Panel("project".to_string()), Focus::Split(0)]
    );
    assert!(ws.activations().is_empty());
}

#[test]
fn unknown_handles_are_ignored() {
    let mut ws = SnapshotWorkspace::from_json(LAYOUT).unwrap();
    ws.activate_split_pane(&SplitRef(9));
    ws.activate_panel(&PanelRef(9));
    assert!(ws.activations().is_empty());
    assert_eq!(ws.panel("missing"), None);
    assert_eq!(ws.split_label(1), "split #2");
}

#[test]
fn hidden_panel_has_no_realized_rect() {
    let ws = SnapshotWorkspace::from_json(LAYOUT).unwrap();
    let git = ws.panel("git").unwrap();
    assert_eq!(ws.panel_screen_rect_if_realized(&git), None);
}

#[test]
fn out_of_range_current_split_is_none() {
    let ws = SnapshotWorkspace::new(LayoutSnapshot {
        current_split: Some(3),
        ..LayoutSnapshot::default()
    });
    assert_eq!(ws.current_split_pane(), None);
}
