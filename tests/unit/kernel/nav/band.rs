use super::*;

fn target(id: u32, x: i32, y: i32, w: i32, h: i32) -> NavTarget<u32> {
    NavTarget::new(Rect::new(x, y, w, h), id)
}

fn ids(band: &[NavTarget<u32>]) -> Vec<u32> {
    band.iter().map(|t| t.handle).collect()
}

#[test]
fn band_membership_includes_both_edges() {
    let rect = Rect::new(100, 0, 100, 50);
    assert!(in_band(Pos::new(100, 999), Axis::Vertical, &rect));
    assert!(in_band(Pos::new(200, 999), Axis::Vertical, &rect));
    assert!(!in_band(Pos::new(99, 0), Axis::Vertical, &rect));
    assert!(!in_band(Pos::new(201, 0), Axis::Vertical, &rect));

    assert!(in_band(Pos::new(-999, 0), Axis::Horizontal, &rect));
    assert!(in_band(Pos::new(-999, 50), Axis::Horizontal, &rect));
    assert!(!in_band(Pos::new(150, 51), Axis::Horizontal, &rect));
}

#[test]
fn reference_on_shared_edge_selects_both_panes() {
    let targets = vec![target(1, 0, 0, 100, 50), target(2, 100, 0, 100, 50)];
    let band = select_band(Pos::new(100, 200), Axis::Vertical, targets);
    assert_eq!(ids(&band), vec![1, 2]);
}

#[test]
fn horizontal_band_orders_by_x() {
    let targets = vec![
        target(3, 200, 0, 100, 50),
        target(1, 0, 0, 100, 50),
        target(9, 0, 60, 300, 50),
        target(2, 100, 10, 100, 30),
    ];
    let band = select_band(Pos::new(150, 25), Axis::Horizontal, targets);
    assert_eq!(ids(&band), vec![1, 2, 3]);
}

#[test]
fn vertical_band_orders_by_y() {
    let targets = vec![
        target(2, 0, 50, 100, 50),
        target(1, 0, 0, 100, 50),
        target(7, 120, 0, 100, 100),
    ];
    let band = select_band(Pos::new(55, 10), Axis::Vertical, targets);
    assert_eq!(ids(&band), vec![1, 2]);
}

#[test]
fn band_order_is_non_decreasing() {
    let targets: Vec<_> = [40, -10, 300, 0, 40, 120, 5]
        .iter()
        .enumerate()
        .map(|(i, x)| target(i as u32, *x, 0, 30, 30))
        .collect();
    let band = select_band(Pos::new(0, 15), Axis::Horizontal, targets);
    assert_eq!(band.len(), 7);
    assert!(band.windows(2).all(|w| w[0].bounds.x <= w[1].bounds.x));
}

#[test]
fn equal_leading_edges_keep_input_order() {
    let targets = vec![
        target(5, 0, 0, 10, 10),
        target(4, 0, 0, 20, 20),
        target(6, 0, 0, 5, 5),
    ];
    let band = select_band(Pos::new(3, 3), Axis::Horizontal, targets);
    assert_eq!(ids(&band), vec![5, 4, 6]);
}

#[test]
fn no_target_spans_reference() {
    let targets = vec![target(1, 0, 0, 10, 10)];
    assert!(select_band(Pos::new(50, 50), Axis::Vertical, targets).is_empty());
}
