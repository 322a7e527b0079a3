//! Band selection: keep the targets lined up with a reference point across the
//! movement axis, ordered along it.

use crate::core::{Pos, Rect};

use super::direction::Axis;
use super::target::NavTarget;

impl Axis {
    /// Extent of `rect` across the movement axis, both ends inclusive.
    pub fn band_span(self, rect: &Rect) -> (i32, i32) {
        match self {
            Axis::Vertical => (rect.x, rect.right()),
            Axis::Horizontal => (rect.y, rect.bottom()),
        }
    }

    /// Coordinate of the reference point across the movement axis.
    pub fn band_coord(self, reference: Pos) -> i32 {
        match self {
            Axis::Vertical => reference.x,
            Axis::Horizontal => reference.y,
        }
    }

    /// Leading edge of `rect` along the movement axis.
    pub fn order_key(self, rect: &Rect) -> i32 {
        match self {
            Axis::Vertical => rect.y,
            Axis::Horizontal => rect.x,
        }
    }
}

/// Inclusive on both ends: a reference on a shared edge belongs to both panes.
pub fn in_band(reference: Pos, axis: Axis, rect: &Rect) -> bool {
    let coord = axis.band_coord(reference);
    let (min, max) = axis.band_span(rect);
    coord >= min && coord <= max
}

/// Equal leading edges keep their input order.
pub fn select_band<H>(reference: Pos, axis: Axis, targets: Vec<NavTarget<H>>) -> Vec<NavTarget<H>> {
    let mut band: Vec<NavTarget<H>> = targets
        .into_iter()
        .filter(|target| in_band(reference, axis, &target.bounds))
        .collect();
    band.sort_by_key(|target| axis.order_key(&target.bounds));
    tracing::trace!(
        ?axis,
        x = reference.x,
        y = reference.y,
        len = band.len(),
        "band selected"
    );
    band
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/nav/band.rs"]
mod tests;
