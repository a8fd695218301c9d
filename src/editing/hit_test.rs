// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing taps against rendered markers

use super::viewport::Viewport;
use crate::model::{MarkerSpec, PinId};
use kurbo::{Point, Vec2};

/// Screen offset from a pin's coordinate to the center of its head.
/// Markers are drawn as a head above a stem ending at the coordinate.
pub const HEAD_OFFSET: Vec2 = Vec2::new(0.0, -22.0);

/// Screen position of a marker's head
pub fn head_position(marker: &MarkerSpec, viewport: &Viewport) -> Point {
    viewport.to_screen(marker.coordinate) + HEAD_OFFSET
}

/// Find the marker whose head is under `screen_pos`.
///
/// When heads overlap, the closest wins; on a tie the later marker (drawn
/// on top) wins.
pub fn marker_at(
    markers: &[MarkerSpec],
    viewport: &Viewport,
    screen_pos: Point,
    max_dist: f64,
) -> Option<PinId> {
    let mut best: Option<(PinId, f64)> = None;
    for marker in markers.iter().rev() {
        let dist = (head_position(marker, viewport) - screen_pos).hypot();
        if dist > max_dist {
            continue;
        }
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((marker.id, dist));
        }
    }
    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinate, PinColor};
    use kurbo::Size;

    fn marker(lat: f64, lon: f64) -> MarkerSpec {
        MarkerSpec {
            id: PinId::next(),
            coordinate: Coordinate::new(lat, lon),
            color: PinColor::Red,
            callout: String::new(),
        }
    }

    fn viewport() -> Viewport {
        let mut vp = Viewport::new(Coordinate::new(0.0, 0.0), 1.0, 1.0);
        vp.set_size(Size::new(100.0, 100.0));
        vp
    }

    #[test]
    fn hits_marker_head() {
        let vp = viewport();
        let m = marker(0.0, 0.0);
        let head = head_position(&m, &vp);
        assert_eq!(marker_at(&[m.clone()], &vp, head, 10.0), Some(m.id));
    }

    #[test]
    fn misses_outside_radius() {
        let vp = viewport();
        let m = marker(0.0, 0.0);
        let far = head_position(&m, &vp) + Vec2::new(30.0, 0.0);
        assert_eq!(marker_at(&[m], &vp, far, 10.0), None);
    }

    #[test]
    fn overlapping_heads_prefer_topmost() {
        let vp = viewport();
        let below = marker(0.0, 0.0);
        let above = marker(0.0, 0.0);
        let head = head_position(&below, &vp);
        assert_eq!(
            marker_at(&[below, above.clone()], &vp, head, 10.0),
            Some(above.id)
        );
    }

    #[test]
    fn closest_head_wins() {
        let vp = viewport();
        let a = marker(0.0, 0.0);
        let b = marker(0.0, 0.05);
        let near_b = head_position(&b, &vp) + Vec2::new(-1.0, 0.0);
        assert_eq!(marker_at(&[a, b.clone()], &vp, near_b, 10.0), Some(b.id));
    }
}
