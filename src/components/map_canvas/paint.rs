// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helper methods for MapWidget

use super::MapWidget;
use crate::editing::hit_test;
use crate::model::{Coordinate, PinColor};
use crate::settings;
use crate::theme;
use kurbo::{Affine, Circle, Line, Point, Stroke};
use masonry::kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color};

impl MapWidget {
    pub(super) fn paint_background(&self, scene: &mut Scene, canvas_size: Size) {
        let bg_rect = canvas_size.to_rect();
        fill_color(scene, &bg_rect, theme::map::BACKGROUND);
    }

    /// Latitude/longitude lines at a fixed fraction of the visible span,
    /// plus a small cross at the viewport center
    pub(super) fn paint_graticule(&self, scene: &mut Scene, canvas_size: Size) {
        let stroke = Stroke::new(1.0);
        let brush = Brush::Solid(theme::map::GRATICULE);
        let step = self.viewport.latitude_delta() / settings::map::GRATICULE_DIVISIONS;

        let top_left = self.viewport.to_coordinate(Point::ZERO);
        let bottom_right = self
            .viewport
            .to_coordinate(Point::new(canvas_size.width, canvas_size.height));

        let mut lat = (bottom_right.latitude / step).floor() * step;
        while lat <= top_left.latitude {
            let y = self
                .viewport
                .to_screen(Coordinate::new(lat, top_left.longitude))
                .y;
            let line = Line::new((0.0, y), (canvas_size.width, y));
            scene.stroke(&stroke, Affine::IDENTITY, &brush, None, &line);
            lat += step;
        }

        let mut lon = (top_left.longitude / step).floor() * step;
        while lon <= bottom_right.longitude {
            let x = self
                .viewport
                .to_screen(Coordinate::new(top_left.latitude, lon))
                .x;
            let line = Line::new((x, 0.0), (x, canvas_size.height));
            scene.stroke(&stroke, Affine::IDENTITY, &brush, None, &line);
            lon += step;
        }

        let center = self.viewport.to_screen(self.viewport.center());
        let cross = Brush::Solid(theme::map::CENTER_CROSS);
        for (dx, dy) in [(6.0, 0.0), (0.0, 6.0)] {
            let line = Line::new((center.x - dx, center.y - dy), (center.x + dx, center.y + dy));
            scene.stroke(&stroke, Affine::IDENTITY, &cross, None, &line);
        }
    }

    /// One marker per pin, in store order so later pins sit on top
    pub(super) fn paint_markers(&self, scene: &mut Scene) {
        for marker in &self.markers {
            let tip = self.viewport.to_screen(marker.coordinate);
            let highlighted = self.selected == Some(marker.id);
            paint_pin(scene, tip, marker.color, highlighted);
        }
    }

    pub(super) fn paint_draft(&self, scene: &mut Scene) {
        if let Some(draft) = &self.draft {
            let tip = self.viewport.to_screen(draft.coordinate);
            paint_pin(scene, tip, draft.color, true);
        }
    }
}

/// Draw a pin whose stem ends at `tip`
fn paint_pin(scene: &mut Scene, tip: Point, color: PinColor, highlighted: bool) {
    let head_center = tip + hit_test::HEAD_OFFSET;
    let radius = theme::size::PIN_HEAD_RADIUS;
    let stroke = Stroke::new(theme::size::PIN_STROKE_WIDTH);
    let outline = Brush::Solid(theme::pin::OUTLINE);

    // Stem
    let stem = Line::new(tip, head_center);
    scene.stroke(&stroke, Affine::IDENTITY, &outline, None, &stem);

    // Head
    let head = Circle::new(head_center, radius);
    fill_color(scene, &head, theme::pin::color(color));
    scene.stroke(&stroke, Affine::IDENTITY, &outline, None, &head);

    // Highlight ring for the selected or draft marker
    if highlighted {
        let ring = Circle::new(head_center, radius + 3.0);
        scene.stroke(
            &Stroke::new(2.0),
            Affine::IDENTITY,
            &Brush::Solid(theme::pin::DRAFT_RING),
            None,
            &ring,
        );
    }

    // Small white dot in the head so markers read on any tint
    let dot = Circle::new(head_center, radius * 0.3);
    fill_color(scene, &dot, Color::WHITE);
}
