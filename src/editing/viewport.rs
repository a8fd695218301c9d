// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Mapping between geographic coordinates and canvas pixels.
//!
//! The visible region is a latitude/longitude box around `center`, stretched
//! linearly over the canvas (equirectangular). Latitude grows upwards, so
//! screen y is flipped.

use crate::model::Coordinate;
use crate::settings;
use kurbo::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: Coordinate,
    latitude_delta: f64,
    longitude_delta: f64,
    size: Size,
}

impl Viewport {
    pub fn new(center: Coordinate, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            latitude_delta,
            longitude_delta,
            size: Size::new(800.0, 600.0),
        }
    }

    /// The fixed launch region
    pub fn initial() -> Self {
        Self::new(
            Coordinate::new(settings::viewport::LATITUDE, settings::viewport::LONGITUDE),
            settings::viewport::LATITUDE_DELTA,
            settings::viewport::LONGITUDE_DELTA,
        )
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn latitude_delta(&self) -> f64 {
        self.latitude_delta
    }

    pub fn longitude_delta(&self) -> f64 {
        self.longitude_delta
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn north(&self) -> f64 {
        self.center.latitude + self.latitude_delta / 2.0
    }

    fn west(&self) -> f64 {
        self.center.longitude - self.longitude_delta / 2.0
    }

    /// Canvas position of a coordinate
    pub fn to_screen(&self, coordinate: Coordinate) -> Point {
        let x = (coordinate.longitude - self.west()) / self.longitude_delta * self.size.width;
        let y = (self.north() - coordinate.latitude) / self.latitude_delta * self.size.height;
        Point::new(x, y)
    }

    /// Coordinate under a canvas position
    pub fn to_coordinate(&self, point: Point) -> Coordinate {
        let longitude = self.west() + point.x / self.size.width * self.longitude_delta;
        let latitude = self.north() - point.y / self.size.height * self.latitude_delta;
        Coordinate::new(latitude, longitude)
    }

    /// Scale both spans by `factor` around the center. The latitude span is
    /// clamped to the configured zoom limits and the longitude span keeps
    /// its ratio to it.
    pub fn zoom_by(&mut self, factor: f64) {
        let ratio = self.longitude_delta / self.latitude_delta;
        self.latitude_delta = (self.latitude_delta * factor)
            .clamp(settings::zoom::MIN_SPAN, settings::zoom::MAX_SPAN);
        self.longitude_delta = self.latitude_delta * ratio;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        let mut vp = Viewport::initial();
        vp.set_size(Size::new(400.0, 200.0));
        vp
    }

    #[test]
    fn center_maps_to_middle_of_canvas() {
        let vp = viewport();
        let p = vp.to_screen(vp.center());
        assert!((p.x - 200.0).abs() < 1e-6);
        assert!((p.y - 100.0).abs() < 1e-6);
    }

    #[test]
    fn north_west_corner_is_origin() {
        let vp = viewport();
        let c = vp.to_coordinate(Point::ZERO);
        assert!((c.latitude - (34.7361 + 0.005)).abs() < 1e-9);
        assert!((c.longitude - (135.3419 - 0.005)).abs() < 1e-9);
    }

    #[test]
    fn screen_and_coordinate_agree() {
        let vp = viewport();
        let p = Point::new(37.0, 151.0);
        let back = vp.to_screen(vp.to_coordinate(p));
        assert!((back.x - p.x).abs() < 1e-6);
        assert!((back.y - p.y).abs() < 1e-6);
    }

    #[test]
    fn zoom_is_clamped_and_keeps_ratio() {
        let mut vp = Viewport::new(Coordinate::new(0.0, 0.0), 0.01, 0.02);
        vp.zoom_by(1e-6);
        assert_eq!(vp.latitude_delta(), settings::zoom::MIN_SPAN);
        assert!((vp.longitude_delta() - 2.0 * settings::zoom::MIN_SPAN).abs() < 1e-12);

        vp.zoom_by(1e9);
        assert_eq!(vp.latitude_delta(), settings::zoom::MAX_SPAN);
        assert_eq!(vp.center(), Coordinate::new(0.0, 0.0));
    }
}
