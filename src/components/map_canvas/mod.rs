// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Map canvas widget - draws markers and turns presses into map actions

mod paint;
mod view;

pub use view::map_view;

use crate::editing::{Viewport, hit_test};
use crate::model::{Coordinate, MarkerSpec, PinColor, PinId};
use crate::settings;
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerScrollEvent, PropertiesMut, PropertiesRef,
    RegisterCtx, ScrollDelta, TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;

/// Pending draft marker shown while the editor overlay is open
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftMarker {
    pub coordinate: Coordinate,
    pub color: PinColor,
}

/// Action emitted by the map canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapAction {
    /// A press on empty map space
    Pressed(Coordinate),
    /// A tap on a marker head
    PinTapped(PinId),
}

/// The map surface: background, graticule, one marker per pin
pub struct MapWidget {
    /// Marker set, re-derived from the pin store on every rebuild
    pub(super) markers: Vec<MarkerSpec>,

    /// Draft being edited, if any
    pub(super) draft: Option<DraftMarker>,

    /// Marker whose callout is open
    pub(super) selected: Option<PinId>,

    /// Visible region and canvas size
    pub(super) viewport: Viewport,
}

impl MapWidget {
    pub fn new(
        markers: Vec<MarkerSpec>,
        draft: Option<DraftMarker>,
        selected: Option<PinId>,
    ) -> Self {
        Self {
            markers,
            draft,
            selected,
            viewport: Viewport::initial(),
        }
    }

    fn handle_pointer_down(&mut self, ctx: &mut EventCtx<'_>, state: &masonry::core::PointerState) {
        let local_pos = ctx.local_position(state.position);

        let action = match hit_test::marker_at(
            &self.markers,
            &self.viewport,
            local_pos,
            settings::map::PIN_HIT_RADIUS,
        ) {
            Some(id) => MapAction::PinTapped(id),
            None => MapAction::Pressed(self.viewport.to_coordinate(local_pos)),
        };
        tracing::debug!("[MapWidget] Down at {:?} -> {:?}", local_pos, action);

        ctx.submit_action::<MapAction>(action);
        ctx.set_handled();
    }

    fn handle_scroll_zoom(&mut self, ctx: &mut EventCtx<'_>, delta: &ScrollDelta) {
        // Negative Y = scroll up = zoom in
        let scroll_y = match delta {
            ScrollDelta::LineDelta(_x, y) => *y as f64,
            ScrollDelta::PixelDelta(pos) => pos.y / 10.0,
            ScrollDelta::PageDelta(_x, y) => *y as f64 * 3.0,
        };

        if scroll_y.abs() < 0.001 {
            return;
        }

        let factor = if scroll_y < 0.0 {
            1.0 / settings::zoom::STEP
        } else {
            settings::zoom::STEP
        };
        self.viewport.zoom_by(factor);
        tracing::debug!(
            "Scroll zoom: scroll_y={:.2}, span={:.5}x{:.5}",
            scroll_y,
            self.viewport.latitude_delta(),
            self.viewport.longitude_delta()
        );

        ctx.request_render();
    }
}

impl Widget for MapWidget {
    type Action = MapAction;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {}

    fn update(&mut self, _ctx: &mut UpdateCtx<'_>, _props: &mut PropertiesMut<'_>, _event: &Update) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        // Fill the window
        let size = bc.max();
        self.viewport.set_size(size);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        let canvas_size = ctx.size();
        self.paint_background(scene, canvas_size);
        self.paint_graticule(scene, canvas_size);
        self.paint_markers(scene);
        self.paint_draft(scene);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_down(ctx, state);
            }

            PointerEvent::Scroll(PointerScrollEvent { delta, .. }) => {
                self.handle_scroll_zoom(ctx, delta);
            }

            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        _ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &TextEvent,
    ) {
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        let selected = self
            .selected
            .and_then(|id| self.markers.iter().find(|marker| marker.id == id));
        match selected {
            Some(marker) => node.set_label(format!(
                "Map with {} pins, showing \"{}\"",
                self.markers.len(),
                marker.callout
            )),
            None => node.set_label(format!("Map with {} pins", self.markers.len())),
        }
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
