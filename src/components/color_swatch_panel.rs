// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Pin color swatcher for the draft editor
//!
//! Displays a header and one row of swatches, one per palette entry.
//! Clicking a swatch selects that color for the open draft.

use kurbo::{Affine, Circle, Size};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, BrushIndex, ChildrenIds, EventCtx, LayoutCtx, PaintCtx,
    PointerButton, PointerButtonEvent, PointerEvent, PropertiesMut, PropertiesRef, RegisterCtx,
    StyleProperty, TextEvent, Update, UpdateCtx, Widget, render_text,
};
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color, Fill};
use parley::{FontContext, FontStack, LayoutContext};
use std::marker::PhantomData;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

use crate::model::PinColor;
use crate::settings;
use crate::theme;

// ============================================================
// Layout constants
// ============================================================

/// Vertical padding above the header label
const HEADER_TOP: f64 = 2.0;
/// Gap between header and the swatch row
const HEADER_GAP: f64 = 10.0;
/// Font size for the header label
const HEADER_FONT_SIZE: f64 = 14.0;
/// Swatch diameter
const SWATCH_SIZE: f64 = 32.0;
/// Gap between swatches
const SWATCH_GAP: f64 = 12.0;
/// Total panel width
pub const SWATCH_PANEL_WIDTH: f64 =
    PinColor::ALL.len() as f64 * (SWATCH_SIZE + SWATCH_GAP) - SWATCH_GAP + 8.0;
/// Total panel height
const PANEL_HEIGHT: f64 = HEADER_TOP + HEADER_FONT_SIZE + HEADER_GAP + SWATCH_SIZE + 8.0;

// ============================================================
// Action
// ============================================================

/// Action emitted when a swatch is clicked
#[derive(Debug, Clone, Copy)]
pub struct PinColorSelected(pub PinColor);

// ============================================================
// Custom Masonry Widget
// ============================================================

/// A custom widget that renders one row of color swatches
pub struct ColorSwatchWidget {
    selected_color: PinColor,
    hover_index: Option<usize>,
}

impl ColorSwatchWidget {
    pub fn new(selected_color: PinColor) -> Self {
        Self {
            selected_color,
            hover_index: None,
        }
    }

    /// Center point for the swatch at `index`
    fn swatch_center(&self, index: usize) -> (f64, f64) {
        let radius = SWATCH_SIZE / 2.0;
        let cx = 4.0 + radius + index as f64 * (SWATCH_SIZE + SWATCH_GAP);
        let cy = HEADER_TOP + HEADER_FONT_SIZE + HEADER_GAP + radius;
        (cx, cy)
    }

    /// Hit-test: which swatch is at the given position?
    fn swatch_at_pos(&self, x: f64, y: f64) -> Option<usize> {
        let radius = SWATCH_SIZE / 2.0;
        (0..PinColor::ALL.len()).find(|&i| {
            let (cx, cy) = self.swatch_center(i);
            let dx = x - cx;
            let dy = y - cy;
            dx * dx + dy * dy <= radius * radius
        })
    }
}

impl Widget for ColorSwatchWidget {
    type Action = PinColorSelected;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {}

    fn update(&mut self, _ctx: &mut UpdateCtx<'_>, _props: &mut PropertiesMut<'_>, _event: &Update) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        bc.constrain(Size::new(SWATCH_PANEL_WIDTH, PANEL_HEIGHT))
    }

    fn paint(&mut self, _ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        // --- Header ---
        let mut font_cx = FontContext::default();
        let mut layout_cx = LayoutContext::new();

        let header_text = settings::editor::COLOR_PROMPT;
        let mut builder = layout_cx.ranged_builder(&mut font_cx, header_text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(HEADER_FONT_SIZE as f32));
        builder.push_default(StyleProperty::FontStack(FontStack::Single(
            parley::FontFamily::Generic(parley::GenericFamily::SansSerif),
        )));
        builder.push_default(StyleProperty::Brush(BrushIndex(0)));
        let mut layout = builder.build(header_text);
        layout.break_all_lines(None);

        let header_brushes = vec![Brush::Solid(theme::text::PRIMARY)];
        render_text(
            scene,
            Affine::translate((0.0, HEADER_TOP)),
            &layout,
            &header_brushes,
            false,
        );

        // --- Swatches ---
        let radius = SWATCH_SIZE / 2.0;

        for (i, color) in PinColor::ALL.iter().copied().enumerate() {
            let (cx, cy) = self.swatch_center(i);
            let circle = Circle::new((cx, cy), radius);

            scene.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                &Brush::Solid(theme::pin::color(color)),
                None,
                &circle,
            );

            // Hover ring
            if self.hover_index == Some(i) {
                scene.stroke(
                    &kurbo::Stroke::new(1.5),
                    Affine::IDENTITY,
                    &Brush::Solid(theme::text::SECONDARY),
                    None,
                    &circle,
                );
            }

            // Selected ring
            if self.selected_color.index() == i {
                let outer = Circle::new((cx, cy), radius + 2.0);
                scene.stroke(
                    &kurbo::Stroke::new(2.0),
                    Affine::IDENTITY,
                    &Brush::Solid(Color::WHITE),
                    None,
                    &outer,
                );
            }
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::List
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!("Pin color: {}", self.selected_color));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
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
                let pos = ctx.local_position(state.position);
                if let Some(index) = self.swatch_at_pos(pos.x, pos.y)
                    && let Ok(color) = PinColor::from_index(index)
                {
                    ctx.submit_action::<PinColorSelected>(PinColorSelected(color));
                }
                ctx.set_handled();
            }
            PointerEvent::Move(pointer_move) => {
                let pos = ctx.local_position(pointer_move.current.position);
                let new_hover = self.swatch_at_pos(pos.x, pos.y);
                if new_hover != self.hover_index {
                    self.hover_index = new_hover;
                    ctx.request_render();
                }
            }
            PointerEvent::Leave(_) => {
                if self.hover_index.is_some() {
                    self.hover_index = None;
                    ctx.request_render();
                }
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
}

// ============================================================
// Xilem View wrapper
// ============================================================

type PinColorCallback<State> = Box<dyn Fn(&mut State, PinColor) + Send + Sync>;

pub fn color_swatch_panel<State, Action>(
    current_color: PinColor,
    callback: impl Fn(&mut State, PinColor) + Send + Sync + 'static,
) -> ColorSwatchView<State, Action>
where
    State: 'static,
    Action: 'static,
{
    ColorSwatchView {
        current_color,
        callback: Box::new(callback),
        phantom: PhantomData,
    }
}

#[must_use = "View values do nothing unless provided to Xilem."]
pub struct ColorSwatchView<State, Action = ()> {
    current_color: PinColor,
    callback: PinColorCallback<State>,
    phantom: PhantomData<fn() -> (State, Action)>,
}

impl<State, Action> ViewMarker for ColorSwatchView<State, Action> {}

impl<State: 'static, Action: 'static + Default> View<State, Action, ViewCtx>
    for ColorSwatchView<State, Action>
{
    type Element = Pod<ColorSwatchWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = ColorSwatchWidget::new(self.current_color);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        _prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        if element.widget.selected_color != self.current_color {
            element.widget.selected_color = self.current_color;
            element.ctx.request_render();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<Action> {
        match message.take_message::<PinColorSelected>() {
            Some(action) => {
                (self.callback)(app_state, action.0);
                MessageResult::Action(Action::default())
            }
            None => MessageResult::Stale,
        }
    }
}
