// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for MapWidget

use super::{DraftMarker, MapAction, MapWidget};
use crate::model::{MarkerSpec, PinId};
use std::marker::PhantomData;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a map view from the current marker set.
///
/// `on_action` receives presses on empty map space and taps on markers.
pub fn map_view<State, F>(
    markers: Vec<MarkerSpec>,
    draft: Option<DraftMarker>,
    selected: Option<PinId>,
    on_action: F,
) -> MapView<State, F>
where
    F: Fn(&mut State, MapAction),
{
    MapView {
        markers,
        draft,
        selected,
        on_action,
        phantom: PhantomData,
    }
}

/// The Xilem View for MapWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct MapView<State, F> {
    markers: Vec<MarkerSpec>,
    draft: Option<DraftMarker>,
    selected: Option<PinId>,
    on_action: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for MapView<State, F> {}

impl<State: 'static, F: Fn(&mut State, MapAction) + 'static> View<State, (), ViewCtx>
    for MapView<State, F>
{
    type Element = Pod<MapWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = MapWidget::new(self.markers.clone(), self.draft, self.selected);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        // The viewport lives in the widget and survives rebuilds; only the
        // pin-derived inputs are replaced
        if self.markers == prev.markers
            && self.draft == prev.draft
            && self.selected == prev.selected
        {
            return;
        }
        tracing::debug!(
            "[MapView::rebuild] {} markers, draft={}, selected={:?}",
            self.markers.len(),
            self.draft.is_some(),
            self.selected
        );

        let mut widget = element.downcast::<MapWidget>();
        widget.widget.markers = self.markers.clone();
        widget.widget.draft = self.draft;
        widget.widget.selected = self.selected;
        widget.ctx.request_render();
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
    ) -> MessageResult<()> {
        match message.take_message::<MapAction>() {
            Some(action) => {
                let action = MapAction::clone(&action);
                (self.on_action)(app_state, action);
                // Propagate to root so overlays rebuild from the new state
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
