// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Ordered, append-only pin collection.
//!
//! `PinStore` wraps an `Arc<Vec<Pin>>`, so cloning a session shares the
//! pins. Mutations go through `Arc::make_mut`, which only copies when a
//! clone still holds the previous collection. Iteration order is insertion
//! order; `remove` is the only structural change besides `push`.

use super::{MarkerSpec, Pin, PinId};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinStore {
    pins: Arc<Vec<Pin>>,
}

impl PinStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Pins in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter()
    }

    pub fn get(&self, id: PinId) -> Option<&Pin> {
        self.iter().find(|pin| pin.id() == id)
    }

    pub fn contains(&self, id: PinId) -> bool {
        self.get(id).is_some()
    }

    /// Append a pin at the end of the collection
    pub fn push(&mut self, pin: Pin) {
        Arc::make_mut(&mut self.pins).push(pin);
    }

    /// Remove the pin with `id`, returning it. Absent ids are a no-op.
    pub fn remove(&mut self, id: PinId) -> Option<Pin> {
        let index = self.pins.iter().position(|pin| pin.id() == id)?;
        Some(Arc::make_mut(&mut self.pins).remove(index))
    }

    /// Full marker set for the map surface, rebuilt from scratch
    pub fn markers(&self) -> Vec<MarkerSpec> {
        self.iter().map(MarkerSpec::from).collect()
    }
}
