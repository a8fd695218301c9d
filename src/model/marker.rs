// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Render descriptions handed to the map surface.

use super::{Coordinate, Pin, PinColor, PinId};

/// Everything the map surface needs to draw one marker and its callout
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: PinId,
    pub coordinate: Coordinate,
    pub color: PinColor,
    pub callout: String,
}

impl From<&Pin> for MarkerSpec {
    fn from(pin: &Pin) -> Self {
        Self {
            id: pin.id(),
            coordinate: pin.coordinate(),
            color: pin.color(),
            callout: pin.comment().to_string(),
        }
    }
}
