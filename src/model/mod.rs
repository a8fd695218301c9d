// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Pin data model

pub mod marker;
pub mod pin;
pub mod pin_id;
pub mod store;

pub use marker::MarkerSpec;
pub use pin::{Coordinate, Pin, PinColor, UnknownColor};
pub use pin_id::PinId;
pub use store::PinStore;
