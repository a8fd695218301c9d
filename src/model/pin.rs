// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Committed pins, their coordinates, and the pin color palette.

use super::PinId;
use chrono::{DateTime, Local};
use std::fmt;
use std::str::FromStr;

/// A geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}

// ============================================================
// Palette
// ============================================================

/// The fixed, ordered palette a pin can be tinted with.
///
/// `Red` is first and is the color every new draft starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PinColor {
    #[default]
    Red,
    Blue,
    Green,
    Orange,
    Purple,
}

/// Rejected palette lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a pin color")]
pub struct UnknownColor(pub String);

impl PinColor {
    /// All palette entries in display order
    pub const ALL: [PinColor; 5] = [
        PinColor::Red,
        PinColor::Blue,
        PinColor::Green,
        PinColor::Orange,
        PinColor::Purple,
    ];

    /// Lowercase name, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            PinColor::Red => "red",
            PinColor::Blue => "blue",
            PinColor::Green => "green",
            PinColor::Orange => "orange",
            PinColor::Purple => "purple",
        }
    }

    /// Position in `ALL`
    pub fn index(self) -> usize {
        match self {
            PinColor::Red => 0,
            PinColor::Blue => 1,
            PinColor::Green => 2,
            PinColor::Orange => 3,
            PinColor::Purple => 4,
        }
    }

    /// Look up a palette entry by position (swatch index)
    pub fn from_index(index: usize) -> Result<Self, UnknownColor> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| UnknownColor(format!("#{index}")))
    }
}

impl FromStr for PinColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.name() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

impl fmt::Display for PinColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================
// Pin
// ============================================================

/// A committed annotation. Immutable; the only change a pin ever sees is
/// removal from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    id: PinId,
    coordinate: Coordinate,
    comment: String,
    color: PinColor,
    created_at: DateTime<Local>,
}

impl Pin {
    /// Assemble a pin with a fresh identity
    pub fn new(coordinate: Coordinate, comment: String, color: PinColor) -> Self {
        Self {
            id: PinId::next(),
            coordinate,
            comment,
            color,
            created_at: Local::now(),
        }
    }

    pub fn id(&self) -> PinId {
        self.id
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn color(&self) -> PinColor {
        self.color
    }

    /// Wall-clock time of the commit (display only)
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}
