// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for committed pins.
//!
//! Each `PinId` is a monotonically increasing `u64` drawn from a global
//! atomic counter. Commits that land within the same clock tick still get
//! distinct ids, and ids are never reused within a session, so a callout
//! that outlives its pin can only ever miss, never hit a different pin.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a committed pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinId(u64);

static PIN_COUNTER: AtomicU64 = AtomicU64::new(1);

impl PinId {
    /// Create a new unique pin ID
    pub fn next() -> Self {
        Self(PIN_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pin#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_in_a_tight_loop() {
        let ids: HashSet<PinId> = (0..1000).map(|_| PinId::next()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn ids_increase() {
        let a = PinId::next();
        let b = PinId::next();
        assert!(b > a);
    }

    #[test]
    fn display_includes_counter() {
        let id = PinId::next();
        assert_eq!(id.to_string(), format!("pin#{}", id.0));
    }
}
