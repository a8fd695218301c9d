// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Top-level views

mod map;

pub use map::map_tab;
