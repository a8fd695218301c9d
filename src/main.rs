// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Pinmap: drop, review and remove annotated pins on a map

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    pinmap::run(EventLoop::with_user_event())
}
