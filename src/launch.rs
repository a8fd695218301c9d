// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Command-line launch options

use crate::editing::{Mode, SessionOptions};
use anyhow::{Result, bail};

pub const USAGE: &str = "Usage: pinmap [--single-color] [--view]";

/// Parse launch flags (program name already stripped)
pub fn parse_args<I, S>(args: I) -> Result<SessionOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = SessionOptions::default();
    for arg in args {
        match arg.as_ref() {
            "--single-color" => options.color_selection = false,
            "--view" => options.initial_mode = Mode::View,
            other => bail!("unrecognized argument '{other}'"),
        }
    }
    Ok(options)
}
