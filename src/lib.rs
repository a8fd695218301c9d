// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Pinmap: drop, review and remove annotated pins on a map, built with Xilem

use tracing_subscriber::EnvFilter;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

mod components;
mod data;
mod editing;
mod launch;
mod model;
mod settings;
mod theme;
mod views;

use data::AppState;
use editing::SessionOptions;
use views::map_tab;

/// Default log filter when `RUST_LOG` is unset.
///
/// Filters out noisy wgpu/naga shader compilation logs.
const DEFAULT_LOG_FILTER: &str = "pinmap=info,wgpu=warn,naga=warn,wgpu_core=warn,wgpu_hal=warn";

/// Entry point for the Pinmap application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let options = handle_command_line_args();
    tracing::info!(
        "Starting in {:?} mode, color selection {}",
        options.initial_mode,
        if options.color_selection { "on" } else { "off" }
    );

    let initial_state = AppState::new(options);
    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Read launch flags, falling back to the defaults on bad input
fn handle_command_line_args() -> SessionOptions {
    match launch::parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            tracing::error!("{err:#}");
            tracing::error!("{}", launch::USAGE);
            SessionOptions::default()
        }
    }
}

/// Build the single-window UI
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let content = map_tab(state);

    let window_size = LogicalSize::new(1280.0, 800.0);
    let window_view = window(state.main_window_id, "Pinmap", content);
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
