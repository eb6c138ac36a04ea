// ABOUTME: Logging setup for structured output via tracing
// ABOUTME: Env-driven level selection with a quiet default for library embedders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! Logging configuration.
//!
//! The crate logs through `tracing` at every I/O boundary and state
//! transition; embedders that already install a subscriber can skip this
//! module entirely.

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info";

/// Install a fmt subscriber honoring `RUST_LOG` (default `info`).
///
/// Idempotent: a subscriber installed elsewhere wins silently.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a fmt subscriber with an explicit fallback filter directive
pub fn init_with_filter(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
