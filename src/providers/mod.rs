// ABOUTME: External capability layer: traits, wire rows, and bundled implementations
// ABOUTME: The engine reaches storage, cloud, and AI services only through this module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! External capabilities.
//!
//! Host applications implement [`RemoteStore`], [`VisionEstimator`], and
//! [`InsightGenerator`] against their transport of choice; [`LocalStore`]
//! additionally ships with an in-memory implementation.

/// Capability trait definitions and the memoized remote session
pub mod core;
/// In-memory local store implementation
pub mod memory;
/// Remote wire-format row types
pub mod rows;

pub use self::core::{
    InsightGenerator, LocalStore, RemoteSession, RemoteSnapshot, RemoteStore, VisionEstimator,
};
pub use memory::InMemoryLocalStore;
pub use rows::{MealRow, ProfileRow, WorkoutRow};
