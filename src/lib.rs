// ABOUTME: FitFocus core library: offline-first diet and fitness tracking engine
// ABOUTME: Nutrition targets, meal/workout logs, local persistence, optional cloud mirror
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! # FitFocus Core
//!
//! The state and computation engine behind a personal diet/fitness tracker:
//! users log meals and workouts, the engine derives daily macro targets from
//! body metrics, and an optional cloud-sync layer mirrors local state to a
//! remote store.
//!
//! ## Architecture
//!
//! - [`intelligence::nutrition`] — pure computation: Mifflin-St Jeor based
//!   target derivation and meal/day macro aggregation. No I/O, no state.
//! - [`models`] — the entity definitions (Profile, Meal, FoodItem, Workout)
//!   and their invariants.
//! - [`sync`] — the coordinator owning the live collections, reconciling
//!   them against the local and remote stores and persisting every mutation.
//! - [`providers`] — the capability traits the host plugs implementations
//!   into: [`providers::LocalStore`], [`providers::RemoteStore`],
//!   [`providers::VisionEstimator`], [`providers::InsightGenerator`].
//! - [`scan`] / [`intelligence::insights`] — coordination logic around the
//!   AI capabilities (credit gating, state machines, session caching).
//!
//! ## Offline-first
//!
//! Local state is always authoritative while the app runs. Remote sync is
//! gated behind [`config::RemoteConfig::is_configured`] and every remote or
//! AI failure is contained at its call site: the engine keeps functioning
//! fully offline and nothing here is fatal.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fitfocus_core::config::RemoteConfig;
//! use fitfocus_core::models::{BiologicalSex, FitnessGoal, UnitSystem};
//! use fitfocus_core::providers::InMemoryLocalStore;
//! use fitfocus_core::sync::{OnboardingData, SyncCoordinator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), fitfocus_core::errors::AppError> {
//! let local = Arc::new(InMemoryLocalStore::new());
//! let mut app = SyncCoordinator::new(local, RemoteConfig::from_env(), None);
//! app.hydrate().await;
//!
//! app.complete_onboarding(OnboardingData {
//!     age: 25,
//!     sex: BiologicalSex::Male,
//!     height_cm: 175.0,
//!     weight: 75.0,
//!     unit_system: UnitSystem::Kg,
//!     activity_level: None,
//!     goal: FitnessGoal::Maintain,
//! })?;
//! # Ok(())
//! # }
//! ```

/// Built-in common-food catalog
pub mod catalog;
/// Environment-driven remote sync configuration
pub mod config;
/// Centralized constants
pub mod constants;
/// Unified error handling
pub mod errors;
/// Nutrition engine and insight advisory
pub mod intelligence;
/// Logging setup
pub mod logging;
/// Domain models
pub mod models;
/// External capability traits and bundled implementations
pub mod providers;
/// AI photo-scan flow coordination
pub mod scan;
/// Sync coordinator and merge policy
pub mod sync;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    ActivityLevel, BiologicalSex, FitnessGoal, FoodItem, FoodSpec, FoodUnit, Intensity,
    MacroTargets, MacroTotals, Meal, Profile, UnitSystem, Workout, WorkoutKind,
};
pub use scan::{ScanFlow, ScanState};
pub use sync::{AppPhase, OnboardingData, SyncCoordinator};
