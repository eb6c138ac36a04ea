// ABOUTME: Derived-intelligence layer: nutrition computation and AI insights
// ABOUTME: Pure target/aggregation math plus the session insight advisor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! Intelligence modules: everything derived from the raw logs.

/// Session-scoped insight advisory
pub mod insights;
/// Daily macro targets and meal/day aggregation
pub mod nutrition;

pub use insights::InsightAdvisor;
pub use nutrition::{
    aggregate, aggregate_day, compute_targets, local_day_start, TargetInputs,
};
