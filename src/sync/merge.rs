// ABOUTME: Startup reconciliation between local state and a remote snapshot
// ABOUTME: Remote-wins-if-non-empty for collections, field-by-field for the profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! # Merge Policy
//!
//! Collections and the profile singleton reconcile differently, and the
//! asymmetry is deliberate:
//!
//! - **Meals/workouts**: a non-empty remote collection wholesale-replaces the
//!   local one (never merged item-by-item). An empty remote collection leaves
//!   local state untouched.
//! - **Profile**: merged field-by-field; each remote field that is present
//!   overwrites the local field, absent fields retain local values. The
//!   profile is a singleton more likely to be edited from an external
//!   channel, so partial remote rows must not clobber local fields.
//!
//! Rows that fail to parse are skipped with a warning; they count as absent,
//! never as corruption.

use tracing::warn;

use crate::models::{Meal, Profile, Workout};
use crate::providers::{ProfileRow, RemoteSnapshot};

/// Apply a remote snapshot onto the live collections
pub fn apply_snapshot(
    profile: &mut Profile,
    meals: &mut Vec<Meal>,
    workouts: &mut Vec<Workout>,
    snapshot: RemoteSnapshot,
) {
    let remote_meals: Vec<Meal> = snapshot
        .meals
        .into_iter()
        .filter_map(|row| match row.into_meal() {
            Ok(meal) => Some(meal),
            Err(e) => {
                warn!(error = %e, "skipping unparseable remote meal row");
                None
            }
        })
        .collect();
    if !remote_meals.is_empty() {
        *meals = remote_meals;
    }

    let remote_workouts: Vec<Workout> = snapshot
        .workouts
        .into_iter()
        .filter_map(|row| match row.into_workout() {
            Ok(workout) => Some(workout),
            Err(e) => {
                warn!(error = %e, "skipping unparseable remote workout row");
                None
            }
        })
        .collect();
    if !remote_workouts.is_empty() {
        *workouts = remote_workouts;
    }

    if let Some(row) = snapshot.profile {
        merge_profile(profile, row);
    }
}

/// Overwrite local profile fields with every field present remotely
pub fn merge_profile(profile: &mut Profile, row: ProfileRow) {
    if let Some(v) = row.onboarded {
        profile.onboarded = v;
    }
    if let Some(v) = row.age {
        profile.age = v;
    }
    if let Some(v) = row.gender {
        profile.sex = v;
    }
    if let Some(v) = row.height {
        profile.height = v;
    }
    if let Some(v) = row.weight {
        profile.weight = v;
    }
    if row.activity_level.is_some() {
        profile.activity_level = row.activity_level;
    }
    if let Some(v) = row.goal {
        profile.goal = v;
    }
    if let Some(v) = row.target_calories {
        profile.target_calories = v;
    }
    if let Some(v) = row.target_protein {
        profile.target_protein = v;
    }
    if let Some(v) = row.target_carbs {
        profile.target_carbs = v;
    }
    if let Some(v) = row.target_fats {
        profile.target_fats = v;
    }
    if let Some(v) = row.is_premium {
        profile.is_premium = v;
    }
    if let Some(v) = row.credits {
        profile.credits = v;
    }
    if let Some(v) = row.unit_system {
        profile.unit_system = v;
    }
}
