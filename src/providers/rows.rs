// ABOUTME: Remote wire-format row types mirroring the domain models
// ABOUTME: snake_case columns, RFC 3339 timestamps, optional profile fields for field-merge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! # Remote Row Types
//!
//! The remote store speaks snake_case columns with ISO-8601 timestamp
//! strings. Profile row fields are all optional: during hydration each
//! present field overwrites the corresponding local field while absent
//! fields retain local values (see [`crate::sync::merge`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{
    ActivityLevel, BiologicalSex, FitnessGoal, FoodItem, Intensity, Meal, Profile, UnitSystem,
    Workout, WorkoutKind,
};

/// Epoch milliseconds rendered as an RFC 3339 UTC string
fn ms_to_rfc3339(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .unwrap_or_else(Utc::now)
        .to_rfc3339()
}

/// RFC 3339 string parsed back to epoch milliseconds
fn rfc3339_to_ms(s: &str) -> AppResult<i64> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.timestamp_millis())
        .map_err(|e| {
            AppError::serialization(format!("invalid remote timestamp {s:?}")).with_source(e)
        })
}

/// The `profiles` table row (single row per user id).
///
/// Every column except `id` is optional to support field-by-field merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    /// Fixed user identifier
    pub id: String,
    /// Onboarding-complete flag
    pub onboarded: Option<bool>,
    /// Age in years
    pub age: Option<u32>,
    /// Biological sex category
    pub gender: Option<BiologicalSex>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Body weight in the row's unit system
    pub weight: Option<f64>,
    /// Activity level
    pub activity_level: Option<ActivityLevel>,
    /// Fitness goal
    pub goal: Option<FitnessGoal>,
    /// Daily calorie target
    pub target_calories: Option<i32>,
    /// Daily protein target (grams)
    pub target_protein: Option<i32>,
    /// Daily carbohydrate target (grams)
    pub target_carbs: Option<i32>,
    /// Daily fat target (grams)
    pub target_fats: Option<i32>,
    /// Premium entitlement flag
    pub is_premium: Option<bool>,
    /// Remaining scan credits
    pub credits: Option<u32>,
    /// Unit system for `weight`
    pub unit_system: Option<UnitSystem>,
    /// Last writer timestamp (RFC 3339)
    pub updated_at: Option<String>,
}

impl ProfileRow {
    /// Full row snapshot of a local profile, stamped now
    pub fn from_profile(user_id: &str, profile: &Profile) -> Self {
        Self {
            id: user_id.to_owned(),
            onboarded: Some(profile.onboarded),
            age: Some(profile.age),
            gender: Some(profile.sex),
            height: Some(profile.height),
            weight: Some(profile.weight),
            activity_level: profile.activity_level,
            goal: Some(profile.goal),
            target_calories: Some(profile.target_calories),
            target_protein: Some(profile.target_protein),
            target_carbs: Some(profile.target_carbs),
            target_fats: Some(profile.target_fats),
            is_premium: Some(profile.is_premium),
            credits: Some(profile.credits),
            unit_system: Some(profile.unit_system),
            updated_at: Some(Utc::now().to_rfc3339()),
        }
    }
}

/// The `meals` table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRow {
    /// Meal identifier
    pub id: String,
    /// Owning user identifier
    pub user_id: String,
    /// Creation time (RFC 3339)
    pub timestamp: String,
    /// Display name
    pub name: String,
    /// Constituent food items (nested structured value)
    pub foods: Vec<FoodItem>,
    /// Stored calorie total
    pub total_calories: f64,
    /// Stored protein total
    pub total_protein: f64,
    /// Stored carbohydrate total
    pub total_carbs: f64,
    /// Stored fat total
    pub total_fats: f64,
}

impl MealRow {
    /// Wire row for a local meal
    pub fn from_meal(user_id: &str, meal: &Meal) -> Self {
        Self {
            id: meal.id.clone(),
            user_id: user_id.to_owned(),
            timestamp: ms_to_rfc3339(meal.timestamp),
            name: meal.name.clone(),
            foods: meal.foods.clone(),
            total_calories: meal.total_calories,
            total_protein: meal.total_protein,
            total_carbs: meal.total_carbs,
            total_fats: meal.total_fats,
        }
    }

    /// Convert back to the domain model
    ///
    /// # Errors
    ///
    /// Fails when the timestamp is not valid RFC 3339; hydration skips such
    /// rows rather than aborting the merge.
    pub fn into_meal(self) -> AppResult<Meal> {
        Ok(Meal {
            timestamp: rfc3339_to_ms(&self.timestamp)?,
            id: self.id,
            name: self.name,
            foods: self.foods,
            total_calories: self.total_calories,
            total_protein: self.total_protein,
            total_carbs: self.total_carbs,
            total_fats: self.total_fats,
        })
    }
}

/// The `workouts` table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRow {
    /// Workout identifier
    pub id: String,
    /// Owning user identifier
    pub user_id: String,
    /// Creation time (RFC 3339)
    pub timestamp: String,
    /// Workout type category
    #[serde(rename = "type")]
    pub kind: WorkoutKind,
    /// Duration in minutes
    pub duration: u32,
    /// Intensity category
    pub intensity: Intensity,
    /// Estimated calorie burn
    pub estimated_burn: u32,
}

impl WorkoutRow {
    /// Wire row for a local workout
    pub fn from_workout(user_id: &str, workout: &Workout) -> Self {
        Self {
            id: workout.id.clone(),
            user_id: user_id.to_owned(),
            timestamp: ms_to_rfc3339(workout.timestamp),
            kind: workout.kind,
            duration: workout.duration,
            intensity: workout.intensity,
            estimated_burn: workout.estimated_burn,
        }
    }

    /// Convert back to the domain model
    ///
    /// # Errors
    ///
    /// Fails when the timestamp is not valid RFC 3339.
    pub fn into_workout(self) -> AppResult<Workout> {
        Ok(Workout {
            timestamp: rfc3339_to_ms(&self.timestamp)?,
            id: self.id,
            kind: self.kind,
            duration: self.duration,
            intensity: self.intensity,
            estimated_burn: self.estimated_burn,
        })
    }
}
