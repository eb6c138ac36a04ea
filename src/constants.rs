// ABOUTME: Centralized constants for storage keys, physiology factors, and defaults
// ABOUTME: Single source of truth for all magic numbers used by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! Centralized constants.
//!
//! Grouped by concern so call sites read as `storage_keys::MEALS` or
//! `activity_factors::SEDENTARY` instead of bare literals.

/// Keys used for the local key-value store blobs
pub mod storage_keys {
    /// Serialized meals sequence (newest first)
    pub const MEALS: &str = "fitfocus_meals";
    /// Serialized workouts sequence (newest first)
    pub const WORKOUTS: &str = "fitfocus_workouts";
    /// Serialized profile object
    pub const PROFILE: &str = "fitfocus_profile";
}

/// Environment variables read by [`crate::config::RemoteConfig`]
pub mod env_vars {
    /// Remote store endpoint URL (must be https to count as configured)
    pub const REMOTE_URL: &str = "FITFOCUS_REMOTE_URL";
    /// Remote store access key
    pub const REMOTE_KEY: &str = "FITFOCUS_REMOTE_KEY";
    /// Fixed user identifier keying all remote rows
    pub const USER_ID: &str = "FITFOCUS_USER_ID";
    /// Timeout in seconds applied to remote and AI calls
    pub const REMOTE_TIMEOUT_SECS: &str = "FITFOCUS_REMOTE_TIMEOUT_SECS";
}

/// TDEE activity multipliers (McArdle et al. activity factors)
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Exercise 1-3 days/week
    pub const LIGHTLY_ACTIVE: f64 = 1.375;
    /// Exercise 3-5 days/week
    pub const MODERATELY_ACTIVE: f64 = 1.55;
    /// Exercise 6-7 days/week
    pub const VERY_ACTIVE: f64 = 1.725;
    /// Hard daily training
    pub const ATHLETE: f64 = 1.9;
}

/// Calorie adjustments applied on top of TDEE per fitness goal
pub mod goal_adjustments {
    /// Caloric deficit for weight loss
    pub const LOSE_WEIGHT_KCAL: f64 = -500.0;
    /// Caloric surplus for muscle gain
    pub const GAIN_MUSCLE_KCAL: f64 = 300.0;
}

/// Macronutrient energy densities and target ratios
pub mod macros {
    /// Energy density of protein (kcal per gram)
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Energy density of carbohydrate (kcal per gram)
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Energy density of fat (kcal per gram)
    pub const KCAL_PER_G_FAT: f64 = 9.0;
    /// Share of the calorie budget allocated to fat
    pub const FAT_BUDGET_SHARE: f64 = 0.25;
    /// Daily protein target in grams per kilogram of body weight
    pub const PROTEIN_G_PER_KG: f64 = 2.0;
}

/// Estimated calorie burn rates per workout type (kcal per minute)
pub mod burn_rates {
    /// Cardio sessions burn at the highest rate
    pub const CARDIO_KCAL_PER_MIN: u32 = 10;
    /// Strength training
    pub const STRENGTH_KCAL_PER_MIN: u32 = 6;
    /// Everything else
    pub const OTHER_KCAL_PER_MIN: u32 = 6;
}

/// Placeholder profile values used before onboarding completes
pub mod profile_defaults {
    /// Default age in years
    pub const AGE: u32 = 25;
    /// Default height in centimeters
    pub const HEIGHT_CM: f64 = 175.0;
    /// Default weight (kilograms under the default unit system)
    pub const WEIGHT: f64 = 75.0;
    /// Placeholder daily calorie target
    pub const TARGET_CALORIES: i32 = 2200;
    /// Placeholder daily protein target (grams)
    pub const TARGET_PROTEIN: i32 = 150;
    /// Placeholder daily carbohydrate target (grams)
    pub const TARGET_CARBS: i32 = 250;
    /// Placeholder daily fat target (grams)
    pub const TARGET_FATS: i32 = 70;
    /// Free AI scan credits granted at first launch
    pub const CREDITS: u32 = 3;
}

/// Unit conversion factors
pub mod units {
    /// Kilograms per pound
    pub const KG_PER_LB: f64 = 0.453_592;
}

/// Operational limits and bounded windows
pub mod limits {
    /// Default timeout for remote and AI calls (seconds)
    pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 15;
    /// Minimum accepted timeout (seconds)
    pub const MIN_REMOTE_TIMEOUT_SECS: u64 = 1;
    /// Maximum accepted timeout (seconds)
    pub const MAX_REMOTE_TIMEOUT_SECS: u64 = 60;
    /// Access keys at or below this length are treated as placeholders
    pub const MIN_ACCESS_KEY_LEN: usize = 51;
    /// Most recent meals supplied to the insight generator
    pub const INSIGHT_MEAL_WINDOW: usize = 10;
    /// Most recent workouts supplied to the insight generator
    pub const INSIGHT_WORKOUT_WINDOW: usize = 5;
    /// Minimum logged meals before insights fire
    pub const INSIGHT_MIN_MEALS: usize = 6;
}

/// Time-related constants
pub mod time {
    /// Milliseconds in one calendar day
    pub const DAY_MS: i64 = 86_400_000;
}

/// Fixed fallback text returned when the insight generator fails
pub const INSIGHT_FALLBACK: &str = "Keep up the great work on your journey!";

/// Default user identifier when `FITFOCUS_USER_ID` is unset
pub const DEFAULT_USER_ID: &str = "user-123";
