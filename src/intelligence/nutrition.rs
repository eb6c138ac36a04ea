// ABOUTME: Nutrition engine: daily macro target derivation and meal/day aggregation
// ABOUTME: Mifflin-St Jeor basal rate, TDEE activity scaling, and goal adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! # Nutrition Engine
//!
//! Pure computation: no I/O, no state. Derives daily calorie and macro
//! targets from body metrics and aggregates food entries into meal and day
//! totals.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! The activity multipliers are the standard McArdle et al. factors; the
//! protein target (2 g/kg), fat share (25% of calories) and goal adjustments
//! (-500 kcal loss, +300 kcal gain) are product constants and must be
//! reproduced exactly for numeric compatibility with previously computed
//! targets.

use chrono::{DateTime, Local, LocalResult, NaiveDate, TimeZone};

use crate::constants::{activity_factors, goal_adjustments, macros, time};
use crate::errors::{AppError, AppResult};
use crate::models::{
    ActivityLevel, BiologicalSex, FitnessGoal, FoodItem, MacroTargets, MacroTotals, Meal,
};

/// Inputs collected by the onboarding flow, required by [`compute_targets`]
#[derive(Debug, Clone, Copy)]
pub struct TargetInputs {
    /// Age in years (> 0)
    pub age: u32,
    /// Biological sex category
    pub sex: BiologicalSex,
    /// Height in centimeters (> 0)
    pub height_cm: f64,
    /// Body weight in kilograms (> 0)
    pub weight_kg: f64,
    /// Activity level; `None` falls back to moderately active
    pub activity_level: Option<ActivityLevel>,
    /// Fitness goal
    pub goal: FitnessGoal,
}

/// TDEE multiplier for an activity level
const fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => activity_factors::SEDENTARY,
        ActivityLevel::LightlyActive => activity_factors::LIGHTLY_ACTIVE,
        ActivityLevel::ModeratelyActive => activity_factors::MODERATELY_ACTIVE,
        ActivityLevel::VeryActive => activity_factors::VERY_ACTIVE,
        ActivityLevel::Athlete => activity_factors::ATHLETE,
    }
}

/// Derive daily calorie and macro targets from body metrics.
///
/// Algorithm:
/// 1. Basal rate (Mifflin-St Jeor): `10xweight + 6.25xheight - 5xage`,
///    `+5` for males, `-161` otherwise (Female and Other alike).
/// 2. TDEE: basal rate times the activity multiplier (unset activity level
///    uses the moderately-active factor).
/// 3. Goal adjustment: -500 kcal (lose), +300 kcal (gain), 0 (maintain).
/// 4. `calories = round(TDEE)`; `protein = round(2 g x weight_kg)`;
///    `fats = round(calories x 0.25 / 9)`; carbs take the remaining calorie
///    budget at 4 kcal/g.
///
/// The carb target can be negative for extreme low-weight/high-protein-ratio
/// inputs; it is deliberately not clamped.
///
/// Deterministic: identical inputs always yield identical targets.
///
/// # Errors
///
/// Returns [`AppError::invalid_input`] when age, weight, or height is not
/// positive. Callers must not invoke this before the onboarding flow has
/// collected all required fields.
pub fn compute_targets(inputs: &TargetInputs) -> AppResult<MacroTargets> {
    if inputs.age == 0 {
        return Err(AppError::invalid_input("age must be positive"));
    }
    if inputs.weight_kg <= 0.0 {
        return Err(AppError::invalid_input("weight must be positive"));
    }
    if inputs.height_cm <= 0.0 {
        return Err(AppError::invalid_input("height must be positive"));
    }

    let mut bmr =
        10.0 * inputs.weight_kg + 6.25 * inputs.height_cm - 5.0 * f64::from(inputs.age);
    bmr += match inputs.sex {
        BiologicalSex::Male => 5.0,
        BiologicalSex::Female | BiologicalSex::Other => -161.0,
    };

    let level = inputs
        .activity_level
        .unwrap_or(ActivityLevel::ModeratelyActive);
    let mut tdee = bmr * activity_multiplier(level);

    tdee += match inputs.goal {
        FitnessGoal::LoseWeight => goal_adjustments::LOSE_WEIGHT_KCAL,
        FitnessGoal::GainMuscle => goal_adjustments::GAIN_MUSCLE_KCAL,
        FitnessGoal::Maintain => 0.0,
    };

    let calories = tdee.round();
    let protein = (inputs.weight_kg * macros::PROTEIN_G_PER_KG).round();
    let fats = (calories * macros::FAT_BUDGET_SHARE / macros::KCAL_PER_G_FAT).round();
    let carbs = ((calories
        - protein * macros::KCAL_PER_G_PROTEIN
        - fats * macros::KCAL_PER_G_FAT)
        / macros::KCAL_PER_G_CARBS)
        .round();

    Ok(MacroTargets {
        calories: calories as i32,
        protein: protein as i32,
        carbs: carbs as i32,
        fats: fats as i32,
    })
}

/// Field-wise macro sum over a sequence of food items.
///
/// No rounding beyond what the items already carry; associative and
/// order-independent.
pub fn aggregate(foods: &[FoodItem]) -> MacroTotals {
    foods
        .iter()
        .fold(MacroTotals::default(), |acc, f| acc + f.totals())
}

/// Sum the stored totals of meals falling within the day starting at
/// `day_start_ms` (half-open 24-hour window)
pub fn aggregate_day(meals: &[Meal], day_start_ms: i64) -> MacroTotals {
    meals
        .iter()
        .filter(|m| m.timestamp >= day_start_ms && m.timestamp < day_start_ms + time::DAY_MS)
        .fold(MacroTotals::default(), |acc, m| acc + m.totals())
}

/// Count the meals falling within the day starting at `day_start_ms`
pub fn count_day(meals: &[Meal], day_start_ms: i64) -> usize {
    meals
        .iter()
        .filter(|m| m.timestamp >= day_start_ms && m.timestamp < day_start_ms + time::DAY_MS)
        .count()
}

/// Local-calendar-day boundary (epoch ms of the local midnight preceding
/// `now_ms`).
///
/// A meal logged at 23:59:59 local time belongs to the day it was logged; a
/// meal at 00:00:00 belongs to the new day.
pub fn local_day_start(now_ms: i64) -> i64 {
    let now: DateTime<Local> = match Local.timestamp_millis_opt(now_ms) {
        LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t,
        LocalResult::None => Local::now(),
    };
    day_start_of(now.date_naive()).unwrap_or(now_ms)
}

/// Earliest valid instant of the given local calendar day.
///
/// Around DST transitions the nominal midnight may be skipped or ambiguous;
/// the first representable instant of the day is used.
fn day_start_of(date: NaiveDate) -> Option<i64> {
    for hour in 0..3 {
        if let Some(naive) = date.and_hms_opt(hour, 0, 0) {
            if let Some(local) = Local.from_local_datetime(&naive).earliest() {
                return Some(local.timestamp_millis());
            }
        }
    }
    None
}
