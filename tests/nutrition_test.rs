// ABOUTME: Algorithm tests for the nutrition engine
// ABOUTME: Target derivation, meal/day aggregation, and day-boundary semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus
#![allow(clippy::unwrap_used, clippy::float_cmp)]

//! Nutrition engine tests: Mifflin-St Jeor target derivation with worked
//! expectations, aggregation properties, and local day-boundary filtering.

use fitfocus_core::constants::time::DAY_MS;
use fitfocus_core::intelligence::nutrition::{
    aggregate, aggregate_day, compute_targets, local_day_start, TargetInputs,
};
use fitfocus_core::models::{ActivityLevel, BiologicalSex, FitnessGoal};

mod common;

fn inputs(
    age: u32,
    sex: BiologicalSex,
    height_cm: f64,
    weight_kg: f64,
    activity: Option<ActivityLevel>,
    goal: FitnessGoal,
) -> TargetInputs {
    TargetInputs {
        age,
        sex,
        height_cm,
        weight_kg,
        activity_level: activity,
        goal,
    }
}

// ============================================================================
// TARGET DERIVATION - worked examples
// ============================================================================

#[test]
fn targets_male_moderate_maintain() {
    common::init_test_logging();

    // 25y, 75kg, 175cm, Male, Moderately Active, Maintain:
    // basal = 10*75 + 6.25*175 - 5*25 + 5 = 1773.75
    // tdee  = 1773.75 * 1.55 = 2749.3125 -> 2749 kcal
    let t = compute_targets(&inputs(
        25,
        BiologicalSex::Male,
        175.0,
        75.0,
        Some(ActivityLevel::ModeratelyActive),
        FitnessGoal::Maintain,
    ))
    .unwrap();

    assert_eq!(t.calories, 2749);
    assert_eq!(t.protein, 150);
    assert_eq!(t.fats, 76); // round(2749 * 0.25 / 9)
    assert_eq!(t.carbs, 366); // round((2749 - 600 - 684) / 4)
}

#[test]
fn targets_female_sedentary_lose_weight() {
    common::init_test_logging();

    // 30y, 80kg, 180cm, Female, Sedentary, Lose Weight:
    // basal = 800 + 1125 - 150 - 161 = 1614
    // tdee  = 1614 * 1.2 = 1936.8; -500 = 1436.8 -> 1437 kcal
    let t = compute_targets(&inputs(
        30,
        BiologicalSex::Female,
        180.0,
        80.0,
        Some(ActivityLevel::Sedentary),
        FitnessGoal::LoseWeight,
    ))
    .unwrap();

    assert_eq!(t.calories, 1437);
    assert_eq!(t.protein, 160);
    assert_eq!(t.fats, 40);
    assert_eq!(t.carbs, 109);
}

#[test]
fn targets_gain_muscle_adds_surplus() {
    common::init_test_logging();

    let maintain = compute_targets(&inputs(
        25,
        BiologicalSex::Male,
        175.0,
        75.0,
        Some(ActivityLevel::ModeratelyActive),
        FitnessGoal::Maintain,
    ))
    .unwrap();
    let gain = compute_targets(&inputs(
        25,
        BiologicalSex::Male,
        175.0,
        75.0,
        Some(ActivityLevel::ModeratelyActive),
        FitnessGoal::GainMuscle,
    ))
    .unwrap();

    assert_eq!(gain.calories, maintain.calories + 300);
}

#[test]
fn targets_are_deterministic() {
    common::init_test_logging();

    let input = inputs(
        42,
        BiologicalSex::Female,
        168.0,
        62.5,
        Some(ActivityLevel::VeryActive),
        FitnessGoal::GainMuscle,
    );
    assert_eq!(
        compute_targets(&input).unwrap(),
        compute_targets(&input).unwrap()
    );
}

#[test]
fn unset_activity_defaults_to_moderate() {
    common::init_test_logging();

    let explicit = compute_targets(&inputs(
        25,
        BiologicalSex::Male,
        175.0,
        75.0,
        Some(ActivityLevel::ModeratelyActive),
        FitnessGoal::Maintain,
    ))
    .unwrap();
    let unset = compute_targets(&inputs(
        25,
        BiologicalSex::Male,
        175.0,
        75.0,
        None,
        FitnessGoal::Maintain,
    ))
    .unwrap();

    assert_eq!(unset, explicit);
}

#[test]
fn other_sex_uses_female_offset() {
    common::init_test_logging();

    let female = compute_targets(&inputs(
        30,
        BiologicalSex::Female,
        180.0,
        80.0,
        Some(ActivityLevel::Sedentary),
        FitnessGoal::LoseWeight,
    ))
    .unwrap();
    let other = compute_targets(&inputs(
        30,
        BiologicalSex::Other,
        180.0,
        80.0,
        Some(ActivityLevel::Sedentary),
        FitnessGoal::LoseWeight,
    ))
    .unwrap();

    assert_eq!(other, female);
}

#[test]
fn non_positive_inputs_fail_loudly() {
    common::init_test_logging();

    let base = inputs(
        25,
        BiologicalSex::Male,
        175.0,
        75.0,
        None,
        FitnessGoal::Maintain,
    );

    let zero_age = TargetInputs { age: 0, ..base };
    assert!(compute_targets(&zero_age).is_err());

    let bad_weight = TargetInputs {
        weight_kg: -1.0,
        ..base
    };
    assert!(compute_targets(&bad_weight).is_err());

    let bad_height = TargetInputs {
        height_cm: 0.0,
        ..base
    };
    assert!(compute_targets(&bad_height).is_err());
}

#[test]
fn extreme_inputs_may_yield_negative_carbs() {
    common::init_test_logging();

    // Very heavy, very short, very old, sedentary deficit: the 2 g/kg protein
    // plus 25% fat budget exceeds the calorie budget. Left unclamped.
    let t = compute_targets(&inputs(
        99,
        BiologicalSex::Female,
        120.0,
        180.0,
        Some(ActivityLevel::Sedentary),
        FitnessGoal::LoseWeight,
    ))
    .unwrap();

    assert!(t.carbs < 0, "expected negative carbs, got {}", t.carbs);
}

// ============================================================================
// AGGREGATION
// ============================================================================

#[test]
fn aggregate_sums_field_wise() {
    common::init_test_logging();

    let foods = vec![
        common::food("egg", 70.0, 6.0, 0.0, 5.0),
        common::food("rice", 200.0, 4.0, 45.0, 0.5),
    ];
    let totals = aggregate(&foods);

    assert_eq!(totals.calories, 270.0);
    assert_eq!(totals.protein, 10.0);
    assert_eq!(totals.carbs, 45.0);
    assert_eq!(totals.fats, 5.5);
}

#[test]
fn aggregate_is_order_independent() {
    common::init_test_logging();

    let a = common::food("a", 100.0, 10.0, 20.0, 3.0);
    let b = common::food("b", 250.0, 25.0, 15.0, 9.0);
    let c = common::food("c", 80.0, 2.0, 12.0, 1.0);

    let forward = aggregate(&[a.clone(), b.clone(), c.clone()]);
    let reversed = aggregate(&[c, b, a]);
    assert_eq!(forward, reversed);
}

#[test]
fn aggregate_empty_is_zero() {
    common::init_test_logging();

    let totals = aggregate(&[]);
    assert_eq!(totals.calories, 0.0);
    assert_eq!(totals.protein, 0.0);
}

// ============================================================================
// DAY-BOUNDARY FILTERING
// ============================================================================

#[test]
fn day_window_is_half_open() {
    common::init_test_logging();

    let day_start = 1_700_000_000_000_i64 - (1_700_000_000_000_i64 % DAY_MS);
    let meals = vec![
        common::meal_at(day_start + DAY_MS - 1_000, "just before midnight", 300.0),
        common::meal_at(day_start, "first thing", 200.0),
        common::meal_at(day_start - 1, "yesterday", 999.0),
        common::meal_at(day_start + DAY_MS, "tomorrow", 999.0),
    ];

    let totals = aggregate_day(&meals, day_start);
    assert_eq!(totals.calories, 500.0);
}

#[test]
fn local_day_start_truncates_to_midnight() {
    common::init_test_logging();

    let now = 1_700_000_123_456_i64;
    let start = local_day_start(now);

    assert!(start <= now);
    assert!(now - start < DAY_MS);
    // Truncation is idempotent
    assert_eq!(local_day_start(start), start);
    // The last millisecond of the day still maps to the same boundary
    assert_eq!(local_day_start(start + DAY_MS - 1), start);
}

#[test]
fn meal_totals_match_constituent_foods() {
    common::init_test_logging();

    let foods = vec![
        common::food("chicken", 165.0, 31.0, 0.0, 3.6),
        common::food("rice", 200.0, 4.0, 45.0, 0.5),
    ];
    let meal = fitfocus_core::models::Meal::new_at(1_700_000_000_000, "lunch", foods.clone());

    let expected = aggregate(&foods);
    assert_eq!(meal.totals(), expected);
    assert_eq!(meal.total_calories, 365.0);
}

#[test]
fn food_spec_rescales_from_reference() {
    common::init_test_logging();

    let catalog = fitfocus_core::catalog::common_foods();
    let egg = catalog.iter().find(|f| f.name == "Egg").unwrap();

    let three = egg.item(3.0);
    assert_eq!(three.calories, 210.0);
    assert_eq!(three.protein, 18.0);

    // Rescaling goes through the per-unit reference, so repeated quantity
    // edits cannot drift.
    let spec = three.to_spec();
    let one = spec.item(1.0);
    assert_eq!(one.calories, 70.0);
    assert_eq!(one.fats, 5.0);
}
