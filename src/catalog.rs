// ABOUTME: Built-in catalog of common foods with per-unit macro references
// ABOUTME: Seeds the manual meal-logging form with one-tap entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! Built-in food catalog.
//!
//! Per-unit references for everyday foods. The view layer offers these as
//! quick-add entries; quantity adjustments go through [`FoodSpec::item`] so
//! nutrient values always rescale from the reference.

use crate::models::{FoodSpec, FoodUnit, MacroTotals};

/// The built-in quick-add food references
pub fn common_foods() -> Vec<FoodSpec> {
    [
        ("Egg", FoodUnit::Piece, 70.0, 6.0, 0.0, 5.0),
        ("Chicken Breast", FoodUnit::Portion, 165.0, 31.0, 0.0, 3.6),
        ("White Rice", FoodUnit::Bowl, 200.0, 4.0, 45.0, 0.5),
        ("Bread", FoodUnit::Slice, 80.0, 3.0, 15.0, 1.0),
        ("Milk", FoodUnit::Cup, 120.0, 8.0, 12.0, 5.0),
        ("Banana", FoodUnit::Piece, 105.0, 1.0, 27.0, 0.3),
        ("Pasta", FoodUnit::Bowl, 220.0, 8.0, 43.0, 1.3),
        ("Greek Yogurt", FoodUnit::Cup, 100.0, 10.0, 4.0, 5.0),
        ("Oatmeal", FoodUnit::Bowl, 150.0, 5.0, 27.0, 2.5),
        ("Beef Portion", FoodUnit::Portion, 250.0, 26.0, 0.0, 15.0),
    ]
    .into_iter()
    .map(|(name, unit, calories, protein, carbs, fats)| {
        FoodSpec::new(
            name,
            unit,
            MacroTotals {
                calories,
                protein,
                carbs,
                fats,
            },
        )
    })
    .collect()
}
