// ABOUTME: Core domain models for the FitFocus engine
// ABOUTME: Defines Profile, FoodItem, Meal, Workout and their closed enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! # Domain Models
//!
//! The entity definitions owned by the sync coordinator and read by the
//! nutrition engine and the view layer.
//!
//! ## Design Principles
//!
//! - **Closed variants**: categories that the source data keyed by string
//!   unions (activity levels, goals, workout types, food units) are closed
//!   enums with exhaustiveness-checked handling.
//! - **Wire compatible**: serde attributes reproduce the persisted JSON shape
//!   (camelCase fields, the original display strings for enum values), so
//!   blobs written by earlier installations parse unchanged.
//! - **Append-only logs**: [`Meal`] and [`Workout`] compute their derived
//!   fields once at construction and are never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::constants::{burn_rates, profile_defaults, units};
use crate::errors::AppError;

/// Biological sex category used by the basal-rate formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiologicalSex {
    /// Male (+5 basal-rate offset)
    Male,
    /// Female (-161 basal-rate offset)
    Female,
    /// Other (treated as Female by the formula)
    Other,
}

/// Daily activity level, ordered from least to most active
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    #[serde(rename = "Lightly Active")]
    LightlyActive,
    /// Exercise 3-5 days/week
    #[serde(rename = "Moderately Active")]
    ModeratelyActive,
    /// Exercise 6-7 days/week
    #[serde(rename = "Very Active")]
    VeryActive,
    /// Hard daily training
    Athlete,
}

/// Fitness goal driving the calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessGoal {
    /// Caloric deficit
    #[serde(rename = "Lose Weight")]
    LoseWeight,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    #[serde(rename = "Gain Muscle")]
    GainMuscle,
}

/// Unit system for the stored body weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Metric kilograms
    #[serde(rename = "kg")]
    Kg,
    /// Imperial pounds
    #[serde(rename = "lb")]
    Lb,
}

/// Portion unit for a logged food item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodUnit {
    /// Discrete pieces (eggs, fruit)
    #[serde(rename = "piece(s)")]
    Piece,
    /// Slices (bread, pizza)
    #[serde(rename = "slice(s)")]
    Slice,
    /// Bowls (rice, pasta, oatmeal)
    #[serde(rename = "bowl(s)")]
    Bowl,
    /// Generic portions (meat, fish)
    #[serde(rename = "portion(s)")]
    Portion,
    /// Cups (milk, yogurt)
    #[serde(rename = "cup(s)")]
    Cup,
    /// Grams
    #[serde(rename = "g")]
    Gram,
}

impl Display for FoodUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = match self {
            Self::Piece => "piece(s)",
            Self::Slice => "slice(s)",
            Self::Bowl => "bowl(s)",
            Self::Portion => "portion(s)",
            Self::Cup => "cup(s)",
            Self::Gram => "g",
        };
        write!(f, "{label}")
    }
}

impl FromStr for FoodUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "piece(s)" => Ok(Self::Piece),
            "slice(s)" => Ok(Self::Slice),
            "bowl(s)" => Ok(Self::Bowl),
            "portion(s)" => Ok(Self::Portion),
            "cup(s)" => Ok(Self::Cup),
            "g" => Ok(Self::Gram),
            other => Err(AppError::invalid_input(format!(
                "unknown food unit: {other}"
            ))),
        }
    }
}

/// Workout type category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutKind {
    /// Resistance training
    Strength,
    /// Cardiovascular training
    Cardio,
    /// Anything else
    Other,
}

impl WorkoutKind {
    /// Estimated calorie burn rate for this workout type (kcal per minute)
    pub const fn burn_rate_kcal_per_min(self) -> u32 {
        match self {
            Self::Cardio => burn_rates::CARDIO_KCAL_PER_MIN,
            Self::Strength => burn_rates::STRENGTH_KCAL_PER_MIN,
            Self::Other => burn_rates::OTHER_KCAL_PER_MIN,
        }
    }
}

/// Workout intensity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    /// Low effort
    Low,
    /// Moderate effort
    Medium,
    /// High effort
    High,
}

/// Field-wise macro sums over one or more food items
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Total calories (kcal)
    pub calories: f64,
    /// Total protein (grams)
    pub protein: f64,
    /// Total carbohydrates (grams)
    pub carbs: f64,
    /// Total fats (grams)
    pub fats: f64,
}

impl std::ops::Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
        }
    }
}

impl std::ops::AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Daily targets produced by the nutrition engine (whole units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Daily calorie target (kcal)
    pub calories: i32,
    /// Daily protein target (grams)
    pub protein: i32,
    /// Daily carbohydrate target (grams); may be negative for extreme
    /// inputs and is deliberately not clamped
    pub carbs: i32,
    /// Daily fat target (grams)
    pub fats: i32,
}

/// Per-unit nutritional reference for a food.
///
/// Quantity changes must rescale from this unscaled reference, never from a
/// previously scaled [`FoodItem`], so repeated edits cannot compound rounding
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSpec {
    /// Display name
    pub name: String,
    /// Portion unit the reference values describe
    pub unit: FoodUnit,
    /// Macros for exactly one unit of this food
    pub per_unit: MacroTotals,
}

impl FoodSpec {
    /// Create a reference entry from per-unit macro values
    pub fn new(name: impl Into<String>, unit: FoodUnit, per_unit: MacroTotals) -> Self {
        Self {
            name: name.into(),
            unit,
            per_unit,
        }
    }

    /// Materialize a [`FoodItem`] at the given quantity, scaling every
    /// nutrient field from the per-unit reference
    pub fn item(&self, quantity: f64) -> FoodItem {
        FoodItem {
            name: self.name.clone(),
            quantity,
            unit: self.unit,
            calories: self.per_unit.calories * quantity,
            protein: self.per_unit.protein * quantity,
            carbs: self.per_unit.carbs * quantity,
            fats: self.per_unit.fats * quantity,
        }
    }
}

/// A food entry within a meal; nutrient fields are already scaled to
/// `quantity`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Display name
    pub name: String,
    /// Amount in `unit`s (positive)
    pub quantity: f64,
    /// Portion unit
    pub unit: FoodUnit,
    /// Calories at this quantity (kcal)
    pub calories: f64,
    /// Protein at this quantity (grams)
    pub protein: f64,
    /// Carbohydrates at this quantity (grams)
    pub carbs: f64,
    /// Fats at this quantity (grams)
    pub fats: f64,
}

impl FoodItem {
    /// Recover the per-unit reference for this item.
    ///
    /// Used when an externally supplied item (e.g. a vision-scan candidate)
    /// needs its quantity adjusted before confirmation.
    pub fn to_spec(&self) -> FoodSpec {
        // Quantity is positive by invariant; guard anyway so a malformed
        // external row cannot produce infinities.
        let q = if self.quantity > 0.0 { self.quantity } else { 1.0 };
        FoodSpec {
            name: self.name.clone(),
            unit: self.unit,
            per_unit: MacroTotals {
                calories: self.calories / q,
                protein: self.protein / q,
                carbs: self.carbs / q,
                fats: self.fats / q,
            },
        }
    }

    /// Macro contribution of this single item
    pub const fn totals(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
        }
    }
}

/// An immutable meal log entry.
///
/// Totals are a pure function of `foods`, computed once at creation and
/// stored; saved meals are append-only and never recomputed live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Unique, time-derived identifier (decimal epoch milliseconds)
    pub id: String,
    /// Creation timestamp (epoch milliseconds)
    pub timestamp: i64,
    /// Display name
    pub name: String,
    /// Constituent food items
    pub foods: Vec<FoodItem>,
    /// Sum of constituent calories at save time
    pub total_calories: f64,
    /// Sum of constituent protein at save time
    pub total_protein: f64,
    /// Sum of constituent carbohydrates at save time
    pub total_carbs: f64,
    /// Sum of constituent fats at save time
    pub total_fats: f64,
}

impl Meal {
    /// Create a meal at an explicit timestamp, deriving totals from `foods`
    pub fn new_at(timestamp_ms: i64, name: impl Into<String>, foods: Vec<FoodItem>) -> Self {
        let totals = foods
            .iter()
            .fold(MacroTotals::default(), |acc, f| acc + f.totals());
        Self {
            id: timestamp_ms.to_string(),
            timestamp: timestamp_ms,
            name: name.into(),
            foods,
            total_calories: totals.calories,
            total_protein: totals.protein,
            total_carbs: totals.carbs,
            total_fats: totals.fats,
        }
    }

    /// Stored totals of this meal
    pub const fn totals(&self) -> MacroTotals {
        MacroTotals {
            calories: self.total_calories,
            protein: self.total_protein,
            carbs: self.total_carbs,
            fats: self.total_fats,
        }
    }
}

/// An immutable workout log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique, time-derived identifier (decimal epoch milliseconds)
    pub id: String,
    /// Creation timestamp (epoch milliseconds)
    pub timestamp: i64,
    /// Workout type category
    #[serde(rename = "type")]
    pub kind: WorkoutKind,
    /// Duration in minutes (positive)
    pub duration: u32,
    /// Intensity category
    pub intensity: Intensity,
    /// Estimated calorie burn: `duration x rate(kind)`
    pub estimated_burn: u32,
}

impl Workout {
    /// Create a workout at an explicit timestamp, deriving the burn estimate
    pub fn new_at(timestamp_ms: i64, kind: WorkoutKind, duration: u32, intensity: Intensity) -> Self {
        Self {
            id: timestamp_ms.to_string(),
            timestamp: timestamp_ms,
            kind,
            duration,
            intensity,
            estimated_burn: duration * kind.burn_rate_kcal_per_min(),
        }
    }
}

/// The per-installation user profile.
///
/// While `onboarded` is false the target fields are placeholders and the view
/// layer must force completion of onboarding before any other operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Whether the onboarding flow has completed
    pub onboarded: bool,
    /// Age in years
    pub age: u32,
    /// Biological sex category
    #[serde(rename = "gender")]
    pub sex: BiologicalSex,
    /// Height in centimeters
    pub height: f64,
    /// Body weight, in the unit given by `unit_system`
    pub weight: f64,
    /// Daily activity level; `None` means not yet selected
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Fitness goal
    pub goal: FitnessGoal,
    /// Daily calorie target (kcal)
    pub target_calories: i32,
    /// Daily protein target (grams)
    pub target_protein: i32,
    /// Daily carbohydrate target (grams)
    pub target_carbs: i32,
    /// Daily fat target (grams)
    pub target_fats: i32,
    /// Premium entitlement flag
    pub is_premium: bool,
    /// Remaining free AI-scan credits; never goes negative
    pub credits: u32,
    /// Unit system for `weight`
    pub unit_system: UnitSystem,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            onboarded: false,
            age: profile_defaults::AGE,
            sex: BiologicalSex::Male,
            height: profile_defaults::HEIGHT_CM,
            weight: profile_defaults::WEIGHT,
            activity_level: Some(ActivityLevel::ModeratelyActive),
            goal: FitnessGoal::Maintain,
            target_calories: profile_defaults::TARGET_CALORIES,
            target_protein: profile_defaults::TARGET_PROTEIN,
            target_carbs: profile_defaults::TARGET_CARBS,
            target_fats: profile_defaults::TARGET_FATS,
            is_premium: false,
            credits: profile_defaults::CREDITS,
            unit_system: UnitSystem::Kg,
        }
    }
}

impl Profile {
    /// Body weight in kilograms regardless of the stored unit system
    pub fn weight_kg(&self) -> f64 {
        match self.unit_system {
            UnitSystem::Kg => self.weight,
            UnitSystem::Lb => self.weight * units::KG_PER_LB,
        }
    }

    /// Consume one scan credit, clamped at zero
    pub fn consume_credit(&mut self) {
        self.credits = self.credits.saturating_sub(1);
    }

    /// Whether a photo-scan attempt may start (premium, or credits remain)
    pub const fn can_scan(&self) -> bool {
        self.is_premium || self.credits > 0
    }
}
