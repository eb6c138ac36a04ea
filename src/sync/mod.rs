// ABOUTME: Sync coordinator owning the live collections and their durable mirrors
// ABOUTME: Hydrates from local+remote at startup, persists after every mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! # Sync Coordinator
//!
//! The single source of truth while the app runs. The coordinator
//! exclusively owns the profile singleton and the meals/workouts sequences;
//! the view layer mutates them only through the operations here, and the
//! local and remote stores are mirrors with no independent identity.
//!
//! ## Flow
//!
//! UI mutation -> in-memory collections update -> [`SyncCoordinator::persist`]
//! writes LocalStore (always) and spawns remote upserts (when configured).
//! On the next start [`SyncCoordinator::hydrate`] loads LocalStore and then
//! reconciles against the remote snapshot (see [`merge`]).
//!
//! ## Concurrency
//!
//! All mutation logic is synchronous on one logical thread (`&mut self`);
//! only the remote/AI calls are asynchronous. Remote writes triggered by
//! successive mutations are spawned tasks and are NOT guaranteed to land in
//! issue order; the last-arriving write wins remotely. Local writes are
//! issued strictly in mutation order.

/// Startup merge policy
pub mod merge;

use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::RemoteConfig;
use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::intelligence::nutrition::{
    self, compute_targets, local_day_start, TargetInputs,
};
use crate::models::{
    ActivityLevel, BiologicalSex, FitnessGoal, FoodItem, Intensity, MacroTotals, Meal, Profile,
    UnitSystem, Workout, WorkoutKind,
};
use crate::providers::{
    LocalStore, MealRow, ProfileRow, RemoteSession, RemoteStore, WorkoutRow,
};

/// Overall application readiness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Before `hydrate` was called
    Uninitialized,
    /// Local load and remote reconciliation in progress
    Hydrating,
    /// Hydration finished; full views may render once onboarded
    Ready,
}

/// Everything the onboarding flow collects before targets can be computed
#[derive(Debug, Clone, Copy)]
pub struct OnboardingData {
    /// Age in years
    pub age: u32,
    /// Biological sex category
    pub sex: BiologicalSex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in `unit_system` units
    pub weight: f64,
    /// Unit system for `weight`
    pub unit_system: UnitSystem,
    /// Selected activity level
    pub activity_level: Option<ActivityLevel>,
    /// Selected fitness goal
    pub goal: FitnessGoal,
}

/// Owns the three live collections and reconciles them with the stores
pub struct SyncCoordinator {
    profile: Profile,
    meals: Vec<Meal>,
    workouts: Vec<Workout>,
    phase: AppPhase,
    local: Arc<dyn LocalStore>,
    remote: Option<Arc<RemoteSession>>,
    config: RemoteConfig,
}

impl SyncCoordinator {
    /// Create a coordinator with placeholder defaults.
    ///
    /// The remote store is optional; even when supplied it stays inert
    /// unless `config.is_configured()` holds. No connection is made here.
    pub fn new(
        local: Arc<dyn LocalStore>,
        config: RemoteConfig,
        remote: Option<Arc<dyn RemoteStore>>,
    ) -> Self {
        Self {
            profile: Profile::default(),
            meals: Vec::new(),
            workouts: Vec::new(),
            phase: AppPhase::Uninitialized,
            local,
            remote: remote.map(|store| Arc::new(RemoteSession::new(store))),
            config,
        }
    }

    /// Current readiness phase
    pub const fn phase(&self) -> AppPhase {
        self.phase
    }

    /// The live profile
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The live meals sequence, newest first
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// The live workouts sequence, newest first
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Macro totals consumed today (local calendar day)
    pub fn today_totals(&self) -> MacroTotals {
        nutrition::aggregate_day(&self.meals, local_day_start(now_ms()))
    }

    /// Hydrate from the local store, then reconcile with the remote store.
    ///
    /// Invoked once at startup. Missing or unparseable local blobs fall back
    /// to defaults; every remote failure is contained and leaves local state
    /// authoritative.
    pub async fn hydrate(&mut self) {
        self.phase = AppPhase::Hydrating;
        self.load_local();

        if let Some(session) = self.active_remote() {
            let user_id = self.config.user_id.clone();
            let fetched = tokio::time::timeout(self.config.timeout, async {
                let store = session.store().await?;
                store.fetch_all(&user_id).await
            })
            .await;

            match fetched {
                Ok(Ok(snapshot)) => {
                    debug!(
                        meals = snapshot.meals.len(),
                        workouts = snapshot.workouts.len(),
                        has_profile = snapshot.profile.is_some(),
                        "applying remote snapshot"
                    );
                    merge::apply_snapshot(
                        &mut self.profile,
                        &mut self.meals,
                        &mut self.workouts,
                        snapshot,
                    );
                }
                Ok(Err(e)) => warn!(error = %e, "remote fetch failed, staying local"),
                Err(_) => warn!("remote fetch timed out, staying local"),
            }
        }

        self.phase = AppPhase::Ready;
        info!(
            onboarded = self.profile.onboarded,
            meals = self.meals.len(),
            workouts = self.workouts.len(),
            "hydration complete"
        );
    }

    /// Write all three collections to the local store and, when configured,
    /// mirror them remotely.
    ///
    /// No-op until onboarding completes. The local write is unconditional
    /// and never blocked or rolled back by remote failure; remote upserts run
    /// as a detached task with each failure contained and logged.
    pub fn persist(&self) {
        if !self.profile.onboarded {
            return;
        }

        self.write_blob(storage_keys::MEALS, &self.meals);
        self.write_blob(storage_keys::WORKOUTS, &self.workouts);
        self.write_blob(storage_keys::PROFILE, &self.profile);

        if let Some(session) = self.active_remote() {
            let user_id = &self.config.user_id;
            let profile_row = ProfileRow::from_profile(user_id, &self.profile);
            let meal_rows: Vec<MealRow> = self
                .meals
                .iter()
                .map(|m| MealRow::from_meal(user_id, m))
                .collect();
            let workout_rows: Vec<WorkoutRow> = self
                .workouts
                .iter()
                .map(|w| WorkoutRow::from_workout(user_id, w))
                .collect();
            let timeout = self.config.timeout;

            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    handle.spawn(async move {
                        push_remote(session, timeout, profile_row, meal_rows, workout_rows).await;
                    });
                }
                Err(_) => warn!("remote mirror skipped: no async runtime available"),
            }
        }
    }

    /// Log a meal, auto-named `Meal {n}` by today's meal count
    pub fn log_meal(&mut self, foods: Vec<FoodItem>) -> &Meal {
        let n = nutrition::count_day(&self.meals, local_day_start(now_ms())) + 1;
        self.log_meal_named(format!("Meal {n}"), foods)
    }

    /// Log a meal with an explicit display name.
    ///
    /// Totals derive from `foods` once, here; the saved meal is immutable.
    pub fn log_meal_named(&mut self, name: impl Into<String>, foods: Vec<FoodItem>) -> &Meal {
        let meal = Meal::new_at(now_ms(), name, foods);
        debug!(id = %meal.id, calories = meal.total_calories, "meal logged");
        self.meals.insert(0, meal);
        self.persist();
        &self.meals[0]
    }

    /// Log a workout, deriving the calorie-burn estimate from type and
    /// duration
    pub fn log_workout(
        &mut self,
        kind: WorkoutKind,
        duration_min: u32,
        intensity: Intensity,
    ) -> &Workout {
        let workout = Workout::new_at(now_ms(), kind, duration_min, intensity);
        debug!(id = %workout.id, burn = workout.estimated_burn, "workout logged");
        self.workouts.insert(0, workout);
        self.persist();
        &self.workouts[0]
    }

    /// Complete onboarding: recompute every target from the collected data
    /// and mark the profile onboarded.
    ///
    /// # Errors
    ///
    /// Fails loudly with invalid-input when a required metric is not
    /// positive; no state changes in that case.
    pub fn complete_onboarding(&mut self, data: OnboardingData) -> AppResult<&Profile> {
        let weight_kg = match data.unit_system {
            UnitSystem::Kg => data.weight,
            UnitSystem::Lb => data.weight * crate::constants::units::KG_PER_LB,
        };
        let targets = compute_targets(&TargetInputs {
            age: data.age,
            sex: data.sex,
            height_cm: data.height_cm,
            weight_kg,
            activity_level: data.activity_level,
            goal: data.goal,
        })?;

        self.profile.age = data.age;
        self.profile.sex = data.sex;
        self.profile.height = data.height_cm;
        self.profile.weight = data.weight;
        self.profile.unit_system = data.unit_system;
        self.profile.activity_level = data.activity_level;
        self.profile.goal = data.goal;
        self.profile.target_calories = targets.calories;
        self.profile.target_protein = targets.protein;
        self.profile.target_carbs = targets.carbs;
        self.profile.target_fats = targets.fats;
        self.profile.onboarded = true;

        info!(calories = targets.calories, "onboarding complete");
        self.persist();
        Ok(&self.profile)
    }

    /// Overwrite the profile (direct-edit path); targets are taken as given
    pub fn update_profile(&mut self, profile: Profile) {
        self.profile = profile;
        self.persist();
    }

    /// Consume one scan credit (clamped at zero)
    pub fn consume_scan_credit(&mut self) {
        self.profile.consume_credit();
        self.persist();
    }

    /// Clear the onboarded flag, forcing re-onboarding; other fields are
    /// retained
    pub fn reset_profile(&mut self) {
        self.profile.onboarded = false;
        info!("profile reset, onboarding required");
        self.persist();
    }

    /// The remote session, only when the configuration gate passes
    fn active_remote(&self) -> Option<Arc<RemoteSession>> {
        if self.config.is_configured() {
            self.remote.clone()
        } else {
            None
        }
    }

    fn load_local(&mut self) {
        if let Some(meals) = read_blob(&*self.local, storage_keys::MEALS) {
            self.meals = meals;
        }
        if let Some(workouts) = read_blob(&*self.local, storage_keys::WORKOUTS) {
            self.workouts = workouts;
        }
        if let Some(profile) = read_blob(&*self.local, storage_keys::PROFILE) {
            self.profile = profile;
        }
    }

    fn write_blob<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(e) = self.local.set(key, &raw) {
                    warn!(key, error = %e, "local store write failed");
                }
            }
            Err(e) => warn!(key, error = %e, "serialization failed"),
        }
    }
}

/// Parse a stored blob; absence and parse failure both mean "no data"
fn read_blob<T: DeserializeOwned>(local: &dyn LocalStore, key: &str) -> Option<T> {
    match local.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored blob unparseable, using defaults");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "local store read failed, using defaults");
            None
        }
    }
}

/// Mirror the full state remotely; each upsert is independently contained
async fn push_remote(
    session: Arc<RemoteSession>,
    timeout: std::time::Duration,
    profile_row: ProfileRow,
    meal_rows: Vec<MealRow>,
    workout_rows: Vec<WorkoutRow>,
) {
    let store = match session.store().await {
        Ok(store) => Arc::clone(store),
        Err(e) => {
            warn!(error = %e, "remote connection failed, mirror skipped");
            return;
        }
    };

    match tokio::time::timeout(timeout, store.upsert_profile(profile_row)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(error = %e, "remote profile upsert failed"),
        Err(_) => warn!("remote profile upsert timed out"),
    }
    match tokio::time::timeout(timeout, store.upsert_meals(meal_rows)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(error = %e, "remote meals upsert failed"),
        Err(_) => warn!("remote meals upsert timed out"),
    }
    match tokio::time::timeout(timeout, store.upsert_workouts(workout_rows)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(error = %e, "remote workouts upsert failed"),
        Err(_) => warn!("remote workouts upsert timed out"),
    }
}

/// Current wall-clock time in epoch milliseconds
fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
