// ABOUTME: Shared test utilities and mock capability implementations
// ABOUTME: Provides quiet logging setup and recording fakes for the external traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus
#![allow(dead_code, clippy::unwrap_used)]

//! Shared test utilities for `fitfocus-core`
//!
//! Mock implementations of the capability traits plus common fixtures, to
//! reduce duplication across integration tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;

use fitfocus_core::config::RemoteConfig;
use fitfocus_core::errors::{AppError, AppResult};
use fitfocus_core::models::{FoodItem, FoodUnit, Meal, Workout};
use fitfocus_core::providers::{
    InsightGenerator, MealRow, ProfileRow, RemoteSnapshot, RemoteStore, VisionEstimator,
    WorkoutRow,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        fitfocus_core::logging::init_with_filter("warn");
    });
}

/// A remote config that passes the configured gate, with a short timeout
pub fn configured_remote() -> RemoteConfig {
    RemoteConfig {
        endpoint_url: "https://example.supabase.co".to_owned(),
        access_key: "k".repeat(64),
        user_id: "user-123".to_owned(),
        timeout: Duration::from_secs(2),
    }
}

/// A remote config that fails the configured gate (placeholder key)
pub fn unconfigured_remote() -> RemoteConfig {
    RemoteConfig::default()
}

/// Single-item food fixture at quantity 1
pub fn food(name: &str, calories: f64, protein: f64, carbs: f64, fats: f64) -> FoodItem {
    FoodItem {
        name: name.to_owned(),
        quantity: 1.0,
        unit: FoodUnit::Portion,
        calories,
        protein,
        carbs,
        fats,
    }
}

/// Meal fixture at an explicit timestamp
pub fn meal_at(timestamp_ms: i64, name: &str, calories: f64) -> Meal {
    Meal::new_at(timestamp_ms, name, vec![food(name, calories, 10.0, 20.0, 5.0)])
}

/// Recording fake for the remote store.
///
/// Returns a configurable snapshot from `fetch_all` and records every
/// upsert; `connect` calls are counted so session idempotency is observable.
#[derive(Default)]
pub struct MockRemoteStore {
    pub snapshot: Mutex<RemoteSnapshot>,
    pub connects: AtomicUsize,
    pub fail_fetch: AtomicBool,
    pub profile_upserts: Mutex<Vec<ProfileRow>>,
    pub meal_upserts: Mutex<Vec<Vec<MealRow>>>,
    pub workout_upserts: Mutex<Vec<Vec<WorkoutRow>>>,
}

impl MockRemoteStore {
    pub fn with_snapshot(snapshot: RemoteSnapshot) -> Arc<Self> {
        let store = Self::default();
        *store.snapshot.lock().unwrap() = snapshot;
        Arc::new(store)
    }
}

#[async_trait]
impl RemoteStore for MockRemoteStore {
    async fn connect(&self) -> AppResult<()> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn fetch_all(&self, _user_id: &str) -> AppResult<RemoteSnapshot> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(AppError::external_service("remote unreachable"));
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }

    async fn upsert_profile(&self, row: ProfileRow) -> AppResult<()> {
        self.profile_upserts.lock().unwrap().push(row);
        Ok(())
    }

    async fn upsert_meals(&self, rows: Vec<MealRow>) -> AppResult<()> {
        self.meal_upserts.lock().unwrap().push(rows);
        Ok(())
    }

    async fn upsert_workouts(&self, rows: Vec<WorkoutRow>) -> AppResult<()> {
        self.workout_upserts.lock().unwrap().push(rows);
        Ok(())
    }
}

/// Scripted vision estimator outcome
pub enum VisionScript {
    /// Return these candidate items
    Items(Vec<FoodItem>),
    /// Return an empty candidate list
    Empty,
    /// Fail with an external-service error
    Fail,
}

/// Fake vision estimator driven by a [`VisionScript`]
pub struct MockVisionEstimator {
    pub script: VisionScript,
    pub calls: AtomicUsize,
}

impl MockVisionEstimator {
    pub fn new(script: VisionScript) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl VisionEstimator for MockVisionEstimator {
    async fn estimate(&self, _image: &[u8]) -> AppResult<Vec<FoodItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            VisionScript::Items(items) => Ok(items.clone()),
            VisionScript::Empty => Ok(Vec::new()),
            VisionScript::Fail => Err(AppError::external_service("vision model error")),
        }
    }
}

/// Fake insight generator recording the context window it was handed
pub struct MockInsightGenerator {
    pub response: AppResult<String>,
    pub calls: AtomicUsize,
    pub last_window: Mutex<Option<(usize, usize)>>,
}

impl MockInsightGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(text.to_owned()),
            calls: AtomicUsize::new(0),
            last_window: Mutex::new(None),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: Err(AppError::external_service("insight model error")),
            calls: AtomicUsize::new(0),
            last_window: Mutex::new(None),
        })
    }
}

#[async_trait]
impl InsightGenerator for MockInsightGenerator {
    async fn summarize(&self, meals: &[Meal], workouts: &[Workout]) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_window.lock().unwrap() = Some((meals.len(), workouts.len()));
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(e) => Err(AppError::new(e.code, e.message.clone())),
        }
    }
}
