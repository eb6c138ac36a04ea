// ABOUTME: Capability traits for the engine's external collaborators
// ABOUTME: LocalStore, RemoteStore, VisionEstimator, InsightGenerator trait definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! # Capability Traits
//!
//! The engine touches the outside world only through these traits. They are
//! the seams where host applications plug in their storage backend, cloud
//! store, and AI services; everything behind them is specified at the
//! interface boundary only.
//!
//! ## Shared Contract
//!
//! - All fallible operations return [`AppResult`] so call sites contain
//!   failures uniformly.
//! - Remote and AI implementations may be slow or fail; the coordinator
//!   bounds every call with the configured timeout and treats expiry as an
//!   error outcome, never a hang.
//! - An empty result and an error from [`VisionEstimator::estimate`] are
//!   both "no usable result" to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::errors::AppResult;
use crate::models::{FoodItem, Meal, Workout};
use crate::providers::rows::{MealRow, ProfileRow, WorkoutRow};

/// Persistent local key-value storage for string blobs.
///
/// No transactional guarantee across keys.
pub trait LocalStore: Send + Sync {
    /// Read the blob stored under `key`, if any
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous blob
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Everything the remote store holds for one user
#[derive(Debug, Clone, Default)]
pub struct RemoteSnapshot {
    /// The profile row, if one exists remotely
    pub profile: Option<ProfileRow>,
    /// Meal rows, newest first
    pub meals: Vec<MealRow>,
    /// Workout rows, newest first
    pub workouts: Vec<WorkoutRow>,
}

/// Abstract remote backing store (upsert/query capability).
///
/// Implementations own transport and query mechanics; the engine only
/// issues read-all and whole-collection upserts.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Initialize the connection. Implementations need not be idempotent;
    /// the engine calls this exactly once through [`RemoteSession`].
    async fn connect(&self) -> AppResult<()>;

    /// Fetch the profile, meals, and workouts for `user_id` (meals and
    /// workouts ordered by timestamp descending)
    async fn fetch_all(&self, user_id: &str) -> AppResult<RemoteSnapshot>;

    /// Upsert the single profile row
    async fn upsert_profile(&self, row: ProfileRow) -> AppResult<()>;

    /// Upsert the full meals collection
    async fn upsert_meals(&self, rows: Vec<MealRow>) -> AppResult<()>;

    /// Upsert the full workouts collection
    async fn upsert_workouts(&self, rows: Vec<WorkoutRow>) -> AppResult<()>;
}

/// Lazily-connected handle to a [`RemoteStore`].
///
/// The underlying `connect` runs at most once for the session; concurrent
/// and repeated initialization attempts observe the memoized outcome instead
/// of reconnecting.
pub struct RemoteSession {
    store: Arc<dyn RemoteStore>,
    connected: OnceCell<()>,
}

impl RemoteSession {
    /// Wrap a remote store; no connection is made until first use
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            connected: OnceCell::new(),
        }
    }

    /// Return the connected store, establishing the connection on first call
    ///
    /// # Errors
    ///
    /// Propagates the store's `connect` failure; a later call retries.
    pub async fn store(&self) -> AppResult<&Arc<dyn RemoteStore>> {
        self.connected
            .get_or_try_init(|| async {
                debug!("initializing remote store connection");
                self.store.connect().await
            })
            .await?;
        Ok(&self.store)
    }
}

/// AI photo recognition returning candidate food items for one image
#[async_trait]
pub trait VisionEstimator: Send + Sync {
    /// Identify foods in the encoded image and estimate their portions and
    /// macros. May return an empty list; may fail.
    async fn estimate(&self, image: &[u8]) -> AppResult<Vec<FoodItem>>;
}

/// AI insight generation over recent logging history
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    /// Produce a short encouraging summary of the supplied recent meals and
    /// workouts
    async fn summarize(&self, meals: &[Meal], workouts: &[Workout]) -> AppResult<String>;
}
