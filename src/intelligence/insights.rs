// ABOUTME: Session-scoped insight advisory over recent logging history
// ABOUTME: Fires at most once per session for premium users with enough data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! # Insight Advisory
//!
//! Coordinates the external [`InsightGenerator`]: decides when an insight is
//! due, bounds the context window, and caches the result for the session.
//!
//! Fires at most once per session, when the user is premium and more than
//! five meals are logged. The generator sees only the 10 most recent meals
//! and 5 most recent workouts. The result is cached in memory, never
//! persisted, and never re-fetched automatically; invalidation is manual
//! via [`InsightAdvisor::clear`].

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::constants::{limits, INSIGHT_FALLBACK};
use crate::models::{Meal, Profile, Workout};
use crate::providers::InsightGenerator;

/// Session-scoped insight cache around an [`InsightGenerator`]
pub struct InsightAdvisor {
    generator: Arc<dyn InsightGenerator>,
    timeout: Duration,
    cached: Option<String>,
}

impl InsightAdvisor {
    /// Create an advisor with an empty session cache
    pub fn new(generator: Arc<dyn InsightGenerator>, timeout: Duration) -> Self {
        Self {
            generator,
            timeout,
            cached: None,
        }
    }

    /// The insight fetched this session, if any
    pub fn cached(&self) -> Option<&str> {
        self.cached.as_deref()
    }

    /// Drop the session cache so the next call may fetch again
    pub fn clear(&mut self) {
        self.cached = None;
    }

    /// Return the session insight, fetching it if due.
    ///
    /// `meals` and `workouts` are the full live sequences, newest first; the
    /// context sent to the generator is bounded here. Generator failure or
    /// timeout yields the fixed fallback text, which is cached like a
    /// success (no automatic retry within the session). Returns `None` when
    /// the trigger conditions do not hold.
    pub async fn maybe_summarize(
        &mut self,
        profile: &Profile,
        meals: &[Meal],
        workouts: &[Workout],
    ) -> Option<&str> {
        if self.cached.is_some() {
            return self.cached.as_deref();
        }
        if !profile.is_premium || meals.len() < limits::INSIGHT_MIN_MEALS {
            return None;
        }

        let recent_meals = &meals[..meals.len().min(limits::INSIGHT_MEAL_WINDOW)];
        let recent_workouts = &workouts[..workouts.len().min(limits::INSIGHT_WORKOUT_WINDOW)];
        debug!(
            meals = recent_meals.len(),
            workouts = recent_workouts.len(),
            "fetching session insight"
        );

        let text = match tokio::time::timeout(
            self.timeout,
            self.generator.summarize(recent_meals, recent_workouts),
        )
        .await
        {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!(error = %e, "insight generation failed, using fallback");
                INSIGHT_FALLBACK.to_owned()
            }
            Err(_) => {
                warn!("insight generation timed out, using fallback");
                INSIGHT_FALLBACK.to_owned()
            }
        };

        self.cached = Some(text);
        self.cached.as_deref()
    }
}
