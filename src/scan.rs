// ABOUTME: AI photo-scan flow coordination: credit gate, state machine, charging
// ABOUTME: Wraps the VisionEstimator capability; the estimator itself is external
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! # Photo-Scan Flow
//!
//! Per-attempt state machine:
//!
//! ```text
//! Idle -> CapturingImage -> Estimating -> { Resolved, Failed }
//! ```
//!
//! A scan may start only when the user is premium or has credits left;
//! otherwise the attempt is rejected before any capture and the machine
//! stays `Idle` with no state mutation.
//!
//! Non-premium users are charged exactly one credit per completed attempt,
//! on success and failure alike (cost per attempt, not per success). The
//! charge-on-failure behavior mirrors the shipped application and is pending
//! product confirmation.
//!
//! Attempts are not cancellable: a superseded attempt's result is ignored
//! through the attempt counter ([`ScanFlow::is_current`]) rather than by
//! cancelling the in-flight call.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};
use crate::models::FoodItem;
use crate::providers::VisionEstimator;
use crate::sync::SyncCoordinator;

/// State of the current (or last) scan attempt
#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    /// No attempt in progress
    Idle,
    /// The user supplied an image; encoding in progress
    CapturingImage,
    /// The estimator call is in flight
    Estimating,
    /// Candidate items ready for the meal form (user still confirms)
    Resolved(Vec<FoodItem>),
    /// No usable result; retryable by re-initiating
    Failed(String),
}

/// Drives scan attempts against a [`VisionEstimator`]
pub struct ScanFlow {
    estimator: Arc<dyn VisionEstimator>,
    timeout: Duration,
    state: ScanState,
    attempt: u64,
}

impl ScanFlow {
    /// Create an idle flow around an estimator
    pub fn new(estimator: Arc<dyn VisionEstimator>, timeout: Duration) -> Self {
        Self {
            estimator,
            timeout,
            state: ScanState::Idle,
            attempt: 0,
        }
    }

    /// Current state
    pub const fn state(&self) -> &ScanState {
        &self.state
    }

    /// Identifier of the most recent attempt
    pub const fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Whether `attempt` is still the live attempt (results of superseded
    /// attempts must be ignored by the caller)
    pub const fn is_current(&self, attempt: u64) -> bool {
        self.attempt == attempt
    }

    /// Run one scan attempt over an already-encoded image.
    ///
    /// Checks the credit gate, calls the estimator within the bounded
    /// timeout, transitions to `Resolved` or `Failed`, and charges one
    /// credit per completed attempt for non-premium users.
    ///
    /// Returns this attempt's identifier for later [`Self::is_current`]
    /// checks.
    ///
    /// # Errors
    ///
    /// Returns a quota error when the user is not premium and has no credits
    /// left; in that case the machine stays `Idle` and nothing is charged.
    pub async fn scan(
        &mut self,
        coordinator: &mut SyncCoordinator,
        image: &[u8],
    ) -> AppResult<u64> {
        if !coordinator.profile().can_scan() {
            debug!("scan rejected: no credits remaining");
            return Err(AppError::quota_exceeded("no scan credits remaining"));
        }

        self.attempt += 1;
        let attempt = self.attempt;
        self.state = ScanState::CapturingImage;
        self.state = ScanState::Estimating;

        let outcome = tokio::time::timeout(self.timeout, self.estimator.estimate(image)).await;

        // Charged per completed attempt, success or failure alike.
        let premium = coordinator.profile().is_premium;
        if !premium {
            coordinator.consume_scan_credit();
        }

        self.state = match outcome {
            Ok(Ok(items)) if !items.is_empty() => {
                debug!(attempt, candidates = items.len(), "scan resolved");
                ScanState::Resolved(items)
            }
            Ok(Ok(_)) => {
                warn!(attempt, "scan returned no recognizable foods");
                ScanState::Failed("no foods recognized, try another photo".to_owned())
            }
            Ok(Err(e)) => {
                warn!(attempt, error = %e, "scan estimation failed");
                ScanState::Failed("estimation failed, please retry".to_owned())
            }
            Err(_) => {
                warn!(attempt, "scan estimation timed out");
                ScanState::Failed("estimation timed out, please retry".to_owned())
            }
        };

        Ok(attempt)
    }

    /// Take the resolved candidates if `attempt` is still current, resetting
    /// the flow to `Idle`. Returns `None` for superseded attempts or
    /// non-resolved states.
    pub fn take_resolved(&mut self, attempt: u64) -> Option<Vec<FoodItem>> {
        if !self.is_current(attempt) {
            return None;
        }
        match std::mem::replace(&mut self.state, ScanState::Idle) {
            ScanState::Resolved(items) => Some(items),
            other => {
                self.state = other;
                None
            }
        }
    }
}
