// ABOUTME: Integration tests for the AI photo-scan flow
// ABOUTME: Credit gating, per-attempt charging, state transitions, supersession
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus
#![allow(clippy::unwrap_used)]

//! Scan flow tests: the credit gate, exactly-one-credit charging per
//! completed attempt, resolved/failed transitions, and supersession through
//! the attempt counter.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use fitfocus_core::errors::ErrorCode;
use fitfocus_core::models::{BiologicalSex, FitnessGoal, Profile, UnitSystem};
use fitfocus_core::providers::InMemoryLocalStore;
use fitfocus_core::scan::{ScanFlow, ScanState};
use fitfocus_core::sync::{OnboardingData, SyncCoordinator};

mod common;

const IMAGE: &[u8] = b"\xff\xd8\xff\xe0 not a real jpeg";

async fn onboarded_coordinator() -> SyncCoordinator {
    let local = Arc::new(InMemoryLocalStore::new());
    let mut app = SyncCoordinator::new(local, common::unconfigured_remote(), None);
    app.hydrate().await;
    app.complete_onboarding(OnboardingData {
        age: 25,
        sex: BiologicalSex::Male,
        height_cm: 175.0,
        weight: 75.0,
        unit_system: UnitSystem::Kg,
        activity_level: None,
        goal: FitnessGoal::Maintain,
    })
    .unwrap();
    app
}

fn set_credits(app: &mut SyncCoordinator, credits: u32, premium: bool) {
    let profile = Profile {
        credits,
        is_premium: premium,
        ..app.profile().clone()
    };
    app.update_profile(profile);
}

// ============================================================================
// CREDIT GATE
// ============================================================================

#[tokio::test]
async fn exhausted_credits_reject_before_capture() {
    common::init_test_logging();

    let mut app = onboarded_coordinator().await;
    set_credits(&mut app, 0, false);

    let estimator =
        common::MockVisionEstimator::new(common::VisionScript::Items(vec![common::food(
            "apple", 95.0, 0.5, 25.0, 0.3,
        )]));
    let mut flow = ScanFlow::new(
        Arc::clone(&estimator) as _,
        Duration::from_secs(1),
    );

    let err = flow.scan(&mut app, IMAGE).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::QuotaExceeded);
    assert_eq!(*flow.state(), ScanState::Idle);
    assert_eq!(app.profile().credits, 0);
    // The estimator was never consulted.
    assert_eq!(estimator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn premium_scans_without_credits_and_is_never_charged() {
    common::init_test_logging();

    let mut app = onboarded_coordinator().await;
    set_credits(&mut app, 0, true);

    let estimator =
        common::MockVisionEstimator::new(common::VisionScript::Items(vec![common::food(
            "apple", 95.0, 0.5, 25.0, 0.3,
        )]));
    let mut flow = ScanFlow::new(estimator as _, Duration::from_secs(1));

    let attempt = flow.scan(&mut app, IMAGE).await.unwrap();

    assert!(matches!(flow.state(), ScanState::Resolved(_)));
    assert_eq!(app.profile().credits, 0);
    assert!(flow.take_resolved(attempt).is_some());
}

// ============================================================================
// CHARGING AND TRANSITIONS
// ============================================================================

#[tokio::test]
async fn successful_scan_charges_one_credit_and_resolves() {
    common::init_test_logging();

    let mut app = onboarded_coordinator().await;
    assert_eq!(app.profile().credits, 3);

    let estimator =
        common::MockVisionEstimator::new(common::VisionScript::Items(vec![common::food(
            "apple", 95.0, 0.5, 25.0, 0.3,
        )]));
    let mut flow = ScanFlow::new(estimator as _, Duration::from_secs(1));

    let attempt = flow.scan(&mut app, IMAGE).await.unwrap();

    assert_eq!(app.profile().credits, 2);
    let items = flow.take_resolved(attempt).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "apple");
    // Taking the result resets the flow.
    assert_eq!(*flow.state(), ScanState::Idle);
}

#[tokio::test]
async fn estimator_failure_still_charges() {
    common::init_test_logging();

    let mut app = onboarded_coordinator().await;

    let estimator = common::MockVisionEstimator::new(common::VisionScript::Fail);
    let mut flow = ScanFlow::new(estimator as _, Duration::from_secs(1));

    let attempt = flow.scan(&mut app, IMAGE).await.unwrap();

    assert_eq!(app.profile().credits, 2);
    assert!(matches!(flow.state(), ScanState::Failed(_)));
    assert!(flow.take_resolved(attempt).is_none());
}

#[tokio::test]
async fn empty_candidate_list_is_a_failure_and_charges() {
    common::init_test_logging();

    let mut app = onboarded_coordinator().await;

    let estimator = common::MockVisionEstimator::new(common::VisionScript::Empty);
    let mut flow = ScanFlow::new(estimator as _, Duration::from_secs(1));

    flow.scan(&mut app, IMAGE).await.unwrap();

    assert_eq!(app.profile().credits, 2);
    assert!(matches!(flow.state(), ScanState::Failed(_)));
}

// ============================================================================
// SUPERSESSION
// ============================================================================

#[tokio::test]
async fn superseded_attempt_results_are_ignored() {
    common::init_test_logging();

    let mut app = onboarded_coordinator().await;

    let estimator =
        common::MockVisionEstimator::new(common::VisionScript::Items(vec![common::food(
            "apple", 95.0, 0.5, 25.0, 0.3,
        )]));
    let mut flow = ScanFlow::new(estimator as _, Duration::from_secs(1));

    let first = flow.scan(&mut app, IMAGE).await.unwrap();
    let second = flow.scan(&mut app, IMAGE).await.unwrap();

    assert!(!flow.is_current(first));
    assert!(flow.take_resolved(first).is_none());
    // The newer attempt is unaffected by the stale take.
    assert!(flow.take_resolved(second).is_some());
    assert_eq!(app.profile().credits, 1);
}
