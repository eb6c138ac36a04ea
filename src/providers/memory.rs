// ABOUTME: In-memory LocalStore implementation
// ABOUTME: Backs tests and storage-less embedding; no durability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! In-memory local store.
//!
//! Useful for tests and for hosts that have no persistent storage to offer;
//! contents vanish with the process.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::{AppError, AppResult};
use crate::providers::core::LocalStore;

/// `LocalStore` backed by a process-local map
#[derive(Debug, Default)]
pub struct InMemoryLocalStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryLocalStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for InMemoryLocalStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::storage("local store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::storage("local store lock poisoned"))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
