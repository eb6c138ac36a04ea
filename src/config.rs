// ABOUTME: Environment-driven configuration for the optional remote mirror
// ABOUTME: Gates all cloud sync behind a syntactic validity check of URL and key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFocus

//! # Remote Sync Configuration
//!
//! Configuration is environment-only. The remote capability counts as
//! configured only when the endpoint URL parses as an `https` URL and the
//! access key is long enough to not be a placeholder; when unconfigured,
//! every sync operation is a silent no-op and never surfaces an error.

use std::env;
use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::constants::{env_vars, limits, DEFAULT_USER_ID};

/// Configuration for the optional remote backing store
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote endpoint URL (empty when unset)
    pub endpoint_url: String,
    /// Remote access key (empty when unset)
    pub access_key: String,
    /// Fixed user identifier keying all remote rows
    pub user_id: String,
    /// Bounded timeout applied to remote and AI calls
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::new(),
            access_key: String::new(),
            user_id: DEFAULT_USER_ID.to_owned(),
            timeout: Duration::from_secs(limits::DEFAULT_REMOTE_TIMEOUT_SECS),
        }
    }
}

impl RemoteConfig {
    /// Read configuration from the environment.
    ///
    /// Missing variables yield an unconfigured (offline-only) instance; a
    /// malformed timeout falls back to the default with a warning.
    pub fn from_env() -> Self {
        let endpoint_url = env::var(env_vars::REMOTE_URL).unwrap_or_default();
        let access_key = env::var(env_vars::REMOTE_KEY).unwrap_or_default();
        let user_id =
            env::var(env_vars::USER_ID).unwrap_or_else(|_| DEFAULT_USER_ID.to_owned());

        let timeout_secs = match env::var(env_vars::REMOTE_TIMEOUT_SECS) {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) => secs.clamp(
                    limits::MIN_REMOTE_TIMEOUT_SECS,
                    limits::MAX_REMOTE_TIMEOUT_SECS,
                ),
                Err(_) => {
                    warn!(
                        value = %raw,
                        "invalid {}, using default", env_vars::REMOTE_TIMEOUT_SECS
                    );
                    limits::DEFAULT_REMOTE_TIMEOUT_SECS
                }
            },
            Err(_) => limits::DEFAULT_REMOTE_TIMEOUT_SECS,
        };

        Self {
            endpoint_url,
            access_key,
            user_id,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Whether the remote capability is configured.
    ///
    /// Requires the endpoint to parse as an `https` URL and the access key to
    /// exceed placeholder length. Checking has no side effects.
    pub fn is_configured(&self) -> bool {
        let url_ok = Url::parse(&self.endpoint_url)
            .map(|u| u.scheme() == "https")
            .unwrap_or(false);
        url_ok && self.access_key.len() >= limits::MIN_ACCESS_KEY_LEN
    }
}
