// ABOUTME: Shared HTTP client with connection pooling for FatSecret API calls
// ABOUTME: Process-wide singleton with configurable timeouts set once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::constants::http::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::errors::{AppError, AppResult};

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Set the shared client's timeouts.
///
/// Takes effect only if called before the first `shared_client()`; later
/// calls are ignored.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

/// Build a standalone client with the given timeouts
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized
pub fn build_client(timeout_secs: u64, connect_timeout_secs: u64) -> AppResult<Client> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .user_agent(concat!("fatsecret-client/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")).with_source(e))
}

/// Get the shared HTTP client.
///
/// Falls back to default timeouts (30s request, 10s connect) if
/// `initialize_shared_client()` was not called.
#[must_use]
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS));

        build_client(timeout, connect_timeout).unwrap_or_else(|_| Client::new())
    })
}
