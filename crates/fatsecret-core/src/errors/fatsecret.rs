// ABOUTME: Domain error kinds for signing, transport, and response parsing
// ABOUTME: Classifies failures as retriable or not and converts them into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::AppError;
use crate::constants::api::{ERROR_INVALID_NONCE, ERROR_INVALID_TIMESTAMP};

/// Service name used in error messages
const SERVICE: &str = "FatSecret API";

/// Error kinds produced while signing, sending, and parsing FatSecret requests
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FatSecretError {
    /// Credentials or endpoints are missing or unusable
    #[error("Configuration error: {reason}")]
    Configuration {
        /// What is wrong with the configuration
        reason: String,
    },

    /// A search argument was rejected before any request was signed
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidInput {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Why the value is rejected
        reason: String,
    },

    /// Connection failure or timeout
    #[error("Network error: {reason}")]
    Network {
        /// Transport failure description
        reason: String,
        /// Whether the request timed out
        timed_out: bool,
    },

    /// The API answered with a non-success HTTP status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body as received
        body: String,
    },

    /// The API answered with its in-body error envelope
    #[error("API error {code}: {message}")]
    Api {
        /// FatSecret error code
        code: i64,
        /// FatSecret error message
        message: String,
    },

    /// The body is not JSON or the expected result path is absent
    #[error("Malformed response: {reason}")]
    MalformedResponse {
        /// What could not be read
        reason: String,
    },

    /// A single result item was skipped
    #[error("Skipped result item {index}: {reason}")]
    PartialItem {
        /// Position of the item in the result payload
        index: usize,
        /// Why the item was skipped
        reason: String,
    },
}

impl FatSecretError {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            parameter,
            reason: reason.into(),
        }
    }

    /// Create a network error
    #[must_use]
    pub fn network(reason: impl Into<String>, timed_out: bool) -> Self {
        Self::Network {
            reason: reason.into(),
            timed_out,
        }
    }

    /// Create a malformed response error
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Create a skipped item error
    #[must_use]
    pub fn partial_item(index: usize, reason: impl Into<String>) -> Self {
        Self::PartialItem {
            index,
            reason: reason.into(),
        }
    }

    /// Whether re-sending a freshly signed request may succeed.
    ///
    /// Network failures, throttling, server errors, and stale timestamp or
    /// nonce rejections are retriable. Configuration, input, and signature
    /// errors are not.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::Api { code, .. } => {
                *code == ERROR_INVALID_TIMESTAMP || *code == ERROR_INVALID_NONCE
            }
            Self::Configuration { .. }
            | Self::InvalidInput { .. }
            | Self::MalformedResponse { .. }
            | Self::PartialItem { .. } => false,
        }
    }
}

impl From<FatSecretError> for AppError {
    fn from(error: FatSecretError) -> Self {
        let message = error.to_string();
        let app_error = match &error {
            FatSecretError::Configuration { .. } => Self::config_invalid(message),
            FatSecretError::InvalidInput { .. } => Self::invalid_input(message),
            FatSecretError::Network { .. } => Self::external_unavailable(SERVICE, message),
            FatSecretError::HttpStatus { status: 429, .. } => {
                Self::external_rate_limited(SERVICE, message)
            }
            FatSecretError::HttpStatus {
                status: 401 | 403, ..
            } => Self::external_auth_failed(SERVICE, message),
            // FatSecret codes 2-9 are OAuth failures
            FatSecretError::Api { code: 2..=9, .. } => Self::external_auth_failed(SERVICE, message),
            FatSecretError::HttpStatus { .. }
            | FatSecretError::Api { .. }
            | FatSecretError::MalformedResponse { .. }
            | FatSecretError::PartialItem { .. } => Self::external_service(SERVICE, message),
        };
        app_error.with_source(error)
    }
}
