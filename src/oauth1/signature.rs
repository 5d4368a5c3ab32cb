// ABOUTME: OAuth 1.0a signature base string construction and HMAC-SHA1 signing
// ABOUTME: Signs METHOD&url&params with the percent-encoded consumer and token secrets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use ring::hmac;
use serde::{Deserialize, Serialize};

use super::encoding::percent_encode;

/// HTTP method of a signed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Parameters travel in the query string
    #[default]
    Get,
    /// Parameters travel in a form-encoded body
    Post,
}

impl HttpMethod {
    /// Uppercase method name as it appears in the base string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }

    /// Parse a method name, case-insensitively
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the signature base string.
///
/// `METHOD&encode(base_url)&encode(normalized_params)`. The normalized
/// parameter string is already percent-encoded pair by pair and is encoded a
/// second time here as a whole. `base_url` must not carry a query component.
#[must_use]
pub fn base_string(method: HttpMethod, base_url: &str, normalized_params: &str) -> String {
    debug_assert!(
        !base_url.contains('?'),
        "signature base URL must not carry a query component"
    );
    format!(
        "{}&{}&{}",
        method.as_str(),
        percent_encode(base_url),
        percent_encode(normalized_params)
    )
}

/// HMAC key: `encode(consumer_secret)&encode(token_secret)`.
///
/// With no token secret the key ends in a single trailing `&`.
#[must_use]
pub fn signing_key(consumer_secret: &str, token_secret: &str) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    )
}

/// Compute the base64 HMAC-SHA1 signature of a request.
///
/// Identical inputs always yield identical output.
#[must_use]
pub fn sign(
    method: HttpMethod,
    base_url: &str,
    normalized_params: &str,
    consumer_secret: &str,
    token_secret: &str,
) -> String {
    let base = base_string(method, base_url, normalized_params);
    let key = hmac::Key::new(
        hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
        signing_key(consumer_secret, token_secret).as_bytes(),
    );
    let tag = hmac::sign(&key, base.as_bytes());
    STANDARD.encode(tag.as_ref())
}
