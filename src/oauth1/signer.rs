// ABOUTME: OAuth 1.0a request signer holding immutable consumer credentials
// ABOUTME: Generates timestamp and nonce, merges OAuth and API parameters, and attaches the signature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use zeroize::Zeroizing;

use super::encoding::{normalize, ParameterMap};
use super::signature::{sign, HttpMethod};
use crate::constants::oauth;
use crate::errors::FatSecretError;

/// Consumer key and secret identifying the application to the API.
///
/// Validated on construction and never mutated afterwards; share it behind an
/// `Arc` across concurrent callers.
pub struct Credentials {
    consumer_key: String,
    consumer_secret: Zeroizing<String>,
}

impl Credentials {
    /// Create credentials from the consumer key and secret
    ///
    /// # Errors
    ///
    /// Returns `FatSecretError::Configuration` if either value is empty or whitespace
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self, FatSecretError> {
        let consumer_key = consumer_key.into();
        let consumer_secret = Zeroizing::new(consumer_secret.into());

        if consumer_key.trim().is_empty() {
            return Err(FatSecretError::configuration("consumer key is empty"));
        }
        if consumer_secret.trim().is_empty() {
            return Err(FatSecretError::configuration("consumer secret is empty"));
        }

        Ok(Self {
            consumer_key,
            consumer_secret,
        })
    }

    /// The public consumer key
    #[must_use]
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub(crate) fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .finish()
    }
}

/// Per-request OAuth values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthContext {
    /// Seconds since the Unix epoch, decimal
    pub timestamp: String,
    /// Single-use random token
    pub nonce: String,
}

impl OAuthContext {
    /// Fixed context, for reproducing a signature
    #[must_use]
    pub fn new(timestamp: impl Into<String>, nonce: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            nonce: nonce.into(),
        }
    }

    /// Fresh context: the current time and a new nonce
    #[must_use]
    pub fn generate() -> Self {
        Self {
            timestamp: Utc::now().timestamp().to_string(),
            nonce: generate_nonce(),
        }
    }
}

/// 128 bits from the operating system CSPRNG, lowercase hex.
///
/// No shared state, so concurrent callers never observe the same value.
#[must_use]
pub fn generate_nonce() -> String {
    let mut bytes = [0_u8; oauth::NONCE_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Where the final parameters travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transmission {
    /// Appended to the URL (GET)
    QueryString,
    /// Sent as an `application/x-www-form-urlencoded` body (POST)
    FormBody,
}

/// A request with its full, signed parameter set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Target URL without query component
    pub url: String,
    /// API parameters, OAuth parameters, and `oauth_signature`
    pub params: ParameterMap,
}

impl SignedRequest {
    /// How the parameters are transmitted for this method
    #[must_use]
    pub const fn transmission(&self) -> Transmission {
        match self.method {
            HttpMethod::Get => Transmission::QueryString,
            HttpMethod::Post => Transmission::FormBody,
        }
    }

    /// All parameters, signature included, percent-encoded in canonical order
    #[must_use]
    pub fn encoded_params(&self) -> String {
        normalize(&self.params)
    }

    /// URL to send to: with the query string for GET, bare for POST
    #[must_use]
    pub fn request_url(&self) -> String {
        match self.transmission() {
            Transmission::QueryString => {
                let query = self.encoded_params();
                if query.is_empty() {
                    self.url.clone()
                } else {
                    format!("{}?{query}", self.url)
                }
            }
            Transmission::FormBody => self.url.clone(),
        }
    }

    /// The computed `oauth_signature`
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.params.get(oauth::SIGNATURE).map(String::as_str)
    }

    /// The `oauth_nonce` this request was signed with
    #[must_use]
    pub fn nonce(&self) -> Option<&str> {
        self.params.get(oauth::NONCE).map(String::as_str)
    }
}

/// Signs API requests with two-legged OAuth 1.0a (no token secret)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Arc<Credentials>,
}

impl RequestSigner {
    /// Create a signer over shared credentials
    #[must_use]
    pub const fn new(credentials: Arc<Credentials>) -> Self {
        Self { credentials }
    }

    /// The credentials this signer uses
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign a request with a fresh timestamp and nonce.
    ///
    /// Call again for every attempt; a signed request must never be re-sent
    /// with its old timestamp and nonce.
    #[must_use]
    pub fn build_signed_request(
        &self,
        method: HttpMethod,
        base_url: &str,
        api_params: ParameterMap,
    ) -> SignedRequest {
        self.sign_with_context(method, base_url, api_params, &OAuthContext::generate())
    }

    /// Sign a request with a caller-supplied context
    #[must_use]
    pub fn sign_with_context(
        &self,
        method: HttpMethod,
        base_url: &str,
        api_params: ParameterMap,
        context: &OAuthContext,
    ) -> SignedRequest {
        let mut params = api_params;
        params.remove(oauth::SIGNATURE);
        params.insert(
            oauth::CONSUMER_KEY.to_owned(),
            self.credentials.consumer_key().to_owned(),
        );
        params.insert(oauth::SIGNATURE_METHOD.to_owned(), oauth::HMAC_SHA1.to_owned());
        params.insert(oauth::TIMESTAMP.to_owned(), context.timestamp.clone());
        params.insert(oauth::NONCE.to_owned(), context.nonce.clone());
        params.insert(oauth::VERSION.to_owned(), oauth::VERSION_1_0.to_owned());

        let normalized = normalize(&params);
        let signature = sign(
            method,
            base_url,
            &normalized,
            self.credentials.consumer_secret(),
            "",
        );
        debug!(
            method = method.as_str(),
            url = base_url,
            parameter_count = params.len(),
            timestamp = %context.timestamp,
            "Signed OAuth 1.0a request"
        );

        params.insert(oauth::SIGNATURE.to_owned(), signature);

        SignedRequest {
            method,
            url: base_url.to_owned(),
            params,
        }
    }
}
