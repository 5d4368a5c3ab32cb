// ABOUTME: OAuth 1.0a request signing for the FatSecret REST API
// ABOUTME: Parameter canonicalization, HMAC-SHA1 signatures, and signed request assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! OAuth 1.0a (two-legged) request signing.
//!
//! Flow: `RequestSigner` merges the caller's API parameters with the OAuth
//! control parameters, `encoding::normalize` canonicalizes them, and
//! `signature::sign` computes the HMAC-SHA1 signature over the base string.
//! The signature is added to the parameter set only after it is computed.
//!
//! Any byte of difference in canonicalization changes the signature and the
//! API rejects the request, so these modules are covered by known-answer tests.

/// Percent-encoding and canonical parameter ordering
pub mod encoding;
/// Base string and HMAC-SHA1 signature
pub mod signature;
/// Credentials, per-request context, and signed request assembly
pub mod signer;

pub use encoding::{normalize, percent_encode, ParameterMap};
pub use signature::{base_string, sign, signing_key, HttpMethod};
pub use signer::{
    generate_nonce, Credentials, OAuthContext, RequestSigner, SignedRequest, Transmission,
};
