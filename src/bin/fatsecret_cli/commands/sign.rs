// ABOUTME: Offline signing command for fatsecret-cli
// ABOUTME: Prints the normalized parameters, base string, and signature for diagnosing auth failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use fatsecret_client::{
    config::{validate_endpoint, FatSecretConfig},
    constants::oauth,
    oauth1::{base_string, normalize, HttpMethod, OAuthContext, ParameterMap, RequestSigner},
};
use serde_json::json;

use crate::helpers::display;

/// Parse a `key=value` argument
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

/// Sign a request with fresh OAuth values and print every intermediate step
pub fn run(
    config: &FatSecretConfig,
    url: &str,
    method: &str,
    params: Vec<(String, String)>,
    json: bool,
) -> Result<()> {
    let method =
        HttpMethod::parse(method).ok_or_else(|| anyhow!("method must be GET or POST, got '{method}'"))?;
    let url = validate_endpoint("url", url)?;

    let signer = RequestSigner::new(config.credentials.clone());
    let context = OAuthContext::generate();
    let signed = signer.sign_with_context(method, &url, params.into_iter().collect(), &context);

    let mut unsigned: ParameterMap = signed.params.clone();
    unsigned.remove(oauth::SIGNATURE);
    let normalized = normalize(&unsigned);
    let base = base_string(method, &url, &normalized);
    let signature = signed.signature().unwrap_or_default();

    if json {
        display::print_json(&json!({
            "method": method,
            "url": url,
            "normalized_parameters": normalized,
            "base_string": base,
            "signature": signature,
            "request_url": signed.request_url(),
            "body": signed.encoded_params(),
        }))?;
    } else {
        display::print_signature(&display::SignatureReport {
            method,
            normalized: &normalized,
            base_string: &base,
            signature,
            request_url: &signed.request_url(),
            body: &signed.encoded_params(),
        });
    }
    Ok(())
}
