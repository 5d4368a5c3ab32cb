// ABOUTME: RFC 3986 percent-encoding and canonical parameter ordering for OAuth 1.0a
// ABOUTME: Produces the normalized k1=v1&k2=v2 string that is signed and transmitted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::borrow::Cow;
use std::collections::HashMap;

/// Request parameters by name. Iteration order carries no meaning.
pub type ParameterMap = HashMap<String, String>;

/// Percent-encode a string.
///
/// Every byte outside `A-Z a-z 0-9 - . _ ~` becomes `%XX` with uppercase hex
/// digits; multi-byte UTF-8 characters are encoded byte by byte.
#[must_use]
pub fn percent_encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Encode every key and value, then sort by encoded key and encoded value
#[must_use]
pub fn encoded_pairs(params: &ParameterMap) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(key, value)| {
            (
                percent_encode(key).into_owned(),
                percent_encode(value).into_owned(),
            )
        })
        .collect();

    // Byte-wise on the encoded forms, key first then value
    pairs.sort_unstable();
    pairs
}

/// Canonical parameter string: encoded pairs in sorted order joined as `k=v&k=v`.
///
/// A pure function of the parameter set; an empty map yields an empty string.
#[must_use]
pub fn normalize(params: &ParameterMap) -> String {
    encoded_pairs(params)
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
