// ABOUTME: Environment-based configuration for FatSecret credentials and endpoints
// ABOUTME: Reads FATSECRET_* variables, applies defaults, and validates endpoint URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info};
use url::Url;

use crate::constants::{api, env_config, http};
use crate::errors::FatSecretError;
use crate::oauth1::{Credentials, HttpMethod};

/// Everything a `FatSecretClient` needs to sign and send requests
#[derive(Debug, Clone)]
pub struct FatSecretConfig {
    /// Consumer key and secret, shared by every request
    pub credentials: Arc<Credentials>,
    /// Endpoint for `foods.search`
    pub api_url: String,
    /// Endpoint for `recipes.search.v3`
    pub recipes_url: String,
    /// GET sends a query string, POST a form body
    pub http_method: HttpMethod,
    /// Default `max_results` for food searches
    pub max_results: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl FatSecretConfig {
    /// Config with default endpoints, GET transmission, and default limits
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Arc::new(credentials),
            api_url: api::DEFAULT_API_URL.to_owned(),
            recipes_url: api::DEFAULT_RECIPES_URL.to_owned(),
            http_method: HttpMethod::Get,
            max_results: api::DEFAULT_MAX_RESULTS,
            timeout_secs: http::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: http::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `FatSecretError::Configuration` if credentials are missing, an
    /// endpoint is not a plain http(s) URL, or a numeric value does not parse
    pub fn from_env() -> Result<Self, FatSecretError> {
        info!("Loading FatSecret configuration from environment variables");

        let credentials = Credentials::new(
            required_env(env_config::FATSECRET_KEY)?,
            required_env(env_config::FATSECRET_SECRET)?,
        )?;

        let api_url = validate_endpoint(
            env_config::FATSECRET_API_URL,
            &env_var_or(env_config::FATSECRET_API_URL, api::DEFAULT_API_URL),
        )?;
        let recipes_url = validate_endpoint(
            env_config::FATSECRET_RECIPES_URL,
            &env_var_or(env_config::FATSECRET_RECIPES_URL, api::DEFAULT_RECIPES_URL),
        )?;

        let method = env_var_or(env_config::FATSECRET_HTTP_METHOD, HttpMethod::Get.as_str());
        let http_method = HttpMethod::parse(&method).ok_or_else(|| {
            FatSecretError::configuration(format!(
                "{} must be GET or POST, got '{method}'",
                env_config::FATSECRET_HTTP_METHOD
            ))
        })?;

        let max_results = parse_env(env_config::FATSECRET_MAX_RESULTS, api::DEFAULT_MAX_RESULTS)?;
        if max_results == 0 || max_results > api::MAX_RESULTS_LIMIT {
            return Err(FatSecretError::configuration(format!(
                "{} must be between 1 and {}, got {max_results}",
                env_config::FATSECRET_MAX_RESULTS,
                api::MAX_RESULTS_LIMIT
            )));
        }

        let config = Self {
            credentials: Arc::new(credentials),
            api_url,
            recipes_url,
            http_method,
            max_results,
            timeout_secs: parse_env(
                env_config::FATSECRET_HTTP_TIMEOUT_SECS,
                http::DEFAULT_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: parse_env(
                env_config::FATSECRET_CONNECT_TIMEOUT_SECS,
                http::DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };

        debug!(
            api_url = %config.api_url,
            recipes_url = %config.recipes_url,
            method = config.http_method.as_str(),
            max_results = config.max_results,
            "FatSecret configuration loaded"
        );
        Ok(config)
    }

    /// Override the food search endpoint
    ///
    /// # Errors
    ///
    /// Returns `FatSecretError::Configuration` if the URL is invalid
    pub fn with_api_url(mut self, url: &str) -> Result<Self, FatSecretError> {
        self.api_url = validate_endpoint("api_url", url)?;
        Ok(self)
    }

    /// Override the recipe search endpoint
    ///
    /// # Errors
    ///
    /// Returns `FatSecretError::Configuration` if the URL is invalid
    pub fn with_recipes_url(mut self, url: &str) -> Result<Self, FatSecretError> {
        self.recipes_url = validate_endpoint("recipes_url", url)?;
        Ok(self)
    }

    /// Choose how parameters are transmitted
    #[must_use]
    pub const fn with_http_method(mut self, method: HttpMethod) -> Self {
        self.http_method = method;
        self
    }
}

/// Parse an endpoint and return it in normalized form.
///
/// Only http and https are accepted, and the URL must not carry a query or
/// fragment since it is signed as the bare base URL.
///
/// # Errors
///
/// Returns `FatSecretError::Configuration` describing the rejected value
pub fn validate_endpoint(name: &str, raw: &str) -> Result<String, FatSecretError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| FatSecretError::configuration(format!("{name} '{raw}' is not a URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FatSecretError::configuration(format!(
            "{name} must use http or https, got '{}'",
            url.scheme()
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(FatSecretError::configuration(format!(
            "{name} must not carry a query or fragment"
        )));
    }

    Ok(url.as_str().to_owned())
}

fn required_env(key: &str) -> Result<String, FatSecretError> {
    env::var(key)
        .map_err(|_| FatSecretError::configuration(format!("{key} environment variable not set")))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> Result<T, FatSecretError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env::var(key).map_or(Ok(default), |value| {
        value.trim().parse().map_err(|e| {
            FatSecretError::configuration(format!("{key} has invalid value '{value}': {e}"))
        })
    })
}
