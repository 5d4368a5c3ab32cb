// ABOUTME: FatSecret Platform API client for food and recipe searches
// ABOUTME: Signs each request with OAuth 1.0a, sends it over GET or POST, and normalizes the response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::parser::{check_api_error, parse_foods, parse_recipes, ParseOutcome};
use crate::config::FatSecretConfig;
use crate::constants::api;
use crate::errors::{AppResult, FatSecretError};
use crate::http_client::{initialize_shared_client, shared_client};
use crate::models::{FoodItem, RecipeItem};
use crate::oauth1::{HttpMethod, ParameterMap, RequestSigner, SignedRequest, Transmission};

/// Form body content type for POST transmission
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Client for the FatSecret REST API.
///
/// Cheap to clone; credentials are shared and never mutated, so one client
/// may serve many concurrent searches.
#[derive(Debug, Clone)]
pub struct FatSecretClient {
    signer: RequestSigner,
    api_url: String,
    recipes_url: String,
    http_method: HttpMethod,
    max_results: u32,
    http_client: Client,
}

impl FatSecretClient {
    /// Create a client on the shared connection pool
    #[must_use]
    pub fn new(config: FatSecretConfig) -> Self {
        initialize_shared_client(config.timeout_secs, config.connect_timeout_secs);
        Self::with_http_client(config, shared_client().clone())
    }

    /// Create a client with a caller-provided HTTP client
    #[must_use]
    pub fn with_http_client(config: FatSecretConfig, http_client: Client) -> Self {
        Self {
            signer: RequestSigner::new(config.credentials),
            api_url: config.api_url,
            recipes_url: config.recipes_url,
            http_method: config.http_method,
            max_results: config.max_results,
            http_client,
        }
    }

    /// The signer used for every request
    #[must_use]
    pub const fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Transmission method in use
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        self.http_method
    }

    /// Search foods by free text
    ///
    /// # Errors
    ///
    /// Returns an error if the query is empty, the request fails, or the API
    /// answers with an error. Malformed items are skipped, not reported as errors.
    pub async fn search_foods(&self, query: &str) -> AppResult<Vec<FoodItem>> {
        let params = self.food_search_params(query)?;
        let body = self.call(&self.api_url, params).await?;
        let outcome = parse_foods(&body, &api::FOODS_RESULT_PATH);
        log_outcome("food", &outcome);
        Ok(outcome.into_items())
    }

    /// Search recipes whose calories per serving fall in `[min_calories, max_calories]`,
    /// lowest calories first
    ///
    /// # Errors
    ///
    /// Returns an error if the range is negative or inverted, `max_results` is
    /// outside 1..=50, the request fails, or the API answers with an error
    pub async fn search_recipes_by_calories(
        &self,
        min_calories: i64,
        max_calories: i64,
        max_results: u32,
    ) -> AppResult<Vec<RecipeItem>> {
        let params = recipe_search_params(min_calories, max_calories, max_results)?;
        let body = self.call(&self.recipes_url, params).await?;
        let outcome = parse_recipes(&body, &api::RECIPES_RESULT_PATH);
        log_outcome("recipe", &outcome);
        Ok(outcome.into_items())
    }

    /// API parameters for a food search
    ///
    /// # Errors
    ///
    /// Returns `FatSecretError::InvalidInput` if the query is blank
    pub fn food_search_params(&self, query: &str) -> Result<ParameterMap, FatSecretError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(FatSecretError::invalid_input(
                "search_expression",
                "search query cannot be empty",
            ));
        }

        Ok(ParameterMap::from([
            ("method".to_owned(), api::METHOD_FOODS_SEARCH.to_owned()),
            ("search_expression".to_owned(), query.to_owned()),
            ("format".to_owned(), api::FORMAT_JSON.to_owned()),
            ("max_results".to_owned(), self.max_results.to_string()),
            ("page_number".to_owned(), "0".to_owned()),
        ]))
    }

    /// Sign `params` for `url` with a fresh timestamp and nonce, send, and
    /// check for the API's error envelope
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an API error body
    pub async fn call(&self, url: &str, params: ParameterMap) -> AppResult<Value> {
        let request = self
            .signer
            .build_signed_request(self.http_method, url, params);
        let body = self.execute(&request).await?;
        check_api_error(&body)?;
        Ok(body)
    }

    /// Send one signed request.
    ///
    /// A body that is not JSON is returned as `Value::Null` with a warning and
    /// parses to an empty result.
    ///
    /// # Errors
    ///
    /// Returns `Network` on connection failure or timeout and `HttpStatus` on
    /// a non-success status
    pub async fn execute(&self, request: &SignedRequest) -> AppResult<Value> {
        let builder = match request.transmission() {
            Transmission::QueryString => self.http_client.get(request.request_url()),
            Transmission::FormBody => self
                .http_client
                .post(&request.url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(request.encoded_params()),
        };

        debug!(method = request.method.as_str(), url = %request.url, "Sending FatSecret request");
        let response = builder.send().await.map_err(network_error)?;

        let status = response.status();
        let text = response.text().await.map_err(network_error)?;

        if !status.is_success() {
            warn!("FatSecret API returned HTTP {status}");
            return Err(FatSecretError::HttpStatus {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
            warn!("FatSecret response body is not valid JSON: {e}");
            Value::Null
        }))
    }
}

/// API parameters for a calorie-range recipe search
///
/// # Errors
///
/// Returns `FatSecretError::InvalidInput` for a negative or inverted range or
/// an out-of-range `max_results`
pub fn recipe_search_params(
    min_calories: i64,
    max_calories: i64,
    max_results: u32,
) -> Result<ParameterMap, FatSecretError> {
    if min_calories < 0 {
        return Err(FatSecretError::invalid_input(
            "calories.from",
            format!("must not be negative, got {min_calories}"),
        ));
    }
    if max_calories < min_calories {
        return Err(FatSecretError::invalid_input(
            "calories.to",
            format!("{max_calories} is below calories.from {min_calories}"),
        ));
    }
    if max_results == 0 || max_results > api::MAX_RESULTS_LIMIT {
        return Err(FatSecretError::invalid_input(
            "max_results",
            format!(
                "must be between 1 and {}, got {max_results}",
                api::MAX_RESULTS_LIMIT
            ),
        ));
    }

    Ok(ParameterMap::from([
        ("method".to_owned(), api::METHOD_RECIPES_SEARCH.to_owned()),
        ("format".to_owned(), api::FORMAT_JSON.to_owned()),
        ("search_expression".to_owned(), String::new()),
        ("calories.from".to_owned(), min_calories.to_string()),
        ("calories.to".to_owned(), max_calories.to_string()),
        ("max_results".to_owned(), max_results.to_string()),
        ("page_number".to_owned(), "0".to_owned()),
        (
            "sort_by".to_owned(),
            api::SORT_CALORIES_ASCENDING.to_owned(),
        ),
    ]))
}

fn network_error(e: reqwest::Error) -> FatSecretError {
    FatSecretError::network(e.to_string(), e.is_timeout())
}

fn log_outcome<T>(kind: &str, outcome: &ParseOutcome<T>) {
    info!(
        "FatSecret {kind} search returned {} items ({} skipped)",
        outcome.items.len(),
        outcome.skipped()
    );
}
