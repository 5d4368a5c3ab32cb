// ABOUTME: Protocol and API constants for FatSecret OAuth 1.0a requests
// ABOUTME: Parameter names, default endpoints, result paths, and API limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// OAuth 1.0a parameter names and fixed values
pub mod oauth {
    /// Consumer key parameter
    pub const CONSUMER_KEY: &str = "oauth_consumer_key";
    /// Signature method parameter
    pub const SIGNATURE_METHOD: &str = "oauth_signature_method";
    /// Timestamp parameter
    pub const TIMESTAMP: &str = "oauth_timestamp";
    /// Nonce parameter
    pub const NONCE: &str = "oauth_nonce";
    /// Version parameter
    pub const VERSION: &str = "oauth_version";
    /// Signature parameter, added after the signature is computed
    pub const SIGNATURE: &str = "oauth_signature";

    /// The only signature method supported
    pub const HMAC_SHA1: &str = "HMAC-SHA1";
    /// Protocol version sent with every request
    pub const VERSION_1_0: &str = "1.0";

    /// Number of random bytes in a nonce (128 bits)
    pub const NONCE_BYTES: usize = 16;
}

/// FatSecret REST API values
pub mod api {
    /// Default endpoint for method-dispatched calls (`foods.search`)
    pub const DEFAULT_API_URL: &str = "https://platform.fatsecret.com/rest/server.api";
    /// Default endpoint for recipe search
    pub const DEFAULT_RECIPES_URL: &str = "https://platform.fatsecret.com/rest/recipes/search/v3";

    /// Food search operation name
    pub const METHOD_FOODS_SEARCH: &str = "foods.search";
    /// Recipe search operation name
    pub const METHOD_RECIPES_SEARCH: &str = "recipes.search.v3";

    /// Response format requested from the API
    pub const FORMAT_JSON: &str = "json";
    /// Recipe ordering used for calorie-range searches
    pub const SORT_CALORIES_ASCENDING: &str = "caloriesPerServingAscending";

    /// Nested key path of the food results payload
    pub const FOODS_RESULT_PATH: [&str; 2] = ["foods", "food"];
    /// Nested key path of the recipe results payload
    pub const RECIPES_RESULT_PATH: [&str; 2] = ["recipes", "recipe"];

    /// Largest `max_results` the API accepts
    pub const MAX_RESULTS_LIMIT: u32 = 50;
    /// Default `max_results` for food searches
    pub const DEFAULT_MAX_RESULTS: u32 = 20;

    /// API error code: invalid or expired timestamp
    pub const ERROR_INVALID_TIMESTAMP: i64 = 6;
    /// API error code: invalid or already used nonce
    pub const ERROR_INVALID_NONCE: i64 = 7;
}

/// Result rendering values
pub mod display {
    /// Placeholder for nutrient labels absent from a food description
    pub const MISSING_VALUE: &str = "—";
    /// Default number of items per page
    pub const DEFAULT_PAGE_SIZE: usize = 5;
}

/// Environment variable names
pub mod env_config {
    /// Consumer key
    pub const FATSECRET_KEY: &str = "FATSECRET_KEY";
    /// Consumer secret
    pub const FATSECRET_SECRET: &str = "FATSECRET_SECRET";
    /// Method-dispatched API endpoint
    pub const FATSECRET_API_URL: &str = "FATSECRET_API_URL";
    /// Recipe search endpoint
    pub const FATSECRET_RECIPES_URL: &str = "FATSECRET_RECIPES_URL";
    /// Request timeout in seconds
    pub const FATSECRET_HTTP_TIMEOUT_SECS: &str = "FATSECRET_HTTP_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const FATSECRET_CONNECT_TIMEOUT_SECS: &str = "FATSECRET_CONNECT_TIMEOUT_SECS";
    /// Default food result count
    pub const FATSECRET_MAX_RESULTS: &str = "FATSECRET_MAX_RESULTS";
    /// Transmission method (GET or POST)
    pub const FATSECRET_HTTP_METHOD: &str = "FATSECRET_HTTP_METHOD";
}

/// HTTP client defaults
pub mod http {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}
