// ABOUTME: FatSecret Platform API integration
// ABOUTME: HTTP client for signed searches and the response normalizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Signed search client
pub mod client;
/// Response normalization
pub mod parser;

pub use client::{recipe_search_params, FatSecretClient};
pub use parser::{
    check_api_error, parse, parse_body, parse_food_description, parse_foods, parse_recipes,
    FoodDescription, ParseOutcome,
};
