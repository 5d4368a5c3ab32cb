// ABOUTME: Search commands for fatsecret-cli
// ABOUTME: Runs food and recipe searches with retry and prints the requested page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use fatsecret_client::{external::FatSecretClient, page_of, retry::with_retry, retry::RetryPolicy};
use tracing::info;

use crate::helpers::display;

/// Calorie bounds for a recipe search
#[derive(Debug, Clone, Copy)]
pub struct CalorieRange {
    pub min: i64,
    pub max: i64,
}

/// Search foods and print one page
pub async fn foods(
    client: &FatSecretClient,
    policy: &RetryPolicy,
    query: &str,
    page: i64,
    page_size: usize,
    json: bool,
) -> Result<()> {
    info!("Searching foods for '{query}'");
    let items = with_retry(policy, || client.search_foods(query))
        .await
        .with_context(|| format!("Food search for '{query}' failed"))?;

    let page = page_of(&items, page_size, page.saturating_sub(1));
    if json {
        display::print_json(&page)?;
    } else {
        display::print_food_page(&page);
    }
    Ok(())
}

/// Search recipes by calorie range and print one page
pub async fn recipes(
    client: &FatSecretClient,
    policy: &RetryPolicy,
    range: CalorieRange,
    max_results: u32,
    page: i64,
    page_size: usize,
    json: bool,
) -> Result<()> {
    info!("Searching recipes between {} and {} kcal", range.min, range.max);
    let items = with_retry(policy, || {
        client.search_recipes_by_calories(range.min, range.max, max_results)
    })
    .await
    .context("Recipe search failed")?;

    let page = page_of(&items, page_size, page.saturating_sub(1));
    if json {
        display::print_json(&page)?;
    } else {
        display::print_recipe_page(&page);
    }
    Ok(())
}
