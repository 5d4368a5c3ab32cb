// ABOUTME: Output formatting helpers for fatsecret-cli
// ABOUTME: Plain-text and JSON rendering of result pages and signing reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fatsecret_client::{
    constants::display::MISSING_VALUE,
    models::{FoodItem, RecipeItem},
    oauth1::HttpMethod,
    Page,
};
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_header<T>(page: &Page<'_, T>, noun: &str) {
    if page.total_items == 0 {
        println!("No {noun}s found.");
        return;
    }
    println!(
        "Page {}/{} ({} {noun}s)",
        page.number(),
        page.total_pages,
        page.total_items
    );
    println!("{}", "=".repeat(60));
}

fn print_footer<T>(page: &Page<'_, T>) {
    if page.total_items == 0 {
        return;
    }
    let mut hints = Vec::new();
    if page.has_prev() {
        hints.push(format!("--page {} for previous", page.number() - 1));
    }
    if page.has_next() {
        hints.push(format!("--page {} for next", page.number() + 1));
    }
    if !hints.is_empty() {
        println!("{}", hints.join(", "));
    }
}

/// Print a page of foods with their macros
pub fn print_food_page(page: &Page<'_, FoodItem>) {
    print_header(page, "food");
    for food in page.items {
        let brand = food
            .brand_name
            .as_deref()
            .map_or_else(String::new, |brand| format!(" ({brand})"));
        println!("{}{brand}", food.name);
        println!(
            "   {}: Calories {} | Fat {} | Carbs {} | Protein {}",
            food.serving.as_deref().unwrap_or(MISSING_VALUE),
            food.calories(),
            food.fat(),
            food.carbs(),
            food.protein()
        );
    }
    print_footer(page);
}

/// Print a page of recipes
pub fn print_recipe_page(page: &Page<'_, RecipeItem>) {
    print_header(page, "recipe");
    for recipe in page.items {
        println!(
            "{} ({} kcal)",
            recipe.name,
            recipe.calories.as_deref().unwrap_or(MISSING_VALUE)
        );
        println!("   {}", recipe.url);
        if let Some(description) = &recipe.description {
            println!("   {description}");
        }
    }
    print_footer(page);
}

/// Everything the sign command reports
pub struct SignatureReport<'a> {
    pub method: HttpMethod,
    pub normalized: &'a str,
    pub base_string: &'a str,
    pub signature: &'a str,
    pub request_url: &'a str,
    pub body: &'a str,
}

/// Print the signing steps one per section
pub fn print_signature(report: &SignatureReport<'_>) {
    println!("Normalized parameters:\n   {}", report.normalized);
    println!("Signature base string:\n   {}", report.base_string);
    println!("oauth_signature:\n   {}", report.signature);
    match report.method {
        HttpMethod::Get => println!("GET {}", report.request_url),
        HttpMethod::Post => {
            println!("POST {}", report.request_url);
            println!("Content-Type: application/x-www-form-urlencoded\n\n{}", report.body);
        }
    }
}
