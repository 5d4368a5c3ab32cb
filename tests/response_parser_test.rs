// ABOUTME: Integration tests for FatSecret response normalization
// ABOUTME: Covers single vs array payloads, absent paths, error envelopes, and skipped items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fatsecret_client::constants::api::{FOODS_RESULT_PATH, RECIPES_RESULT_PATH};
use fatsecret_client::constants::display::MISSING_VALUE;
use fatsecret_client::errors::FatSecretError;
use fatsecret_client::external::fatsecret::{
    check_api_error, parse, parse_body, parse_foods, parse_recipes,
};
use fatsecret_client::models::SearchResultItem;
use serde_json::json;

#[test]
fn test_single_recipe_object_becomes_one_item() {
    let body = json!({
        "recipes": {"recipe": {"recipe_id": "1", "recipe_name": "Soup", "recipe_url": "http://x"}}
    });

    let outcome = parse(&body, &RECIPES_RESULT_PATH);
    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.items.len(), 1);
    match &outcome.items[0] {
        SearchResultItem::Recipe(recipe) => {
            assert_eq!(recipe.id, "1");
            assert_eq!(recipe.name, "Soup");
            assert_eq!(recipe.url, "http://x");
        }
        SearchResultItem::Food(_) => panic!("expected a recipe"),
    }
}

#[test]
fn test_single_object_and_one_element_array_are_equivalent() {
    let recipe = json!({"recipe_id": 7, "recipe_name": "Stew", "recipe_url": "http://stew"});
    let single = parse_recipes(&json!({"recipes": {"recipe": recipe.clone()}}), &RECIPES_RESULT_PATH);
    let array = parse_recipes(&json!({"recipes": {"recipe": [recipe]}}), &RECIPES_RESULT_PATH);
    assert_eq!(single.items, array.items);
    assert_eq!(single.items[0].id, "7");
}

#[test]
fn test_absent_path_yields_empty_list() {
    let zero_results = json!({"foods": {"max_results": "20", "page_number": "0", "total_results": "0"}});
    let outcome = parse_foods(&zero_results, &FOODS_RESULT_PATH);
    assert!(outcome.items.is_empty());
    assert!(outcome.is_malformed());

    let outcome = parse_recipes(&json!({}), &RECIPES_RESULT_PATH);
    assert!(outcome.items.is_empty());
}

#[test]
fn test_invalid_json_body_yields_empty_list() {
    let outcome = parse_body("<html>502 Bad Gateway</html>", &FOODS_RESULT_PATH);
    assert!(outcome.items.is_empty());
    assert!(matches!(
        outcome.issues.as_slice(),
        [FatSecretError::MalformedResponse { .. }]
    ));
}

#[test]
fn test_food_description_macros_extracted() {
    let body = json!({
        "foods": {"food": [{
            "food_id": "35718",
            "food_name": "Apples",
            "food_type": "Generic",
            "food_url": "https://www.fatsecret.com/calories-nutrition/usda/apples",
            "food_description": "Per 100g - Calories: 52kcal | Fat: 0.17g | Carbs: 13.81g | Protein: 0.26g"
        }]}
    });

    let foods = parse_foods(&body, &FOODS_RESULT_PATH).into_items();
    assert_eq!(foods.len(), 1);
    let apple = &foods[0];
    assert_eq!(apple.serving.as_deref(), Some("Per 100g"));
    assert_eq!(apple.calories(), "52kcal");
    assert_eq!(apple.fat(), "0.17g");
    assert_eq!(apple.carbs(), "13.81g");
    assert_eq!(apple.protein(), "0.26g");
    assert_eq!(apple.food_type.as_deref(), Some("Generic"));
}

#[test]
fn test_missing_macro_labels_use_placeholder() {
    let body = json!({
        "foods": {"food": {"food_id": 1, "food_name": "Water", "food_description": "Per 1 cup - Calories: 0kcal"}}
    });

    let foods = parse_foods(&body, &FOODS_RESULT_PATH).into_items();
    assert_eq!(foods[0].id, "1");
    assert_eq!(foods[0].calories(), "0kcal");
    assert_eq!(foods[0].protein(), MISSING_VALUE);
    assert_eq!(foods[0].fat(), MISSING_VALUE);
}

#[test]
fn test_malformed_item_is_skipped_not_fatal() {
    let body = json!({
        "foods": {"food": [
            {"food_id": "1", "food_name": "Good", "food_description": "Calories: 10kcal"},
            {"food_id": "2"},
            "garbage",
            {"unrelated": true},
            {"food_id": "3", "food_name": "Also good"}
        ]}
    });

    let outcome = parse_foods(&body, &FOODS_RESULT_PATH);
    let names: Vec<&str> = outcome.items.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Good", "Also good"]);
    assert_eq!(outcome.skipped(), 3);
    assert!(matches!(
        outcome.issues[0],
        FatSecretError::PartialItem { index: 1, .. }
    ));
}

#[test]
fn test_items_are_classified_by_identifier() {
    let body = json!({
        "results": {"item": [
            {"recipe_id": "9", "recipe_name": "Pie", "recipe_url": "http://pie"},
            {"food_id": "8", "food_name": "Flour"}
        ]}
    });

    let items = parse(&body, &["results", "item"]).into_items();
    assert!(matches!(items[0], SearchResultItem::Recipe(_)));
    assert!(matches!(items[1], SearchResultItem::Food(_)));
}

#[test]
fn test_recipe_optional_fields() {
    let body = json!({
        "recipes": {"recipe": {
            "recipe_id": "91",
            "recipe_name": "Baked Salmon",
            "recipe_url": "https://www.fatsecret.com/recipes/baked-salmon/Default.aspx",
            "recipe_description": "Simple oven salmon",
            "recipe_image": "https://m.ftscrt.com/static/recipe/salmon.jpg",
            "recipe_nutrition": {"calories": "367", "fat": "22.1"}
        }}
    });

    let recipes = parse_recipes(&body, &RECIPES_RESULT_PATH).into_items();
    assert_eq!(recipes[0].calories.as_deref(), Some("367"));
    assert_eq!(recipes[0].description.as_deref(), Some("Simple oven salmon"));
    assert!(recipes[0].image.is_some());
}

#[test]
fn test_api_error_envelope_detected() {
    let body = json!({"error": {"code": 8, "message": "Invalid signature: oauth_signature 'x'"}});
    let error = check_api_error(&body).unwrap_err();
    assert_eq!(
        error,
        FatSecretError::Api {
            code: 8,
            message: "Invalid signature: oauth_signature 'x'".to_owned()
        }
    );
    assert!(!error.is_retriable());

    let nonce = check_api_error(&json!({"error": {"code": "7", "message": "Invalid nonce"}})).unwrap_err();
    assert!(nonce.is_retriable());

    assert!(check_api_error(&json!({"foods": {}})).is_ok());
}
