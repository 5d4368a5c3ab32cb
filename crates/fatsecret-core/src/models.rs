// ABOUTME: Normalized search result models for FatSecret food and recipe searches
// ABOUTME: FoodItem with serving descriptor and macro map, RecipeItem, and the tagged SearchResultItem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::display::MISSING_VALUE;

/// Macro labels as they appear in FatSecret food descriptions
pub mod labels {
    /// Energy label
    pub const CALORIES: &str = "Calories";
    /// Fat label
    pub const FAT: &str = "Fat";
    /// Carbohydrate label
    pub const CARBS: &str = "Carbs";
    /// Protein label
    pub const PROTEIN: &str = "Protein";
}

/// A food returned by `foods.search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    /// FatSecret food ID
    pub id: String,
    /// Food name
    pub name: String,
    /// FatSecret page for the food
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// "Generic" or "Brand"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_type: Option<String>,
    /// Brand owner for branded foods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    /// Raw description as received
    pub description: String,
    /// Serving descriptor, e.g. "Per 100g"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving: Option<String>,
    /// Macro label to value, e.g. "Fat" -> "0.17g"
    pub nutrients: BTreeMap<String, String>,
}

impl FoodItem {
    /// Value for a macro label, or the placeholder when the description lacks it
    #[must_use]
    pub fn nutrient(&self, label: &str) -> &str {
        self.nutrients
            .get(label)
            .map_or(MISSING_VALUE, String::as_str)
    }

    /// Energy per serving
    #[must_use]
    pub fn calories(&self) -> &str {
        self.nutrient(labels::CALORIES)
    }

    /// Fat per serving
    #[must_use]
    pub fn fat(&self) -> &str {
        self.nutrient(labels::FAT)
    }

    /// Carbohydrates per serving
    #[must_use]
    pub fn carbs(&self) -> &str {
        self.nutrient(labels::CARBS)
    }

    /// Protein per serving
    #[must_use]
    pub fn protein(&self) -> &str {
        self.nutrient(labels::PROTEIN)
    }
}

/// A recipe returned by `recipes.search.v3`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeItem {
    /// FatSecret recipe ID
    pub id: String,
    /// Recipe name
    pub name: String,
    /// FatSecret page for the recipe
    pub url: String,
    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Calories per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
}

/// One normalized search result, whichever API shape it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchResultItem {
    /// Food search result
    Food(FoodItem),
    /// Recipe search result
    Recipe(RecipeItem),
}

impl SearchResultItem {
    /// Display name of the item
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Food(food) => &food.name,
            Self::Recipe(recipe) => &recipe.name,
        }
    }

    /// The food, if this is a food result
    #[must_use]
    pub fn into_food(self) -> Option<FoodItem> {
        match self {
            Self::Food(food) => Some(food),
            Self::Recipe(_) => None,
        }
    }

    /// The recipe, if this is a recipe result
    #[must_use]
    pub fn into_recipe(self) -> Option<RecipeItem> {
        match self {
            Self::Recipe(recipe) => Some(recipe),
            Self::Food(_) => None,
        }
    }
}
