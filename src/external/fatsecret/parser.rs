// ABOUTME: Normalizes FatSecret JSON responses into typed food and recipe results
// ABOUTME: Handles single-object vs array payloads, absent paths, and malformed items without failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::FatSecretError;
use crate::models::{FoodItem, RecipeItem, SearchResultItem};

/// Separator between the serving descriptor and the macro segment
const SERVING_SEPARATOR: &str = " - ";

/// A results payload is either one object or an array of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// Items that parsed, plus what was skipped or unreadable along the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome<T> {
    /// Successfully normalized items, in payload order
    pub items: Vec<T>,
    /// `MalformedResponse` and `PartialItem` records; never fatal
    pub issues: Vec<FatSecretError>,
}

impl<T> ParseOutcome<T> {
    fn empty(issue: FatSecretError) -> Self {
        Self {
            items: Vec::new(),
            issues: vec![issue],
        }
    }

    /// Number of items dropped because they were malformed
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, FatSecretError::PartialItem { .. }))
            .count()
    }

    /// Whether the payload itself could not be read
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| matches!(issue, FatSecretError::MalformedResponse { .. }))
    }

    /// Drop the issue records
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Serving descriptor and macro map split out of a food description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodDescription {
    /// Text before the first `" - "`, e.g. "Per 100g"
    pub serving: Option<String>,
    /// Label to value, e.g. "Calories" -> "52kcal"
    pub nutrients: BTreeMap<String, String>,
}

/// Split a description such as
/// `"Per 100g - Calories: 52kcal | Fat: 0.17g | Carbs: 13.81g | Protein: 0.26g"`.
///
/// Chunks without a `:` are ignored rather than rejected.
#[must_use]
pub fn parse_food_description(description: &str) -> FoodDescription {
    let (serving, macros) = description
        .split_once(SERVING_SEPARATOR)
        .map_or((None, description), |(serving, macros)| {
            (Some(serving.trim()), macros)
        });

    let nutrients = macros
        .split('|')
        .filter_map(|chunk| chunk.split_once(':'))
        .map(|(label, value)| (label.trim(), value.trim()))
        .filter(|(label, _)| !label.is_empty())
        .map(|(label, value)| (label.to_owned(), value.to_owned()))
        .collect();

    FoodDescription {
        serving: serving.filter(|s| !s.is_empty()).map(str::to_owned),
        nutrients,
    }
}

/// The API's in-body error envelope: `{"error": {"code": 8, "message": "..."}}`
///
/// # Errors
///
/// Returns `FatSecretError::Api` when the body carries an error object
pub fn check_api_error(body: &Value) -> Result<(), FatSecretError> {
    let Some(error) = body.get("error").and_then(Value::as_object) else {
        return Ok(());
    };

    let code = error
        .get("code")
        .and_then(|code| {
            code.as_i64()
                .or_else(|| code.as_str().and_then(|s| s.trim().parse().ok()))
        })
        .unwrap_or(0);
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown error")
        .to_owned();

    Err(FatSecretError::Api { code, message })
}

/// Parse a raw response body. Invalid JSON yields an empty, malformed outcome.
#[must_use]
pub fn parse_body(body: &str, result_path: &[&str]) -> ParseOutcome<SearchResultItem> {
    serde_json::from_str::<Value>(body).map_or_else(
        |e| {
            warn!("FatSecret response is not valid JSON: {e}");
            ParseOutcome::empty(FatSecretError::malformed(format!("invalid JSON: {e}")))
        },
        |json| parse(&json, result_path),
    )
}

/// Locate the results under `result_path` and normalize them.
///
/// An absent key anywhere on the path yields an empty list; a single object
/// is treated as a one-element list; each malformed item is skipped on its own.
#[must_use]
pub fn parse(body: &Value, result_path: &[&str]) -> ParseOutcome<SearchResultItem> {
    let Some(payload) = navigate(body, result_path) else {
        let path = result_path.join(".");
        debug!("No results at '{path}' in FatSecret response");
        return ParseOutcome::empty(FatSecretError::malformed(format!(
            "result path '{path}' absent"
        )));
    };

    let raw_items = match OneOrMany::<Value>::deserialize(payload) {
        Ok(raw) => raw.into_vec(),
        Err(e) => {
            return ParseOutcome::empty(FatSecretError::malformed(format!(
                "unreadable result payload: {e}"
            )))
        }
    };

    let mut outcome = ParseOutcome {
        items: Vec::with_capacity(raw_items.len()),
        issues: Vec::new(),
    };
    for (index, raw) in raw_items.iter().enumerate() {
        match classify(index, raw) {
            Ok(item) => outcome.items.push(item),
            Err(issue) => {
                warn!("{issue}");
                outcome.issues.push(issue);
            }
        }
    }
    outcome
}

/// Parse a `foods.search` response
#[must_use]
pub fn parse_foods(body: &Value, result_path: &[&str]) -> ParseOutcome<FoodItem> {
    narrow(parse(body, result_path), "food", SearchResultItem::into_food)
}

/// Parse a `recipes.search.v3` response
#[must_use]
pub fn parse_recipes(body: &Value, result_path: &[&str]) -> ParseOutcome<RecipeItem> {
    narrow(parse(body, result_path), "recipe", SearchResultItem::into_recipe)
}

fn narrow<T>(
    outcome: ParseOutcome<SearchResultItem>,
    expected: &str,
    select: fn(SearchResultItem) -> Option<T>,
) -> ParseOutcome<T> {
    let mut issues = outcome.issues;
    let mut items = Vec::with_capacity(outcome.items.len());
    for (index, item) in outcome.items.into_iter().enumerate() {
        let name = item.name().to_owned();
        let Some(selected) = select(item) else {
            let issue =
                FatSecretError::partial_item(index, format!("'{name}' is not a {expected}"));
            warn!("{issue}");
            issues.push(issue);
            continue;
        };
        items.push(selected);
    }
    ParseOutcome { items, issues }
}

fn navigate<'a>(body: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(body, |node, key| node.get(*key))
        .filter(|payload| !payload.is_null())
}

fn classify(index: usize, raw: &Value) -> Result<SearchResultItem, FatSecretError> {
    let Some(fields) = raw.as_object() else {
        return Err(FatSecretError::partial_item(index, "item is not an object"));
    };

    if fields.contains_key("recipe_id") {
        recipe_from(index, fields).map(SearchResultItem::Recipe)
    } else if fields.contains_key("food_id") {
        food_from(index, fields).map(SearchResultItem::Food)
    } else {
        Err(FatSecretError::partial_item(
            index,
            "item is neither a food nor a recipe",
        ))
    }
}

fn food_from(index: usize, fields: &Map<String, Value>) -> Result<FoodItem, FatSecretError> {
    let id = required(index, fields, "food_id")?;
    let name = required(index, fields, "food_name")?;
    let description = optional(fields, "food_description").unwrap_or_default();
    let FoodDescription { serving, nutrients } = parse_food_description(&description);

    Ok(FoodItem {
        id,
        name,
        url: optional(fields, "food_url"),
        food_type: optional(fields, "food_type"),
        brand_name: optional(fields, "brand_name"),
        description,
        serving,
        nutrients,
    })
}

fn recipe_from(index: usize, fields: &Map<String, Value>) -> Result<RecipeItem, FatSecretError> {
    Ok(RecipeItem {
        id: required(index, fields, "recipe_id")?,
        name: required(index, fields, "recipe_name")?,
        url: required(index, fields, "recipe_url")?,
        description: optional(fields, "recipe_description"),
        image: optional(fields, "recipe_image"),
        calories: fields
            .get("recipe_nutrition")
            .and_then(|nutrition| nutrition.get("calories"))
            .and_then(scalar_string),
    })
}

fn required(
    index: usize,
    fields: &Map<String, Value>,
    key: &str,
) -> Result<String, FatSecretError> {
    optional(fields, key)
        .ok_or_else(|| FatSecretError::partial_item(index, format!("missing '{key}'")))
}

fn optional(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(scalar_string)
}

/// Strings as-is, numbers and booleans stringified; anything else is absent
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
