// ABOUTME: External API client modules (FatSecret Platform)
// ABOUTME: Food and recipe search over OAuth 1.0a signed requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients

/// FatSecret Platform REST API
pub mod fatsecret;

pub use fatsecret::{FatSecretClient, ParseOutcome};
