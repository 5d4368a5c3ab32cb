// ABOUTME: Core types and constants for the FatSecret nutrition and recipe search client
// ABOUTME: Foundation crate with error handling, result models, pagination, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FatSecret Core
//!
//! Foundation crate providing shared types and constants for the FatSecret
//! search client. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `FatSecretError`
//! - **constants**: OAuth 1.0a parameter names, endpoints, and API limits
//! - **models**: Normalized search results (`FoodItem`, `RecipeItem`, `SearchResultItem`)
//! - **pagination**: Offset pagination with clamped navigation over result lists

/// Unified error handling system with standard error codes
pub mod errors;

/// Protocol and API constants organized by domain
pub mod constants;

/// Normalized search result models
pub mod models;

/// Fixed-size page slicing and page navigation
pub mod pagination;
