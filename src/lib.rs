// ABOUTME: Library entry point for the FatSecret nutrition search client
// ABOUTME: OAuth 1.0a signing, response normalization, pagination, and the async HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FatSecret Client
//!
//! Searches the FatSecret Platform REST API for foods by text and for recipes
//! by calorie range, authenticating every request with two-legged OAuth 1.0a
//! (HMAC-SHA1).
//!
//! ## Architecture
//!
//! - **`oauth1`**: parameter encoding, signature base string, request signer
//! - **`external::fatsecret`**: response parser and HTTP client
//! - **`pagination`**: fixed-size pages over an already fetched result list
//! - **`retry`**: caller-driven retry that re-signs every attempt
//! - **`config`** / **`logging`**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fatsecret_client::config::FatSecretConfig;
//! use fatsecret_client::errors::AppResult;
//! use fatsecret_client::external::FatSecretClient;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = FatSecretConfig::from_env()?;
//!     let client = FatSecretClient::new(config);
//!
//!     for food in client.search_foods("apple").await? {
//!         println!("{}: {}", food.name, food.calories());
//!     }
//!     Ok(())
//! }
//! ```

pub use fatsecret_core::{constants, errors, models, pagination};

/// Environment configuration
pub mod config;

/// External API clients
pub mod external;

/// Shared HTTP client with configured timeouts
pub mod http_client;

/// Tracing subscriber setup
pub mod logging;

/// OAuth 1.0a request signing
pub mod oauth1;

/// Caller-driven retry with fresh signatures
pub mod retry;

pub use pagination::{page_of, Page, Paginator};
