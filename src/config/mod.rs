// ABOUTME: Configuration module for the FatSecret client
// ABOUTME: Environment-sourced credentials, endpoints, timeouts, and transmission method
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing and endpoint validation
pub mod environment;

pub use environment::{validate_endpoint, FatSecretConfig};
