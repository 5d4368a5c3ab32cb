// ABOUTME: Command modules for fatsecret-cli
// ABOUTME: Food and recipe searches plus offline request signing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod search;
pub mod sign;
