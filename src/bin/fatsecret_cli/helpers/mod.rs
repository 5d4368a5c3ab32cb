// ABOUTME: Helper modules for fatsecret-cli
// ABOUTME: Provides output formatting for search pages and signatures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
