// ABOUTME: fatsecret-cli - command-line host for FatSecret food and recipe searches
// ABOUTME: Loads configuration from the environment, runs signed searches, and pages through results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! export FATSECRET_KEY=... FATSECRET_SECRET=...
//!
//! # Search foods, second page of five
//! fatsecret-cli foods "greek yogurt" --page 2
//!
//! # Recipes between 200 and 400 kcal per serving, as JSON
//! fatsecret-cli recipes --min 200 --max 400 --json
//!
//! # Show the base string and signature for a request
//! fatsecret-cli sign https://platform.fatsecret.com/rest/server.api --param method=foods.search
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fatsecret_client::{
    config::FatSecretConfig, constants::display::DEFAULT_PAGE_SIZE, external::FatSecretClient,
    logging::LoggingConfig, retry::RetryPolicy,
};

#[derive(Parser)]
#[command(
    name = "fatsecret-cli",
    version,
    about = "FatSecret food and recipe search",
    long_about = "Searches the FatSecret Platform API with OAuth 1.0a signed requests. \
                  Credentials are read from FATSECRET_KEY and FATSECRET_SECRET."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Extra attempts for timeouts, rate limits, and rejected timestamps or nonces
    #[arg(long, global = true, default_value_t = 2)]
    retries: u32,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search foods by text
    Foods {
        /// Search expression
        query: String,

        /// Page to show, starting at 1
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Results per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },

    /// Search recipes by calories per serving
    Recipes {
        /// Lowest calories per serving
        #[arg(long, allow_negative_numbers = true)]
        min: i64,

        /// Highest calories per serving
        #[arg(long, allow_negative_numbers = true)]
        max: i64,

        /// Number of recipes to fetch (1-50)
        #[arg(long, default_value_t = 10)]
        max_results: u32,

        /// Page to show, starting at 1
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Results per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },

    /// Sign a request without sending it
    Sign {
        /// Endpoint URL, without query string
        url: String,

        /// HTTP method (GET or POST)
        #[arg(long, default_value = "GET")]
        method: String,

        /// API parameter as key=value, repeatable
        #[arg(long = "param", value_parser = commands::sign::parse_param)]
        params: Vec<(String, String)>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: if cli.verbose { "debug" } else { "warn" }.into(),
        ..LoggingConfig::from_env()
    };
    logging.init()?;

    let config = FatSecretConfig::from_env().context("Failed to load FatSecret configuration")?;
    let policy = RetryPolicy::with_attempts(cli.retries.saturating_add(1));

    match cli.command {
        Command::Foods {
            query,
            page,
            page_size,
        } => {
            let client = FatSecretClient::new(config);
            commands::search::foods(&client, &policy, &query, page, page_size, cli.json).await?;
        }
        Command::Recipes {
            min,
            max,
            max_results,
            page,
            page_size,
        } => {
            let client = FatSecretClient::new(config);
            let range = commands::search::CalorieRange { min, max };
            commands::search::recipes(
                &client,
                &policy,
                range,
                max_results,
                page,
                page_size,
                cli.json,
            )
            .await?;
        }
        Command::Sign {
            url,
            method,
            params,
        } => {
            commands::sign::run(&config, &url, &method, params, cli.json)?;
        }
    }

    Ok(())
}
