//! Configuration-driven customer lookup over a REST customer API.
//!
//! The search form and the detail view are described declaratively in
//! [`schema`] and rendered generically; [`repository`] holds the API client
//! with uniform error normalization; [`screens`] wires the terminal flow.

use crate::models::config::AppConfig;
use crate::repository::HttpCustomerRepository;
use crate::schema::{default_display_config, default_search_config};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod schema;
pub mod screens;
pub mod services;

/// Builds the API client and runs the search, results, and detail flow until
/// the user quits.
pub async fn run(app_config: AppConfig) -> std::io::Result<()> {
    // Both schemas are constructed once and shared read-only for the process
    // lifetime.
    let search_config = default_search_config();
    let display_config = default_display_config();

    let repo = HttpCustomerRepository::new(&app_config)
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;
    log::info!("Customer API at {}", app_config.api_base_url);

    loop {
        let outcome = screens::search::run(&repo, &search_config)
            .await
            .map_err(to_io_error)?;
        let Some(outcome) = outcome else {
            return Ok(());
        };
        screens::results::run(&repo, &display_config, outcome.customers, &outcome.criteria)
            .await
            .map_err(to_io_error)?;
    }
}

fn to_io_error(err: dialoguer::Error) -> std::io::Error {
    std::io::Error::other(err)
}
