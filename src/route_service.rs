//! HTTP adapter for fetching duration tables from a route service.
//!
//! The service is expected to answer `GET {base_url}/routes/{fleet}` with the
//! same JSON document accepted by [`RouteTables::from_json_str`]. Tables are
//! fetched once before planning; the planner never talks to the network.

use crate::error::DispatchError;
use crate::routes::RouteTables;

#[derive(Debug, Clone)]
pub struct RouteServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RouteServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteServiceClient {
    config: RouteServiceConfig,
    client: reqwest::blocking::Client,
}

impl RouteServiceClient {
    pub fn new(config: RouteServiceConfig) -> Result<Self, DispatchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn tables_url(&self, fleet: &str) -> String {
        format!("{}/routes/{}", self.config.base_url.trim_end_matches('/'), fleet)
    }

    /// Fetch the tables for `fleet`. Transport and status errors are returned
    /// to the caller; an unreachable service is never treated as an empty table.
    pub fn fetch_tables(&self, fleet: &str) -> Result<RouteTables, DispatchError> {
        let url = self.tables_url(fleet);
        tracing::debug!(url = %url, "fetching route tables");

        let tables = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())?
            .json::<RouteTables>()?;

        tracing::info!(
            fleet,
            haul_routes = tables.haul.len(),
            reposition_routes = tables.reposition.len(),
            "route tables loaded"
        );

        Ok(tables)
    }
}
