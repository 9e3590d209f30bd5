//! reqwest-backed taxa autocomplete client

use super::mapping::map_first_result;
use crate::config::FileInaturalistConfig;
use crate::http::build_client;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use taxa_application::{LookupError, TaxonLookup};
use taxa_domain::{QueryItem, TaxonRecord};
use tracing::debug;

/// Lookup adapter for the iNaturalist taxa autocomplete endpoint.
///
/// Each call issues exactly one request; pacing between calls is the
/// runner's concern.
pub struct INaturalistClient {
    client: Client,
    api_base: String,
    observations_base: String,
}

impl INaturalistClient {
    pub fn new(
        client: Client,
        api_base: impl Into<String>,
        observations_base: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            observations_base: observations_base.into(),
        }
    }

    /// Build a client from the `[inaturalist]` config section.
    pub fn from_config(config: &FileInaturalistConfig) -> reqwest::Result<Self> {
        let client = build_client(
            &config.user_agent,
            Duration::from_secs(config.timeout_seconds),
        )?;
        Ok(Self::new(client, &config.api_base, &config.site_base))
    }

    fn autocomplete_url(&self) -> String {
        format!("{}/taxa/autocomplete", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl TaxonLookup for INaturalistClient {
    async fn lookup(&self, item: &QueryItem) -> Result<Option<TaxonRecord>, LookupError> {
        debug!("GET {} q={:?}", self.autocomplete_url(), item.term());

        let response = self
            .client
            .get(self.autocomplete_url())
            .query(&[("q", item.term()), ("per_page", "1"), ("rank", "species")])
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        let payload: Value =
            serde_json::from_slice(&body).map_err(|e| LookupError::Malformed(e.to_string()))?;

        map_first_result(item.term(), &payload, &self.observations_base)
    }
}
