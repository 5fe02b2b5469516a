//! HTTP implementation of the catalog client

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::api::MenuApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::types::{Item, Restaurant};

/// Envelope of `GET /restaurants`
#[derive(Debug, Deserialize)]
struct RestaurantsResponse {
    rest_list: Vec<Restaurant>,
}

/// Envelope of `GET /items/{restaurant_id}`
#[derive(Debug, Deserialize)]
struct ItemsResponse {
    item_list: Vec<Item>,
}

/// Client for the collaborator's read-only catalog endpoints
pub struct HttpMenuApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMenuApi {
    /// Build a client from config. The per-request timeout is a robustness
    /// addition on top of the endpoint contract.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).send().await.map_err(ApiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                code: status.as_u16(),
            }
            .into());
        }

        Ok(response.json().await.map_err(ApiError::Http)?)
    }
}

#[async_trait]
impl MenuApi for HttpMenuApi {
    async fn restaurants(&self) -> Result<Vec<Restaurant>> {
        let response: RestaurantsResponse = self.get_json("/restaurants").await?;
        Ok(response.rest_list)
    }

    async fn items(&self, restaurant_id: u32) -> Result<Vec<Item>> {
        let endpoint = format!("/items/{}", restaurant_id);
        let response: ItemsResponse = self.get_json(&endpoint).await?;
        Ok(response.item_list)
    }
}
