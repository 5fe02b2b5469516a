//! Catalog fetch pipeline
//!
//! Builds the in-memory catalog with a fan-out/fan-in join: one request for
//! the restaurant list, then one concurrent request per restaurant for its
//! items. The catalog is published only as a whole; consumers never see a
//! half-joined state.

use futures::future::join_all;
use std::sync::Arc;

use crate::api::MenuApi;
use crate::error::Result;
use crate::types::Catalog;

pub struct CatalogFetcher {
    api: Arc<dyn MenuApi>,
}

impl CatalogFetcher {
    pub fn new(api: Arc<dyn MenuApi>) -> Self {
        Self { api }
    }

    /// Load the full catalog.
    ///
    /// Restaurant order follows the list response regardless of which item
    /// request completes first. A failed item request degrades that one
    /// restaurant to an empty menu instead of aborting the join; a failed
    /// list request fails the whole load.
    pub async fn load(&self) -> Result<Catalog> {
        let restaurants = self.api.restaurants().await.map_err(|e| {
            tracing::error!(error = %e, "restaurant list fetch failed");
            e
        })?;

        tracing::debug!(count = restaurants.len(), "restaurant list fetched");

        let fetches = restaurants.iter().map(|r| self.api.items(r.id));
        let results = join_all(fetches).await;

        let joined = restaurants
            .into_iter()
            .zip(results)
            .map(|(mut restaurant, result)| {
                match result {
                    Ok(items) => restaurant.items = items,
                    Err(e) => {
                        tracing::warn!(
                            restaurant_id = restaurant.id,
                            error = %e,
                            "item list fetch failed, degrading to empty menu"
                        );
                    }
                }
                restaurant
            })
            .collect();

        Ok(Catalog::new(joined))
    }
}
