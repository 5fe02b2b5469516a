//! Catalog service abstraction and implementations
//!
//! `MenuApi` is the seam between the fetch pipeline and the collaborator
//! service. The HTTP implementation talks to the real endpoints; the mock
//! is available to all builds so integration tests can exercise the join
//! logic without a network.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Item, Restaurant};

pub mod http;
pub mod mock;

pub use http::HttpMenuApi;

/// Read-only client for the two catalog endpoints
#[async_trait]
pub trait MenuApi: Send + Sync {
    /// Fetch the restaurant list, in server order. Records arrive without
    /// items attached.
    async fn restaurants(&self) -> Result<Vec<Restaurant>>;

    /// Fetch the item list for one restaurant, in server order.
    async fn items(&self, restaurant_id: u32) -> Result<Vec<Item>>;
}
