//! Mock catalog client for testing
//!
//! A configurable double for `MenuApi` that can simulate endpoint failures
//! and per-restaurant latency, so tests can verify the join logic (ordering,
//! failure policy, fan-in) without a network.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::api::MenuApi;
use crate::error::{ApiError, Result};
use crate::types::{Item, Restaurant};

pub struct MockMenuApi {
    restaurants: Vec<Restaurant>,
    items: HashMap<u32, Vec<Item>>,
    list_fails: bool,
    failing_items: HashSet<u32>,
    item_delays: HashMap<u32, Duration>,

    /// Number of times the list endpoint has been called
    pub list_call_count: Arc<Mutex<usize>>,

    /// Restaurant ids the items endpoint has been called for, in call order
    pub items_calls: Arc<Mutex<Vec<u32>>>,
}

impl MockMenuApi {
    pub fn new() -> Self {
        Self {
            restaurants: Vec::new(),
            items: HashMap::new(),
            list_fails: false,
            failing_items: HashSet::new(),
            item_delays: HashMap::new(),
            list_call_count: Arc::new(Mutex::new(0)),
            items_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a restaurant and its item list
    pub fn with_restaurant(mut self, id: u32, name: &str, location: &str, items: Vec<Item>) -> Self {
        self.restaurants.push(Restaurant {
            id,
            name: name.to_string(),
            location: location.to_string(),
            items: Vec::new(),
        });
        self.items.insert(id, items);
        self
    }

    /// Make the list endpoint fail
    pub fn with_list_failure(mut self) -> Self {
        self.list_fails = true;
        self
    }

    /// Make the items endpoint fail for one restaurant
    pub fn with_items_failure(mut self, restaurant_id: u32) -> Self {
        self.failing_items.insert(restaurant_id);
        self
    }

    /// Delay the items response for one restaurant (simulates a slow fetch,
    /// scrambling completion order)
    pub fn with_items_delay(mut self, restaurant_id: u32, delay: Duration) -> Self {
        self.item_delays.insert(restaurant_id, delay);
        self
    }
}

impl Default for MockMenuApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MenuApi for MockMenuApi {
    async fn restaurants(&self) -> Result<Vec<Restaurant>> {
        *self.list_call_count.lock().unwrap() += 1;

        if self.list_fails {
            return Err(ApiError::Status {
                endpoint: "/restaurants".to_string(),
                code: 500,
            }
            .into());
        }

        Ok(self.restaurants.clone())
    }

    async fn items(&self, restaurant_id: u32) -> Result<Vec<Item>> {
        self.items_calls.lock().unwrap().push(restaurant_id);

        if let Some(delay) = self.item_delays.get(&restaurant_id) {
            sleep(*delay).await;
        }

        if self.failing_items.contains(&restaurant_id) {
            return Err(ApiError::Status {
                endpoint: format!("/items/{}", restaurant_id),
                code: 500,
            }
            .into());
        }

        Ok(self.items.get(&restaurant_id).cloned().unwrap_or_default())
    }
}

/// Shorthand for building mock items
pub fn item(id: u32, name: &str, price: f64, quantity: u32) -> Item {
    Item {
        id,
        name: name.to_string(),
        price,
        description: None,
        available_quantity: quantity,
    }
}
