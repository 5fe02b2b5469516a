//! Core types for Tably

use serde::{Deserialize, Serialize};

/// A restaurant as served by the list endpoint.
///
/// `items` is not part of the list payload; it stays empty until the catalog
/// join attaches the restaurant's menu. The join is atomic per restaurant:
/// items are either fully attached or empty, never partial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A menu item. `id` is unique only within its parent restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub available_quantity: u32,
}

/// The joined, in-memory collection of restaurants and their items.
///
/// Ordering follows the server's list response. Built once per session;
/// read-only to everything outside the fetch pipeline.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub restaurants: Vec<Restaurant>,
}

impl Catalog {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Look up a restaurant by id.
    pub fn restaurant(&self, id: u32) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Look up an item within a restaurant.
    pub fn item(&self, restaurant_id: u32, item_id: u32) -> Option<&Item> {
        self.restaurant(restaurant_id)
            .and_then(|r| r.items.iter().find(|i| i.id == item_id))
    }
}
