//! Tably - service layer for the restaurant catalog browser
//!
//! This library provides the data model, configuration, API client, and
//! catalog fetch pipeline consumed by the terminal frontend.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use catalog::CatalogFetcher;
pub use config::Config;
pub use error::{Result, TablyError};
pub use types::{Catalog, Item, Restaurant};
