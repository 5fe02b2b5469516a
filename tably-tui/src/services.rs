//! Service layer adapter for the TUI
//!
//! Bridges the async catalog fetch onto the synchronous event loop:
//! `ServiceHandle` owns a tokio runtime, runs the one-shot load on it, and
//! delivers the result over a crossbeam channel the loop can drain with
//! `try_recv`. Dropping the handle (or just the receiver) abandons an
//! in-flight load; its result is discarded instead of being applied to a
//! torn-down view.

use crossbeam_channel::{unbounded, Receiver};
use std::sync::Arc;

use libtably::api::HttpMenuApi;
use libtably::{CatalogFetcher, Config};

use crate::error::Result;

/// Outcome of the one-shot catalog load
#[derive(Debug, Clone)]
pub enum CatalogEvent {
    /// The fully joined catalog
    Loaded(libtably::Catalog),

    /// The restaurant list request failed
    LoadFailed(String),
}

/// Service handle for TUI operations
pub struct ServiceHandle {
    runtime: tokio::runtime::Runtime,
    fetcher: Arc<CatalogFetcher>,
    load_started: bool,
}

impl ServiceHandle {
    /// Create a service handle backed by the HTTP client from config
    pub fn new(config: &Config) -> Result<Self> {
        let api = HttpMenuApi::new(&config.api)?;
        Self::with_fetcher(Arc::new(CatalogFetcher::new(Arc::new(api))))
    }

    /// Create a service handle around an existing fetcher (tests use this
    /// with the mock API)
    pub fn with_fetcher(fetcher: Arc<CatalogFetcher>) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        Ok(Self {
            runtime,
            fetcher,
            load_started: false,
        })
    }

    /// Start the catalog load and return the receiver for its outcome.
    ///
    /// Runs exactly once per handle lifetime: repeated calls (re-renders,
    /// accidental double mounts) return None instead of refetching.
    pub fn start_load(&mut self) -> Option<Receiver<CatalogEvent>> {
        if self.load_started {
            return None;
        }
        self.load_started = true;

        let (tx, rx) = unbounded();
        let fetcher = Arc::clone(&self.fetcher);

        self.runtime.spawn(async move {
            let event = match fetcher.load().await {
                Ok(catalog) => CatalogEvent::Loaded(catalog),
                Err(e) => CatalogEvent::LoadFailed(e.to_string()),
            };

            // A dropped receiver means the view is gone; discard the result
            if tx.send(event).is_err() {
                tracing::debug!("catalog load finished after teardown, result discarded");
            }
        });

        Some(rx)
    }
}
