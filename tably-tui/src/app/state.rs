//! Application state
//!
//! Single source of truth for the TUI. All transitions happen through the
//! reducer (see `reducer.rs`); rendering never mutates this.

use libtably::Catalog;

/// The three-level selection hierarchy.
///
/// Item focus is only meaningful nested inside restaurant focus, and the
/// reducer can only construct `Item` from a state where that restaurant is
/// already open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Nothing open
    None,

    /// A restaurant's menu is open
    Restaurant { restaurant_id: u32 },

    /// An item's detail is open inside its restaurant's menu
    Item { restaurant_id: u32, item_id: u32 },
}

impl Selection {
    /// Id of the open restaurant, in either open state
    pub fn open_restaurant(&self) -> Option<u32> {
        match *self {
            Selection::None => None,
            Selection::Restaurant { restaurant_id } => Some(restaurant_id),
            Selection::Item { restaurant_id, .. } => Some(restaurant_id),
        }
    }

    /// Id pair of the open item, if any
    pub fn open_item(&self) -> Option<(u32, u32)> {
        match *self {
            Selection::Item {
                restaurant_id,
                item_id,
            } => Some((restaurant_id, item_id)),
            _ => None,
        }
    }
}

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Is the one-shot catalog load still in flight?
    pub loading: bool,

    /// The joined catalog; read-only outside the load actions
    pub catalog: Catalog,

    /// Current selection hierarchy
    pub selection: Selection,

    /// Cursor position in the restaurant pane
    pub restaurant_cursor: usize,

    /// Cursor position in the menu pane
    pub item_cursor: usize,

    /// Recorded add-to-cart intents as (restaurant_id, item_id); there is
    /// no cart subsystem behind this
    pub cart_intents: Vec<(u32, u32)>,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            loading: true,
            catalog: Catalog::default(),
            selection: Selection::None,
            restaurant_cursor: 0,
            item_cursor: 0,
            cart_intents: Vec::new(),
            help_visible: false,
            status: StatusBarState::default(),
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let tick_rate_ms = std::env::var("TABLY_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self { tick_rate_ms }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The restaurant whose menu is currently open
    pub fn open_restaurant(&self) -> Option<&libtably::Restaurant> {
        self.selection
            .open_restaurant()
            .and_then(|id| self.catalog.restaurant(id))
    }

    /// The item whose detail is currently open
    pub fn open_item(&self) -> Option<&libtably::Item> {
        self.selection
            .open_item()
            .and_then(|(rid, iid)| self.catalog.item(rid, iid))
    }
}
