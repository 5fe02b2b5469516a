//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. The three selection
//! intents (`SelectRestaurant`, `SelectItem`, `CloseRestaurant`) are only
//! ever emitted for entries the UI is currently rendering.

use crossterm::event::KeyEvent;
use libtably::Catalog;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Move the focused list cursor up
    CursorUp,

    /// Move the focused list cursor down
    CursorDown,

    // === Selection Intents ===
    /// Open a restaurant's menu; always discards item focus
    SelectRestaurant(u32),

    /// Open an item's detail; valid only while a restaurant is open
    SelectItem(u32),

    /// Close the open restaurant, discarding item focus with it
    CloseRestaurant,

    /// Record an add-to-cart intent for the open item
    AddToCart(u32),

    // === Catalog Lifecycle ===
    /// The one-shot load completed with a fully joined catalog
    CatalogLoaded(Catalog),

    /// The restaurant list request failed; the catalog stays empty
    CatalogLoadFailed(String),

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}
