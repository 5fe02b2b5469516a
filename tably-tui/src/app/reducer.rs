//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, no I/O and no side effects. The selection
//! transition table lives here: selecting a restaurant always discards item
//! focus, an item can only open inside an open restaurant, and closing the
//! restaurant drops both levels.

use crossterm::event::{KeyCode, KeyModifiers};

use super::actions::Action;
use super::state::{AppState, Selection, StatusBarState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
/// Deterministic: same inputs, same output.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::CursorUp => move_cursor(state, -1),
        Action::CursorDown => move_cursor(state, 1),

        // === Selection Intents ===
        Action::SelectRestaurant(restaurant_id) => {
            // Reselecting the open restaurant takes the same path: item
            // focus is discarded either way.
            let restaurant_cursor = state
                .catalog
                .restaurants
                .iter()
                .position(|r| r.id == restaurant_id)
                .unwrap_or(state.restaurant_cursor);

            AppState {
                selection: Selection::Restaurant { restaurant_id },
                restaurant_cursor,
                item_cursor: 0,
                ..state
            }
        }

        Action::SelectItem(item_id) => select_item(state, item_id),

        Action::CloseRestaurant => AppState {
            selection: Selection::None,
            item_cursor: 0,
            ..state
        },

        Action::AddToCart(item_id) => add_to_cart(state, item_id),

        // === Catalog Lifecycle ===
        Action::CatalogLoaded(catalog) => {
            let message = if catalog.is_empty() {
                "No restaurants available".to_string()
            } else {
                format!("Loaded {} restaurants", catalog.len())
            };

            AppState {
                catalog,
                loading: false,
                restaurant_cursor: 0,
                status: StatusBarState {
                    message: Some(message),
                },
                ..state
            }
        }

        Action::CatalogLoadFailed(error) => AppState {
            loading: false,
            status: StatusBarState {
                message: Some(format!("Could not load catalog: {}", error)),
            },
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

/// Open an item's detail pane.
///
/// Only valid while a restaurant is open; the keymap never emits this
/// otherwise, so the unreachable arm is a caller bug rather than a runtime
/// condition to recover from.
fn select_item(state: AppState, item_id: u32) -> AppState {
    match state.selection {
        Selection::Restaurant { restaurant_id } | Selection::Item { restaurant_id, .. } => {
            let item_cursor = state
                .catalog
                .restaurant(restaurant_id)
                .and_then(|r| r.items.iter().position(|i| i.id == item_id))
                .unwrap_or(state.item_cursor);

            AppState {
                selection: Selection::Item {
                    restaurant_id,
                    item_id,
                },
                item_cursor,
                ..state
            }
        }
        Selection::None => {
            debug_assert!(false, "SelectItem dispatched with no open restaurant");
            state
        }
    }
}

/// Record an add-to-cart intent for the open item. There is no cart
/// subsystem; the intent is kept in state and echoed in the status bar.
fn add_to_cart(state: AppState, item_id: u32) -> AppState {
    let Some((restaurant_id, open_item_id)) = state.selection.open_item() else {
        debug_assert!(false, "AddToCart dispatched with no open item");
        return state;
    };
    debug_assert_eq!(open_item_id, item_id, "AddToCart for an item that is not open");

    let message = state
        .catalog
        .item(restaurant_id, item_id)
        .map(|i| format!("Added to cart: {}", i.name));

    let mut cart_intents = state.cart_intents.clone();
    cart_intents.push((restaurant_id, item_id));

    AppState {
        cart_intents,
        status: StatusBarState { message },
        ..state
    }
}

/// Move the cursor of whichever list pane has focus
fn move_cursor(state: AppState, delta: i32) -> AppState {
    match state.selection {
        Selection::None => {
            let cursor = step(state.restaurant_cursor, delta, state.catalog.len());
            AppState {
                restaurant_cursor: cursor,
                ..state
            }
        }
        Selection::Restaurant { restaurant_id } => {
            let len = state
                .catalog
                .restaurant(restaurant_id)
                .map(|r| r.items.len())
                .unwrap_or(0);
            let cursor = step(state.item_cursor, delta, len);
            AppState {
                item_cursor: cursor,
                ..state
            }
        }
        // The detail pane has no list to scroll
        Selection::Item { .. } => state,
    }
}

fn step(cursor: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if delta < 0 {
        cursor.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        (cursor + delta as usize).min(len - 1)
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        // Hide help before anything else interprets Esc
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    // Pane-specific keybindings; focus follows the selection hierarchy
    match state.selection {
        Selection::None => handle_restaurant_pane_key(state, key),
        Selection::Restaurant { .. } => handle_menu_pane_key(state, key),
        Selection::Item { .. } => handle_detail_pane_key(state, key),
    }
}

fn handle_restaurant_pane_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::CursorDown),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            match state.catalog.restaurants.get(state.restaurant_cursor) {
                Some(restaurant) => {
                    let id = restaurant.id;
                    reduce(state, Action::SelectRestaurant(id))
                }
                None => state,
            }
        }
        _ => state,
    }
}

fn handle_menu_pane_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::CursorDown),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            let item_id = state
                .open_restaurant()
                .and_then(|r| r.items.get(state.item_cursor))
                .map(|i| i.id);
            match item_id {
                Some(id) => reduce(state, Action::SelectItem(id)),
                None => state,
            }
        }
        KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => {
            reduce(state, Action::CloseRestaurant)
        }
        _ => state,
    }
}

fn handle_detail_pane_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match key.code {
        KeyCode::Char('a') | KeyCode::Enter => {
            let Some((_, item_id)) = state.selection.open_item() else {
                return state;
            };
            reduce(state, Action::AddToCart(item_id))
        }
        // The table has no close-item event; reselecting the enclosing
        // restaurant is how item focus is dropped
        KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => {
            let Some(restaurant_id) = state.selection.open_restaurant() else {
                return state;
            };
            reduce(state, Action::SelectRestaurant(restaurant_id))
        }
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libtably::{Catalog, Item, Restaurant};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Restaurant {
                id: 1,
                name: "A".to_string(),
                location: "Downtown".to_string(),
                items: vec![
                    Item {
                        id: 10,
                        name: "Soup".to_string(),
                        price: 5.0,
                        description: None,
                        available_quantity: 3,
                    },
                    Item {
                        id: 11,
                        name: "Bread".to_string(),
                        price: 2.5,
                        description: Some("Fresh".to_string()),
                        available_quantity: 8,
                    },
                ],
            },
            Restaurant {
                id: 2,
                name: "B".to_string(),
                location: "Uptown".to_string(),
                items: Vec::new(),
            },
        ])
    }

    fn loaded_state() -> AppState {
        reduce(AppState::new(), Action::CatalogLoaded(catalog()))
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = loaded_state();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::SelectRestaurant(1));

        // Original state unchanged
        assert_eq!(state_clone.selection, Selection::None);

        // New state has the change
        assert_eq!(
            new_state.selection,
            Selection::Restaurant { restaurant_id: 1 }
        );
        assert_eq!(state.selection, Selection::None);
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_catalog_loaded_clears_loading() {
        let state = AppState::new();
        assert!(state.loading);

        let state = reduce(state, Action::CatalogLoaded(catalog()));
        assert!(!state.loading);
        assert_eq!(state.catalog.len(), 2);
        assert_eq!(state.status.message, Some("Loaded 2 restaurants".to_string()));
    }

    #[test]
    fn test_catalog_load_failed_leaves_catalog_empty() {
        let state = AppState::new();

        let state = reduce(
            state,
            Action::CatalogLoadFailed("connection refused".to_string()),
        );

        assert!(!state.loading);
        assert!(state.catalog.is_empty());
        assert_eq!(state.selection, Selection::None);
        let message = state.status.message.unwrap();
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn test_select_item_requires_open_restaurant_transitions() {
        let state = loaded_state();
        let state = reduce(state, Action::SelectRestaurant(1));
        let state = reduce(state, Action::SelectItem(10));

        assert_eq!(
            state.selection,
            Selection::Item {
                restaurant_id: 1,
                item_id: 10
            }
        );
    }

    #[test]
    fn test_close_restaurant_discards_item_focus() {
        let state = loaded_state();
        let state = reduce(state, Action::SelectRestaurant(1));
        let state = reduce(state, Action::SelectItem(10));

        let state = reduce(state, Action::CloseRestaurant);
        assert_eq!(state.selection, Selection::None);
        assert_eq!(state.item_cursor, 0);
    }

    #[test]
    fn test_add_to_cart_records_intent() {
        let state = loaded_state();
        let state = reduce(state, Action::SelectRestaurant(1));
        let state = reduce(state, Action::SelectItem(10));

        let state = reduce(state, Action::AddToCart(10));

        assert_eq!(state.cart_intents, vec![(1, 10)]);
        assert_eq!(state.status.message, Some("Added to cart: Soup".to_string()));
        // Selection is untouched
        assert_eq!(
            state.selection,
            Selection::Item {
                restaurant_id: 1,
                item_id: 10
            }
        );
    }

    #[test]
    fn test_cursor_clamps_at_list_edges() {
        let state = loaded_state();

        // Already at the top
        let state = reduce(state, Action::CursorUp);
        assert_eq!(state.restaurant_cursor, 0);

        let state = reduce(state, Action::CursorDown);
        assert_eq!(state.restaurant_cursor, 1);

        // Two restaurants, cannot go past the end
        let state = reduce(state, Action::CursorDown);
        assert_eq!(state.restaurant_cursor, 1);
    }

    #[test]
    fn test_cursor_noop_on_empty_catalog() {
        let mut state = AppState::new();
        state.loading = false;

        let state = reduce(state, Action::CursorDown);
        assert_eq!(state.restaurant_cursor, 0);
    }
}
