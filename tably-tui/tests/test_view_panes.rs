//! Test pane rendering
//!
//! Renders the UI into a test backend and asserts on the projected pane
//! content for each selection state.

use libtably::{Catalog, Item, Restaurant};
use ratatui::{backend::TestBackend, Terminal};
use tably_tui::{reduce, ui, Action, AppState};

fn catalog() -> Catalog {
    Catalog::new(vec![
        Restaurant {
            id: 1,
            name: "A".to_string(),
            location: "Downtown".to_string(),
            items: vec![Item {
                id: 10,
                name: "Soup".to_string(),
                price: 5.0,
                description: None,
                available_quantity: 3,
            }],
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

fn render_to_text(state: &AppState) -> String {
    let backend = TestBackend::new(100, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_restaurant_pane_lists_every_restaurant() {
    let state = loaded_state();
    let text = render_to_text(&state);

    assert!(text.contains("A, Downtown"));
    assert!(text.contains("B, Uptown"));
}

#[test]
fn test_menu_pane_shows_placeholder_when_nothing_selected() {
    let state = loaded_state();
    let text = render_to_text(&state);

    assert!(text.contains("Select a restaurant to see its menu"));
    assert!(text.contains("Select an item to see details"));
}

#[test]
fn test_menu_pane_shows_items_of_open_restaurant() {
    let state = reduce(loaded_state(), Action::SelectRestaurant(1));
    let text = render_to_text(&state);

    assert!(text.contains("Soup"));
    assert!(text.contains("$5.00"));
}

#[test]
fn test_menu_pane_shows_no_items_indicator() {
    let state = reduce(loaded_state(), Action::SelectRestaurant(2));
    let text = render_to_text(&state);

    assert!(text.contains(ui::NO_ITEMS));
}

#[test]
fn test_detail_pane_shows_item_with_description_fallback() {
    let state = reduce(loaded_state(), Action::SelectRestaurant(1));
    let state = reduce(state, Action::SelectItem(10));
    let text = render_to_text(&state);

    assert!(text.contains("Price: $5.00"));
    assert!(text.contains("Available: 3"));
    assert!(text.contains(ui::NO_DESCRIPTION));
    assert!(text.contains("a: add to cart"));
}

#[test]
fn test_browse_flow_renders_through_all_three_panes() {
    let state = loaded_state();

    let state = reduce(state, Action::SelectRestaurant(1));
    assert!(render_to_text(&state).contains("Soup"));

    let state = reduce(state, Action::SelectItem(10));
    let text = render_to_text(&state);
    assert!(text.contains("Price: $5.00"));
    assert!(text.contains("Available: 3"));
    assert!(text.contains(ui::NO_DESCRIPTION));

    let state = reduce(state, Action::SelectRestaurant(2));
    let text = render_to_text(&state);
    assert!(text.contains(ui::NO_ITEMS));
    assert!(!text.contains("Price:"));
}

#[test]
fn test_failed_load_renders_empty_restaurant_pane() {
    let state = reduce(
        AppState::new(),
        Action::CatalogLoadFailed("connection refused".to_string()),
    );
    let text = render_to_text(&state);

    assert!(text.contains("No restaurants available"));
    assert!(text.contains("Could not load catalog"));
    assert!(!text.contains("Downtown"));
}

#[test]
fn test_loading_indicator_before_catalog_arrives() {
    let state = AppState::new();
    let text = render_to_text(&state);

    assert!(text.contains("Loading catalog..."));
}

#[test]
fn test_help_overlay_renders_on_top() {
    let state = reduce(loaded_state(), Action::ShowHelp);
    let text = render_to_text(&state);

    assert!(text.contains("Keyboard Shortcuts"));
}
