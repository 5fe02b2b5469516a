//! UI rendering
//!
//! Pure projection of `(Catalog, Selection)` into three panes: restaurants,
//! the open restaurant's menu, and the open item's detail. Render functions
//! read state and draw to the frame; they never mutate state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, Selection};

/// Fallback text when an item carries no description
pub const NO_DESCRIPTION: &str = "no description available";

/// Indicator for a restaurant whose menu is empty
pub const NO_ITEMS: &str = "No items on the menu";

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Panes
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(chunks[0]);

    render_restaurant_pane(frame, panes[0], state);
    render_menu_pane(frame, panes[1], state);
    render_detail_pane(frame, panes[2], state);
    render_status_bar(frame, chunks[1], state);

    if state.help_visible {
        render_help_overlay(frame, area);
    }
}

/// Restaurant pane: every restaurant in catalog order, always visible
fn render_restaurant_pane(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.selection == Selection::None;
    let open_id = state.selection.open_restaurant();

    let lines: Vec<Line> = if state.loading {
        vec![Line::from(Span::styled(
            "Loading catalog...",
            Style::default().fg(Color::Yellow),
        ))]
    } else if state.catalog.is_empty() {
        vec![Line::from(Span::styled(
            "No restaurants available",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state
            .catalog
            .restaurants
            .iter()
            .enumerate()
            .map(|(idx, restaurant)| {
                let text = format!("{}, {}", restaurant.name, restaurant.location);
                let mut style = Style::default();
                if Some(restaurant.id) == open_id {
                    style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
                }
                if focused && idx == state.restaurant_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::from(Span::styled(text, style))
            })
            .collect()
    };

    let block = Block::default()
        .title(" Restaurants ")
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        });

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Menu pane: the open restaurant's items, or a placeholder
fn render_menu_pane(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = matches!(state.selection, Selection::Restaurant { .. });
    let open_item_id = state.selection.open_item().map(|(_, item_id)| item_id);

    let (title, lines): (String, Vec<Line>) = match state.open_restaurant() {
        None => (
            " Menu ".to_string(),
            vec![Line::from(Span::styled(
                "Select a restaurant to see its menu",
                Style::default().fg(Color::DarkGray),
            ))],
        ),
        Some(restaurant) if restaurant.items.is_empty() => (
            format!(" {} ", restaurant.name),
            vec![Line::from(Span::styled(
                NO_ITEMS,
                Style::default().fg(Color::Yellow),
            ))],
        ),
        Some(restaurant) => {
            let lines = restaurant
                .items
                .iter()
                .enumerate()
                .map(|(idx, item)| {
                    let mut style = Style::default();
                    if Some(item.id) == open_item_id {
                        style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
                    }
                    if focused && idx == state.item_cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Line::from(Span::styled(
                        format!("{}  {}", item.name, format_price(item.price)),
                        style,
                    ))
                })
                .collect();
            (format!(" {} ", restaurant.name), lines)
        }
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        });

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Detail pane: the open item, or a placeholder
fn render_detail_pane(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = matches!(state.selection, Selection::Item { .. });

    let lines: Vec<Line> = match state.open_item() {
        None => vec![Line::from(Span::styled(
            "Select an item to see details",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(item) => {
            let description = item
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(NO_DESCRIPTION);

            vec![
                Line::from(Span::styled(
                    item.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(format!("Price: {}", format_price(item.price))),
                Line::from(format!("Available: {}", item.available_quantity)),
                Line::from(""),
                Line::from(description.to_string()),
                Line::from(""),
                Line::from(Span::styled(
                    "a: add to cart",
                    Style::default().fg(Color::Gray),
                )),
            ]
        }
    };

    let block = Block::default()
        .title(" Item ")
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        });

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), area);
}

/// Status bar with the current message and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.selection {
        Selection::None => "Enter: open menu | F1: help | q: quit",
        Selection::Restaurant { .. } => "Enter: open item | Esc: close | F1: help | q: quit",
        Selection::Item { .. } => "a: add to cart | Esc: back to menu | F1: help | q: quit",
    };

    let line = match &state.status.message {
        Some(message) => Line::from(vec![
            Span::styled(message.clone(), Style::default().fg(Color::Green)),
            Span::raw(" | "),
            Span::styled(hints, Style::default().fg(Color::Gray)),
        ]),
        None => Line::from(Span::styled(hints, Style::default().fg(Color::Gray))),
    };

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q        - Quit"),
        Line::from("  F1       - Toggle help"),
        Line::from(""),
        Line::from("Lists:"),
        Line::from("  Up/k     - Move up"),
        Line::from("  Down/j   - Move down"),
        Line::from("  Enter    - Open"),
        Line::from("  Esc      - Back / close"),
        Line::from(""),
        Line::from("Item detail:"),
        Line::from("  a        - Add to cart"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(ratatui::widgets::Clear, popup_area); // Clear background
    frame.render_widget(help, popup_area);
}

/// Format a price with a currency prefix and two decimals
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(2.5), "$2.50");
        assert_eq!(format_price(0.0), "$0.00");
    }
}
