//! Event handling infrastructure
//!
//! Polls terminal events and turns idle timeouts into ticks, producing a
//! single serialized action stream for the reducer.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;

use crate::app::Action;

/// TUI events that can be dispatched
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Periodic tick
    Tick,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event, blocking up to tick_rate duration.
    /// A timeout produces a Tick.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(TuiEvent::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick), // Ignore other events
            }
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_handler_creation() {
        let handler = EventHandler::new(100);
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn test_tick_converts_to_tick_action() {
        let action: Action = TuiEvent::Tick.into();
        assert!(matches!(action, Action::Tick));
    }
}
