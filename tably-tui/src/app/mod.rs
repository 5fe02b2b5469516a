//! Application module
//!
//! Core application architecture:
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//!
//! State is owned by the top-level component and mutated only through the
//! reducer; rendering is a pure projection of it.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use reducer::reduce;
pub use state::{AppState, Selection, StatusBarState, UiConfig};
