//! UI state machine (pure).
//!
//! All state transitions are testable without a terminal.

pub mod app_state;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, Effect, FocusPane};
pub use search_input_handler::SearchEdit;
