//! Core application state and behavior for the interactive client.
//!
//! The [`App`] type wraps a search session with UI state and rendering logic.
//! Supporting modules partition the implementation into focused pieces:
//! actions (input handling), rendering and results navigation.

mod actions;
mod render;
mod results;
mod state;

pub use state::App;

#[cfg(test)]
mod tests;
