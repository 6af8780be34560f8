//! UI building blocks used by the renderer.

/// Confirmation and outcome dialogs.
pub mod modal;
/// Search mode tab strip.
pub mod modes;
/// Input prompt rendering and busy indicator.
pub mod prompt;
/// Results list, empty notice and error banner.
pub mod results;

pub use modal::{centered_rect, render_modal};
pub use modes::render_modes;
pub use prompt::{InputContext, ProgressState, render_input};
pub use results::{ResultsView, render_banner, render_results};
