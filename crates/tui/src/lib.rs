//! Interactive terminal UI for `wordscope`.
//!
//! This crate is the rendering layer over a [`wordscope_core::SearchClient`]:
//! it reads the session's presentation state every frame and turns key
//! presses into search, confirmation and dismissal calls.

mod app;
pub mod components;
pub mod input;
mod outcome;
mod runtime;
pub mod style;

pub use app::App;
pub use outcome::{ActionRecord, SessionSummary};
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{Theme, builtin_themes, default_theme};
