//! Configuration loading and resolution utilities.
//!
//! The pipeline is split into layered sources, a raw mirror of the file
//! format and the validated [`ResolvedConfig`] the application runs with.
//! `load` is the primary entry point.

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use raw::DEFAULT_BASE_URL;
pub use loader::load;
pub use resolved::ResolvedConfig;
