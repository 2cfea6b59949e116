//! Domain types for the refinement pipeline.

pub mod error;
pub mod platform;

pub use error::{RefineError, Result};
pub use platform::Platform;
