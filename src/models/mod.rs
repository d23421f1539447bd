//! Data models for the PromptLab backend.
//!
//! Field names match the JSON wire format exactly (snake_case).

mod collection;
mod prompt;
mod tag;
mod template;
mod version;

pub use collection::*;
pub use prompt::*;
pub use tag::*;
pub use template::*;
pub use version::*;
