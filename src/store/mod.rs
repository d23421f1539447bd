//! In-memory store for prompts, collections and prompt version history.
//!
//! State lives only for the lifetime of the process. Each `Repository` owns its own state, so
//! tests and servers never share data implicitly.

mod entities;
mod error;
mod query;
mod repository;
mod versions;

pub use error::StoreError;
pub use query::PromptFilter;
pub use repository::Repository;
