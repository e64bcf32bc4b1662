//! vitrine view cache
//!
//! Keeps the last fetched collection of each resource type together with its
//! rendered view, so switching between views does not refetch. Any mutation
//! invalidates the affected entries and the next read goes to the backend.
//!
//! ## Configuration
//!
//! ```toml
//! [cache]
//! enabled = true
//! ```

mod config;
mod deps;
mod keys;
mod store;

pub use config::CacheConfig;
pub use deps::affected_by;
pub use keys::{ParseResourceTypeError, ResourceType};
pub use store::{CacheEntry, Records, ViewCache};
