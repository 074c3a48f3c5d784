//! # Persistence
//!
//! Store ports and their implementations.

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryListingStore;
pub use traits::{ListingStore, RepositoryError, RepositoryResult};
