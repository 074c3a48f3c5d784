//! # In-Memory Persistence
//!
//! In-memory store implementations backed by thread-safe `HashMap`s.

pub mod listing_store;

pub use listing_store::InMemoryListingStore;
