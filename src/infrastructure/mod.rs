//! # Infrastructure Layer
//!
//! Adapters for the outside world: persistence backends behind the store
//! ports defined in [`persistence::traits`].

pub mod persistence;
