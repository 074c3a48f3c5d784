//! # Application Layer
//!
//! Use-case orchestration: the [`services::NegotiationService`] drives the
//! domain aggregates through the store ports and publishes lifecycle events.

pub mod error;
pub mod services;

pub use error::{EngineError, EngineResult};
