//! # Domain Layer
//!
//! Pure business logic for listing price negotiation: entities, value
//! objects, domain events, and domain errors. Nothing in this layer performs
//! I/O; persistence and transport live in the outer layers.

pub mod entities;
pub mod errors;
pub mod events;
pub mod value_objects;
