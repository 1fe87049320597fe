//! Domain layer for map-cli
//!
//! Contains the value objects and entities shared by every other crate:
//! coordinates as typed on the command line, distances, and nearby places
//! returned by the mapping provider. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
