//! Application layer - Use cases and orchestration
//!
//! Contains the two command use cases (aerial distance and nearby search),
//! the ports they depend on, and the text rendering of their results.
//! Infrastructure adapters implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
