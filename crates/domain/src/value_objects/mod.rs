//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod distance;

pub use coordinate::Coordinate;
pub use distance::{Distance, DistanceUnit, round_to_two_decimals};
