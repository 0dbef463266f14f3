pub mod error;
pub mod parser;
pub mod types;

pub use error::UnitError;
pub use parser::parse_distance;
pub use types::{CanonicalDistance, DistanceQuantity, Unit};
