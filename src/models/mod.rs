pub mod coordinate;

pub use coordinate::{EquatorialCoordinate, GalacticCoordinate, RawRow};
