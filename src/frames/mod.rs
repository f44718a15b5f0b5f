//! Frame conversion helpers for the galactic transform.
//!
//! Provides the ICRS → galactic rotation and unit-vector ↔ spherical
//! conversions.

pub mod rotation;
pub mod spherical;

pub use rotation::{icrs_to_galactic, ICRS_TO_GALACTIC};
pub use spherical::{cartesian_to_spherical, spherical_to_cartesian, SphericalCoords};
