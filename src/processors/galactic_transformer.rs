use crate::error::{PipelineError, Result};
use crate::frames::icrs_to_galactic;
use crate::models::GalacticCoordinate;
use crate::processors::coordinate_store::CoordinateColumns;
use tracing::debug;
use validator::Validate;

/// Equatorial (ICRS/J2000, degrees) to galactic (degrees) conversion.
///
/// Implementations return `l` in [0, 360) and `b` in [-90, 90].
pub trait CoordinateTransform {
    fn to_galactic(&self, ra_deg: f64, dec_deg: f64) -> Result<(f64, f64)>;
}

/// IAU galactic frame referred to the ICRS.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcrsToGalactic;

impl CoordinateTransform for IcrsToGalactic {
    fn to_galactic(&self, ra_deg: f64, dec_deg: f64) -> Result<(f64, f64)> {
        if !ra_deg.is_finite() || !dec_deg.is_finite() {
            return Err(PipelineError::Transform(format!(
                "non-finite input RA={} Dec={}",
                ra_deg, dec_deg
            )));
        }
        if !(-90.0..=90.0).contains(&dec_deg) {
            return Err(PipelineError::Transform(format!(
                "declination {} outside [-90, 90]",
                dec_deg
            )));
        }

        let galactic = icrs_to_galactic(ra_deg, dec_deg);
        Ok((galactic.lon_deg, galactic.lat_deg))
    }
}

/// Applies a [`CoordinateTransform`] to every row of a coordinate table.
pub struct GalacticTransformer {
    transform: Box<dyn CoordinateTransform>,
}

impl GalacticTransformer {
    pub fn new() -> Self {
        Self::with_transform(IcrsToGalactic)
    }

    pub fn with_transform(transform: impl CoordinateTransform + 'static) -> Self {
        Self {
            transform: Box::new(transform),
        }
    }

    /// Transform each coordinate, one output per input, in input order
    pub fn transform(&self, columns: &CoordinateColumns) -> Result<Vec<GalacticCoordinate>> {
        let count = columns.target_names.len();
        if columns.ra_deg.len() != count || columns.dec_deg.len() != count {
            return Err(PipelineError::Transform(format!(
                "column length mismatch: {} names, {} RA, {} Dec",
                count,
                columns.ra_deg.len(),
                columns.dec_deg.len()
            )));
        }

        let mut galactic = Vec::with_capacity(count);
        for ((name, &ra), &dec) in columns
            .target_names
            .iter()
            .zip(&columns.ra_deg)
            .zip(&columns.dec_deg)
        {
            let (l_deg, b_deg) = self.transform.to_galactic(ra, dec)?;
            debug!(
                "Target {}: Galactic Coordinates (l, b) = {}, {}",
                name, l_deg, b_deg
            );
            let coordinate = GalacticCoordinate::new(name.clone(), l_deg, b_deg);
            coordinate.validate()?;
            galactic.push(coordinate);
        }

        Ok(galactic)
    }
}

impl Default for GalacticTransformer {
    fn default() -> Self {
        Self::new()
    }
}
