//! Unit vector ↔ spherical coordinate conversion.

use std::f64::consts::PI;

/// Direction on the sky: longitude and latitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
}

/// Convert a direction vector to spherical coordinates.
///
/// The vector need not be normalised. A zero vector maps to (0, 0).
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
        };
    }

    let lon = y.atan2(x);
    let lat = (z / r).clamp(-1.0, 1.0).asin();

    let mut lon_deg = if lon < 0.0 { lon + 2.0 * PI } else { lon }.to_degrees();
    // atan2 just below zero can round up to exactly 360 after the shift
    if lon_deg >= 360.0 {
        lon_deg -= 360.0;
    }

    SphericalCoords {
        lon_deg,
        lat_deg: lat.to_degrees(),
    }
}

/// Convert longitude/latitude in degrees to a unit vector.
pub fn spherical_to_cartesian(lon_deg: f64, lat_deg: f64) -> [f64; 3] {
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]
}
