//! ICRS → galactic frame rotation.
//!
//! The galactic system is fixed by the IAU (1958) definition of the north
//! galactic pole and the longitude origin. Referred to the ICRS, that
//! definition is realised by the constant rotation matrix published with
//! the Hipparcos catalogue (ESA SP-1200, Vol. 1, §1.5.3), the same matrix
//! used by SOFA/ERFA `icrs2g`.

use super::spherical::{cartesian_to_spherical, spherical_to_cartesian, SphericalCoords};

/// Rotation matrix from ICRS to galactic coordinates (row-major).
pub const ICRS_TO_GALACTIC: [[f64; 3]; 3] = [
    [
        -0.054_875_560_416_215_368,
        -0.873_437_090_234_885_05,
        -0.483_835_015_548_713_23,
    ],
    [
        0.494_109_427_875_583_67,
        -0.444_829_629_960_011_18,
        0.746_982_244_497_218_89,
    ],
    [
        -0.867_666_149_019_004_70,
        -0.198_076_373_431_201_53,
        0.455_983_776_175_066_92,
    ],
];

/// Apply a 3×3 rotation to a vector.
fn rotate(m: &[[f64; 3]; 3], v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Convert ICRS right ascension/declination (degrees) to galactic l/b.
///
/// Returned `lon_deg` is galactic longitude in [0, 360), `lat_deg` is
/// galactic latitude in [-90, 90].
pub fn icrs_to_galactic(ra_deg: f64, dec_deg: f64) -> SphericalCoords {
    let equatorial = spherical_to_cartesian(ra_deg, dec_deg);
    cartesian_to_spherical(&rotate(&ICRS_TO_GALACTIC, &equatorial))
}
