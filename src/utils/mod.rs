pub mod constants;
pub mod coordinates;

pub use constants::*;
pub use coordinates::{
    normalize_ra_deg, parse_dec, parse_dec_with_policy, parse_ra, DecSignPolicy,
};
