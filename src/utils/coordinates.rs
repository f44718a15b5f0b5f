use crate::error::{PipelineError, Result};
use crate::utils::constants::{
    DEGREES_PER_HOUR, FULL_CIRCLE_DEG, MINUTES_PER_UNIT, SECONDS_PER_UNIT,
};
use serde::{Deserialize, Serialize};

/// How the sign of a declination is read from its first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecSignPolicy {
    /// Only a leading `+` is positive. A leading `-` or a bare digit is negative.
    #[default]
    PlusOnly,
    /// The first token must start with `+` or `-`.
    RequireExplicit,
}

/// Convert sexagesimal right ascension ("H M S") to decimal degrees
///
/// # Examples
/// ```
/// use galactic_filter::utils::parse_ra;
///
/// let ra = parse_ra("10 30 0").unwrap();
/// assert!((ra - 157.5).abs() < 1e-9);
/// ```
pub fn parse_ra(text: &str) -> Result<f64> {
    let [hours, minutes, seconds] = split_components(text, "RA")?;
    Ok((hours + minutes / MINUTES_PER_UNIT + seconds / SECONDS_PER_UNIT) * DEGREES_PER_HOUR)
}

/// Convert sexagesimal declination ("±D M S") to decimal degrees using
/// [`DecSignPolicy::PlusOnly`].
pub fn parse_dec(text: &str) -> Result<f64> {
    parse_dec_with_policy(text, DecSignPolicy::PlusOnly)
}

/// Convert sexagesimal declination to decimal degrees with an explicit sign policy
///
/// # Examples
/// ```
/// use galactic_filter::utils::coordinates::{parse_dec_with_policy, DecSignPolicy};
///
/// let dec = parse_dec_with_policy("-5 30 0", DecSignPolicy::RequireExplicit).unwrap();
/// assert!((dec + 5.5).abs() < 1e-9);
/// assert!(parse_dec_with_policy("5 30 0", DecSignPolicy::RequireExplicit).is_err());
/// ```
pub fn parse_dec_with_policy(text: &str, policy: DecSignPolicy) -> Result<f64> {
    let [degrees, minutes, seconds] = split_components(text, "Dec")?;

    // split_components guarantees a non-empty first token
    let lead = text.trim_start().chars().next().unwrap_or(' ');
    let sign = match (policy, lead) {
        (_, '+') => 1.0,
        (DecSignPolicy::PlusOnly, _) => -1.0,
        (DecSignPolicy::RequireExplicit, '-') => -1.0,
        (DecSignPolicy::RequireExplicit, _) => {
            return Err(PipelineError::InvalidCoordinate(format!(
                "Dec '{}' has no explicit sign",
                text
            )))
        }
    };

    let magnitude = degrees.abs() + minutes / MINUTES_PER_UNIT + seconds / SECONDS_PER_UNIT;
    Ok(sign * magnitude)
}

/// Wrap a right ascension in degrees into `[0, 360)`
pub fn normalize_ra_deg(ra_deg: f64) -> f64 {
    let wrapped = ra_deg.rem_euclid(FULL_CIRCLE_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_CIRCLE_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Split a sexagesimal string into exactly three finite numbers
fn split_components(text: &str, label: &str) -> Result<[f64; 3]> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    if tokens.len() != 3 {
        return Err(PipelineError::InvalidCoordinate(format!(
            "Invalid {} format: '{}'. Expected three space-separated components",
            label, text
        )));
    }

    let mut values = [0.0; 3];
    for (value, token) in values.iter_mut().zip(&tokens) {
        *value = token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                PipelineError::InvalidCoordinate(format!(
                    "Invalid {} component: '{}'",
                    label, token
                ))
            })?;
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_parse_ra() {
        assert!((parse_ra("10 0 0").unwrap() - 150.0).abs() < EPS);
        assert!((parse_ra("5 0 0").unwrap() - 75.0).abs() < EPS);
        // 18h36m56.336s = Vega
        let expected = (18.0 + 36.0 / 60.0 + 56.336 / 3600.0) * 15.0;
        assert!((parse_ra("18 36 56.336").unwrap() - expected).abs() < EPS);
        assert!((parse_ra("  23   59  59.999 ").unwrap() - 359.99999583).abs() < 1e-6);
    }

    #[test]
    fn test_ra_stays_below_full_circle() {
        for hours in 0..24 {
            for minutes in [0.0, 15.5, 59.0] {
                let text = format!("{} {} 59.9", hours, minutes);
                let ra = parse_ra(&text).unwrap();
                assert!((0.0..360.0).contains(&ra), "{} -> {}", text, ra);
            }
        }
    }

    #[test]
    fn test_parse_dec_signs() {
        assert!((parse_dec("+20 0 0").unwrap() - 20.0).abs() < EPS);
        assert!((parse_dec("-5 0 0").unwrap() + 5.0).abs() < EPS);
        assert!((parse_dec("+41 16 7.5").unwrap() - 41.26875).abs() < EPS);
        assert!((parse_dec("-29 0 28.1").unwrap() + 29.00780556).abs() < 1e-6);
    }

    #[test]
    fn test_negative_zero_degrees_keeps_sign() {
        assert!((parse_dec("-0 30 0").unwrap() + 0.5).abs() < EPS);
        assert!((parse_dec("+0 30 0").unwrap() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_zero_position() {
        assert_eq!(parse_ra("0 0 0").unwrap(), 0.0);
        assert_eq!(parse_dec("+0 0 0").unwrap(), 0.0);
    }

    #[test]
    fn test_unsigned_dec_is_negative_under_plus_only() {
        assert!((parse_dec("5 0 0").unwrap() + 5.0).abs() < EPS);
    }

    #[test]
    fn test_require_explicit_sign() {
        let policy = DecSignPolicy::RequireExplicit;
        assert!((parse_dec_with_policy("+5 0 0", policy).unwrap() - 5.0).abs() < EPS);
        assert!((parse_dec_with_policy("-5 0 0", policy).unwrap() + 5.0).abs() < EPS);
        assert!(matches!(
            parse_dec_with_policy("5 0 0", policy),
            Err(PipelineError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_invalid_formats() {
        assert!(parse_ra("bad").is_err());
        assert!(parse_ra("10 0").is_err());
        assert!(parse_ra("").is_err());
        assert!(parse_ra("10 0 0 0").is_err());
        assert!(parse_ra("10 x 0").is_err());
        assert!(parse_ra("nan 0 0").is_err());
        assert!(parse_dec("+10 0").is_err());
        assert!(parse_dec("+10 0 inf").is_err());
        assert!(parse_dec("10:00:00").is_err());
    }

    #[test]
    fn test_normalize_ra_wraps_into_full_circle() {
        assert_eq!(normalize_ra_deg(360.0), 0.0);
        assert!((normalize_ra_deg(-15.0) - 345.0).abs() < EPS);
        assert!((normalize_ra_deg(375.0) - 15.0).abs() < EPS);
        assert_eq!(normalize_ra_deg(-1e-20), 0.0);
        assert_eq!(normalize_ra_deg(120.0), 120.0);
    }
}
