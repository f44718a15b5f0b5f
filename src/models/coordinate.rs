use serde::{Deserialize, Serialize};
use validator::Validate;

/// One data row of the input table, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub target_name: Option<String>,
    pub ra_text: Option<String>,
    pub dec_text: Option<String>,
}

impl RawRow {
    pub fn new(
        target_name: Option<String>,
        ra_text: Option<String>,
        dec_text: Option<String>,
    ) -> Self {
        Self {
            target_name,
            ra_text,
            dec_text,
        }
    }

    /// Build a row from cell text; blank cells become `None`
    pub fn from_cells(target_name: &str, ra_text: &str, dec_text: &str) -> Self {
        Self::new(non_blank(target_name), non_blank(ra_text), non_blank(dec_text))
    }
}

fn non_blank(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parsed position. `ra_deg` is always in [0, 360); `dec_deg` is only
/// range-checked by the galactic transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinate {
    pub target_name: String,
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl EquatorialCoordinate {
    pub fn new(target_name: String, ra_deg: f64, dec_deg: f64) -> Self {
        Self {
            target_name,
            ra_deg,
            dec_deg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GalacticCoordinate {
    pub target_name: String,

    #[validate(range(min = 0.0, exclusive_max = 360.0))]
    pub l_deg: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub b_deg: f64,
}

impl GalacticCoordinate {
    pub fn new(target_name: String, l_deg: f64, b_deg: f64) -> Self {
        Self {
            target_name,
            l_deg,
            b_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_blank_is_none() {
        let row = RawRow::from_cells(" StarA ", "10 0 0", "   ");
        assert_eq!(row.target_name.as_deref(), Some("StarA"));
        assert_eq!(row.ra_text.as_deref(), Some("10 0 0"));
        assert_eq!(row.dec_text, None);
    }

    #[test]
    fn test_galactic_validation() {
        assert!(GalacticCoordinate::new("gc".into(), 0.0, 0.0).validate().is_ok());
        assert!(GalacticCoordinate::new("bad".into(), -1.0, 0.0)
            .validate()
            .is_err());
    }
}
