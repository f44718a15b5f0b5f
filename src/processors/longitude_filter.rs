use crate::error::{PipelineError, Result};
use crate::models::GalacticCoordinate;
use crate::utils::constants::{DEFAULT_LONGITUDE_MAX, DEFAULT_LONGITUDE_MIN};
use tracing::info;

/// Keeps targets whose galactic longitude lies strictly inside `(min, max)`.
#[derive(Debug, Clone, Copy)]
pub struct LongitudeFilter {
    min_deg: f64,
    max_deg: f64,
}

impl LongitudeFilter {
    pub fn new(min_deg: f64, max_deg: f64) -> Result<Self> {
        if !min_deg.is_finite() || !max_deg.is_finite() || min_deg >= max_deg {
            return Err(PipelineError::Config(format!(
                "Invalid longitude window ({}, {})",
                min_deg, max_deg
            )));
        }
        Ok(Self { min_deg, max_deg })
    }

    pub fn contains(&self, l_deg: f64) -> bool {
        self.min_deg < l_deg && l_deg < self.max_deg
    }

    /// Filter in input order
    pub fn select(&self, galactic: &[GalacticCoordinate]) -> Vec<GalacticCoordinate> {
        galactic
            .iter()
            .filter(|g| self.contains(g.l_deg))
            .inspect(|g| {
                info!(
                    "Target {}: Galactic Coordinates (l, b) = {}, {}",
                    g.target_name, g.l_deg, g.b_deg
                )
            })
            .cloned()
            .collect()
    }
}

impl Default for LongitudeFilter {
    fn default() -> Self {
        Self {
            min_deg: DEFAULT_LONGITUDE_MIN,
            max_deg: DEFAULT_LONGITUDE_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(name: &str, l_deg: f64) -> GalacticCoordinate {
        GalacticCoordinate::new(name.to_string(), l_deg, 0.0)
    }

    #[test]
    fn test_boundaries() {
        let filter = LongitudeFilter::default();
        assert!(!filter.contains(0.0));
        assert!(!filter.contains(180.0));
        assert!(filter.contains(90.0));
        assert!(filter.contains(179.999));
        assert!(!filter.contains(180.001));
        assert!(filter.contains(1e-9));
        assert!(!filter.contains(359.9));
    }

    #[test]
    fn test_select_preserves_order() {
        let input = vec![
            at("a", 10.0),
            at("b", 200.0),
            at("c", 0.0),
            at("d", 179.5),
            at("e", 45.0),
        ];
        let names: Vec<String> = LongitudeFilter::default()
            .select(&input)
            .into_iter()
            .map(|g| g.target_name)
            .collect();
        assert_eq!(names, vec!["a", "d", "e"]);
    }

    #[test]
    fn test_select_empty() {
        assert!(LongitudeFilter::default().select(&[]).is_empty());
    }

    #[test]
    fn test_custom_window() {
        let filter = LongitudeFilter::new(180.0, 270.0).unwrap();
        assert!(filter.contains(204.0));
        assert!(!filter.contains(180.0));
        assert!(LongitudeFilter::new(10.0, 10.0).is_err());
        assert!(LongitudeFilter::new(f64::NAN, 10.0).is_err());
    }
}
