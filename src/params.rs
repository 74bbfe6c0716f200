//! Parameters for randomizing a particle type table.
//!
//! ```ignore
//! let mut params = RandomizeParams::new();
//! params
//!     .attraction(0.0, 0.05)
//!     .min_radius(2.0, 8.0)
//!     .max_radius(15.0, 40.0);
//! types.randomize(&params, &mut rng)?;
//! ```

use crate::error::TypeTableError;

/// Distributions sampled by [`ParticleTypes::randomize`](crate::ParticleTypes::randomize).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomizeParams {
    /// Mean of the normal distribution attraction is drawn from.
    pub mean_attraction: f32,
    /// Standard deviation of the attraction distribution.
    pub std_attraction: f32,
    /// Lower bound of the uniform min radius range.
    pub min_radius_lower: f32,
    /// Upper bound of the uniform min radius range.
    pub min_radius_upper: f32,
    /// Lower bound of the uniform max radius range.
    pub max_radius_lower: f32,
    /// Upper bound of the uniform max radius range.
    pub max_radius_upper: f32,
    /// Rotate type hues by a random offset when randomizing.
    pub shuffle_hue: bool,
}

impl Default for RandomizeParams {
    fn default() -> Self {
        Self {
            mean_attraction: 0.0,
            std_attraction: 0.04,
            min_radius_lower: 0.0,
            min_radius_upper: 10.0,
            max_radius_lower: 10.0,
            max_radius_upper: 40.0,
            shuffle_hue: true,
        }
    }
}

impl RandomizeParams {
    /// Create parameters with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the normal distribution for attraction.
    pub fn attraction(&mut self, mean: f32, std: f32) -> &mut Self {
        self.mean_attraction = mean;
        self.std_attraction = std;
        self
    }

    /// Set the uniform range for minimum radii.
    pub fn min_radius(&mut self, lower: f32, upper: f32) -> &mut Self {
        self.min_radius_lower = lower;
        self.min_radius_upper = upper;
        self
    }

    /// Set the uniform range for maximum radii.
    pub fn max_radius(&mut self, lower: f32, upper: f32) -> &mut Self {
        self.max_radius_lower = lower;
        self.max_radius_upper = upper;
        self
    }

    /// Enable or disable random hue rotation.
    pub fn shuffle_hue(&mut self, enabled: bool) -> &mut Self {
        self.shuffle_hue = enabled;
        self
    }

    /// Check that every distribution can be sampled.
    pub fn validate(&self) -> Result<(), TypeTableError> {
        if !self.mean_attraction.is_finite() || !self.std_attraction.is_finite() {
            return Err(TypeTableError::InvalidParams(
                "attraction mean and deviation must be finite".into(),
            ));
        }
        if self.std_attraction < 0.0 {
            return Err(TypeTableError::InvalidParams(format!(
                "attraction deviation must be >= 0, got {}",
                self.std_attraction
            )));
        }
        check_range("min radius", self.min_radius_lower, self.min_radius_upper)?;
        check_range("max radius", self.max_radius_lower, self.max_radius_upper)
    }
}

fn check_range(name: &str, lower: f32, upper: f32) -> Result<(), TypeTableError> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(TypeTableError::InvalidParams(format!(
            "{} range must be finite",
            name
        )));
    }
    if lower < 0.0 {
        return Err(TypeTableError::InvalidParams(format!(
            "{} range must be non-negative, got lower bound {}",
            name, lower
        )));
    }
    if lower > upper {
        return Err(TypeTableError::InvalidParams(format!(
            "{} range is inverted: {} > {}",
            name, lower, upper
        )));
    }
    // The sampler scales by the span, which has to stay finite
    if !((upper - lower) / (1.0 - f32::EPSILON)).is_finite() {
        return Err(TypeTableError::InvalidParams(format!(
            "{} range [{}, {}] is too wide to sample",
            name, lower, upper
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = RandomizeParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.max_radius_upper, 40.0);
        assert!(params.shuffle_hue);
    }

    #[test]
    fn test_chained_setters() {
        let mut params = RandomizeParams::new();
        params
            .attraction(0.1, 0.2)
            .min_radius(1.0, 2.0)
            .max_radius(3.0, 4.0)
            .shuffle_hue(false);

        assert_eq!(params.mean_attraction, 0.1);
        assert_eq!(params.std_attraction, 0.2);
        assert_eq!(params.min_radius_lower, 1.0);
        assert_eq!(params.max_radius_upper, 4.0);
        assert!(!params.shuffle_hue);
    }

    #[test]
    fn test_rejects_negative_deviation() {
        let mut params = RandomizeParams::new();
        params.attraction(0.0, -0.1);
        assert!(matches!(
            params.validate(),
            Err(TypeTableError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let mut params = RandomizeParams::new();
        params.max_radius(40.0, 10.0);
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("max radius"));
    }

    #[test]
    fn test_rejects_nan() {
        let mut params = RandomizeParams::new();
        params.min_radius(f32::NAN, 1.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_range_too_wide_to_sample() {
        let mut params = RandomizeParams::new();
        params.max_radius(0.0, f32::MAX);
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("too wide"));
    }

    #[test]
    fn test_degenerate_range_is_allowed() {
        let mut params = RandomizeParams::new();
        params.min_radius(5.0, 5.0).attraction(1.0, 0.0);
        assert!(params.validate().is_ok());
    }
}
