use crate::errors::{ProfileError, Result};
use serde::{Deserialize, Serialize};

pub const MIN_RESOLUTION: usize = 10;
pub const MAX_RESOLUTION: usize = 1000;

/// This enum specifies how the chordwise sample positions are distributed between the leading
/// edge (x = 0) and the trailing edge (x = 1).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// Evenly spaced positions, `i / n`
    #[default]
    Linear,

    /// Positions at `(i / n)^2`, which clusters samples near the leading edge where the curvature
    /// of most sections is highest
    Quadratic,
}

impl Spacing {
    /// The chord position of sample `i` of a grid with `n` intervals
    pub fn position(&self, i: usize, n: usize) -> f64 {
        // Squaring in integers keeps a single rounding step, so positions which are exactly
        // representable (0.25, 0.5625, ...) come out exact and can match raw data verbatim
        match self {
            Spacing::Linear => i as f64 / n as f64,
            Spacing::Quadratic => (i * i) as f64 / (n * n) as f64,
        }
    }
}

/// This enum specifies the method for finding the point at which the raw contour is divided into
/// its upper and lower surfaces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitStrategy {
    /// Walk the contour and split where the chordwise direction of travel first reverses. This
    /// assumes the contour starts and ends at the trailing edge and passes the leading edge once.
    #[default]
    Gradient,

    /// Split at the point of maximum x, or at the point of minimum x when the maximum sits at
    /// either end of the contour.
    Extremum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessParams {
    /// Number of chordwise intervals per surface, each surface gets `resolution + 1` samples
    pub resolution: usize,
    pub spacing: Spacing,
    pub split: SplitStrategy,
}

impl Default for ProcessParams {
    fn default() -> Self {
        ProcessParams::new(100, Spacing::Linear, SplitStrategy::Gradient)
    }
}

impl ProcessParams {
    pub fn new(resolution: usize, spacing: Spacing, split: SplitStrategy) -> Self {
        ProcessParams {
            resolution,
            spacing,
            split,
        }
    }

    /// Reads parameters from a JSON document. Missing fields take their default values.
    pub fn from_json(text: &str) -> Result<Self> {
        let params: ProcessParams = serde_json::from_str(text)
            .map_err(|e| ProfileError::invalid_params(format!("unreadable parameters: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_split(mut self, split: SplitStrategy) -> Self {
        self.split = split;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&self.resolution) {
            return Err(ProfileError::invalid_params(format!(
                "resolution {} is outside [{}, {}]",
                self.resolution, MIN_RESOLUTION, MAX_RESOLUTION
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(Spacing::Linear, 0, 0.0)]
    #[test_case(Spacing::Linear, 1, 0.25)]
    #[test_case(Spacing::Linear, 4, 1.0)]
    #[test_case(Spacing::Quadratic, 1, 0.0625)]
    #[test_case(Spacing::Quadratic, 2, 0.25)]
    #[test_case(Spacing::Quadratic, 4, 1.0)]
    fn test_spacing_position(s: Spacing, i: usize, e: f64) {
        assert_relative_eq!(e, s.position(i, 4), epsilon = 1e-12);
    }

    #[test]
    fn test_default_is_valid() {
        let params = ProcessParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(100, params.resolution);
    }

    #[test_case(9, false)]
    #[test_case(10, true)]
    #[test_case(1000, true)]
    #[test_case(1001, false)]
    fn test_resolution_range(r: usize, ok: bool) {
        let params = ProcessParams::default().with_resolution(r);
        assert_eq!(ok, params.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let params = ProcessParams::from_json(r#"{"spacing": "quadratic"}"#).unwrap();
        assert_eq!(Spacing::Quadratic, params.spacing);
        assert_eq!(SplitStrategy::Gradient, params.split);
        assert_eq!(100, params.resolution);
    }

    #[test]
    fn test_from_json_rejects_range() {
        let result = ProcessParams::from_json(r#"{"resolution": 5, "split": "extremum"}"#);
        assert!(matches!(result, Err(ProfileError::InvalidParams(_))));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = ProcessParams::from_json(r#"{"spacing": "cubic"}"#);
        assert!(matches!(result, Err(ProfileError::InvalidParams(_))));
    }
}
