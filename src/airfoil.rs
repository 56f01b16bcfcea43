use crate::errors::Result;
use crate::serialize::point_list;
use ncollide2d::na::Point2;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use tracing::debug;

pub mod common;
pub mod generate;
pub mod parse;
pub mod resample;
pub mod split;

pub use common::{ProcessParams, Spacing, SplitStrategy};

/// A named airfoil contour exactly as it was read, in the order the source listed the points
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub points: Vec<Point2<f64>>,
}

impl Profile {
    pub fn new(name: String, points: Vec<Point2<f64>>) -> Profile {
        Profile { name, points }
    }

    /// Parses the text of a coordinate file, see `parse::parse_lines`
    pub fn parse(text: &str) -> Result<Profile> {
        let lines: Vec<&str> = text.lines().collect();
        parse::parse_lines(&lines)
    }

    pub fn split(&self, strategy: SplitStrategy) -> Result<SplitProfile> {
        split::split(&self.points, strategy)
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} points)", self.name, self.points.len())
    }
}

/// The two surfaces of a profile, each running from the leading edge at x = 0 toward the trailing
/// edge
#[derive(Debug, Clone, PartialEq)]
pub struct SplitProfile {
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,

    // Whether upper and lower start with a (0, 0) that is not in the raw data
    added_leading_edge: (bool, bool),
}

impl SplitProfile {
    pub fn new(upper: Vec<Point2<f64>>, lower: Vec<Point2<f64>>) -> SplitProfile {
        SplitProfile {
            upper,
            lower,
            added_leading_edge: (false, false),
        }
    }

    /// Marks which surfaces begin with a synthetic leading edge point
    #[must_use]
    pub fn with_added_leading_edge(mut self, upper: bool, lower: bool) -> SplitProfile {
        self.added_leading_edge = (upper, lower);
        self
    }

    /// Rebuilds a single contour from the un-resampled surfaces: the upper surface from the
    /// trailing edge forward, followed by the lower surface back to the trailing edge. Synthetic
    /// leading edge points are left out, so only raw points appear.
    pub fn to_contour(&self) -> Vec<Point2<f64>> {
        let (skip_upper, skip_lower) = self.added_leading_edge;
        let upper = self.upper.iter().skip(usize::from(skip_upper)).rev();
        let lower = self.lower.iter().skip(usize::from(skip_lower));
        upper.chain(lower).copied().collect()
    }
}

/// A resampled, closed profile loop. It starts and ends at the trailing edge (1, 0), runs along
/// the upper surface to the leading edge and back along the lower surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedLoop {
    pub name: String,

    #[serde(serialize_with = "point_list")]
    pub points: Vec<Point2<f64>>,
}

impl ProcessedLoop {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The loop without its repeated closing point, for consumers which close curves themselves
    pub fn open_points(&self) -> &[Point2<f64>] {
        match self.points.split_last() {
            Some((last, rest)) if rest.first() == Some(last) => rest,
            _ => &self.points,
        }
    }
}

/// Runs the whole pipeline on one profile: split into surfaces, resample both onto the chordwise
/// grid and join them into a closed loop.
pub fn process(profile: &Profile, params: &ProcessParams) -> Result<ProcessedLoop> {
    params.validate()?;

    let split = profile.split(params.split)?;
    debug!(
        name = profile.name.as_str(),
        upper = split.upper.len(),
        lower = split.lower.len(),
        "Split profile"
    );

    let points = resample::resample(&split, params.resolution, params.spacing)?;
    debug!(
        name = profile.name.as_str(),
        points = points.len(),
        "Resampled profile"
    );

    Ok(ProcessedLoop {
        name: profile.name.clone(),
        points,
    })
}
