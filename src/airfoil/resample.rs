use super::common::Spacing;
use super::SplitProfile;
use crate::algorithms::{bracket_search, Bracket};
use crate::errors::{ProfileError, Result};
use itertools::Itertools;
use ncollide2d::na::Point2;
use std::iter::once;
use tracing::trace;

/// Builds the `resolution + 1` chordwise sample positions from 0.0 to 1.0
pub fn chord_grid(resolution: usize, spacing: Spacing) -> Vec<f64> {
    (0..=resolution)
        .map(|i| spacing.position(i, resolution))
        .collect()
}

/// Computes the slope dy/dx between each pair of consecutive points. The arc must be strictly
/// increasing in x, a repeated x value or a step backwards is reported as a degenerate arc at the
/// second vertex of the offending pair.
pub fn secants(arc: &[Point2<f64>]) -> Result<Vec<f64>> {
    arc.iter()
        .tuple_windows()
        .enumerate()
        .map(|(i, (p0, p1))| {
            let dx = p1.x - p0.x;
            if dx == 0.0 {
                Err(ProfileError::degenerate_arc(
                    i + 1,
                    format!("repeated x = {}", p1.x),
                ))
            } else if dx < 0.0 {
                Err(ProfileError::degenerate_arc(
                    i + 1,
                    format!("x steps back from {} to {}", p0.x, p1.x),
                ))
            } else {
                Ok((p1.y - p0.y) / dx)
            }
        })
        .collect()
}

/// Estimates a tangent slope at every vertex from the secants between them. Interior vertices
/// take the mean of the two adjacent secants and each end takes the one secant it touches, which
/// gives a C1 curve without solving for a global spline.
pub fn tangents(secants: &[f64]) -> Vec<f64> {
    match (secants.first(), secants.last()) {
        (Some(first), Some(last)) => once(*first)
            .chain(secants.iter().tuple_windows().map(|(a, b)| (a + b) * 0.5))
            .chain(once(*last))
            .collect(),
        _ => Vec::new(),
    }
}

/// Evaluates the cubic Hermite segment between `p0` and `p1` with end slopes `m0` and `m1` at the
/// chord position `x`
pub fn hermite(p0: &Point2<f64>, p1: &Point2<f64>, m0: f64, m1: f64, x: f64) -> f64 {
    let h = p1.x - p0.x;
    let t = (x - p0.x) / h;
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * p0.y + h * h10 * m0 + h01 * p1.y + h * h11 * m1
}

/// A single surface of the profile prepared for interpolation: its vertices, their chord
/// positions and the tangent slope at each vertex.
pub struct HermiteArc {
    points: Vec<Point2<f64>>,
    knots: Vec<f64>,
    tangents: Vec<f64>,
}

impl HermiteArc {
    pub fn from_points(points: &[Point2<f64>]) -> Result<Self> {
        if points.len() < 2 {
            return Err(ProfileError::split(format!(
                "an arc needs at least 2 points to interpolate, found {}",
                points.len()
            )));
        }

        let tangents = tangents(&secants(points)?);

        Ok(HermiteArc {
            points: points.to_vec(),
            knots: points.iter().map(|p| p.x).collect(),
            tangents,
        })
    }

    /// Returns the point on the arc at chord position `x`. A position that coincides exactly with
    /// a vertex returns that vertex unchanged.
    pub fn point_at(&self, x: f64) -> Result<Point2<f64>> {
        match bracket_search(&self.knots, x) {
            Bracket::Exact(i) => Ok(self.points[i]),
            Bracket::Between(i) => {
                let y = hermite(
                    &self.points[i],
                    &self.points[i + 1],
                    self.tangents[i],
                    self.tangents[i + 1],
                    x,
                );
                Ok(Point2::new(x, y))
            }
            Bracket::Outside => {
                let last = self.knots.len() - 1;
                let index = if x < self.knots[0] { 0 } else { last };
                Err(ProfileError::degenerate_arc(
                    index,
                    format!(
                        "x = {} is outside the arc range [{}, {}]",
                        x, self.knots[0], self.knots[last]
                    ),
                ))
            }
        }
    }
}

/// Samples an arc at every position of the grid, in grid order
pub fn resample_arc(arc: &[Point2<f64>], grid: &[f64]) -> Result<Vec<Point2<f64>>> {
    let hermite_arc = HermiteArc::from_points(arc)?;
    grid.iter().map(|x| hermite_arc.point_at(*x)).collect()
}

/// Resamples both surfaces onto a shared chordwise grid and joins them into one loop running from
/// the trailing edge over the upper surface to the leading edge, then back along the lower
/// surface to the trailing edge.
pub fn resample(
    split: &SplitProfile,
    resolution: usize,
    spacing: Spacing,
) -> Result<Vec<Point2<f64>>> {
    if resolution == 0 {
        return Err(ProfileError::invalid_params("resolution must be at least 1"));
    }

    let grid = chord_grid(resolution, spacing);

    let mut upper = resample_arc(&split.upper, &grid)?;
    let mut lower = resample_arc(&split.lower, &grid)?;
    upper.sort_by(|a, b| b.x.total_cmp(&a.x));
    lower.sort_by(|a, b| a.x.total_cmp(&b.x));

    trace!(upper = upper.len(), lower = lower.len(), "Resampled arcs");

    Ok(close_loop(upper, lower))
}

/// Joins a descending upper arc and an ascending lower arc so the loop starts and ends exactly at
/// the trailing edge (1, 0) and crosses the leading edge once.
///
/// Lower's first point is dropped when it sits on x = 0 at or above the end of the upper arc, so
/// the loop never doubles back at the leading edge. A lower start below the upper end is a
/// vertical leading edge and both points are kept.
fn close_loop(upper: Vec<Point2<f64>>, lower: Vec<Point2<f64>>) -> Vec<Point2<f64>> {
    let trailing = Point2::new(1.0, 0.0);
    let leading = Point2::origin();

    let mut result = Vec::with_capacity(upper.len() + lower.len() + 3);
    if upper.first() != Some(&trailing) {
        result.push(trailing);
    }
    result.extend(upper);

    if result.last().map(|p| p.x) != Some(0.0) {
        result.push(leading);
    }

    let skip = match (result.last(), lower.first()) {
        (Some(end), Some(start)) => start.x == 0.0 && start.y >= end.y,
        _ => false,
    };
    result.extend(lower.into_iter().skip(usize::from(skip)));

    if result.last() != Some(&trailing) {
        result.push(trailing);
    }

    result
}
