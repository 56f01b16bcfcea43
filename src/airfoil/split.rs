use super::common::SplitStrategy;
use super::SplitProfile;
use crate::errors::{ProfileError, Result};
use itertools::Itertools;
use ncollide2d::na::Point2;
use tracing::{debug, trace, warn};

/// A maximum-x split this close to either end of the contour is treated as the trailing edge
const EXTREMUM_END_MARGIN: usize = 3;

/// Divides a raw contour into its upper and lower surfaces. Both returned arcs run from the
/// leading edge at x = 0 toward the trailing edge, and the upper arc is the one which sits higher
/// on average.
pub fn split(points: &[Point2<f64>], strategy: SplitStrategy) -> Result<SplitProfile> {
    if points.len() < 3 {
        return Err(ProfileError::split(format!(
            "a contour needs at least 3 points, found {}",
            points.len()
        )));
    }

    let index = match strategy {
        SplitStrategy::Gradient => gradient_split_index(points)?,
        SplitStrategy::Extremum => extremum_split_index(points),
    };
    debug!(index, ?strategy, "Found split point");

    let (first, second) = points.split_at(index + 1);
    if second.is_empty() {
        return Err(ProfileError::split(format!(
            "split at {} leaves nothing for the second surface",
            index
        )));
    }

    let mut upper = oriented(first);
    let mut lower = oriented(second);

    if mean_y(&lower) > mean_y(&upper) {
        trace!("Swapping surfaces");
        std::mem::swap(&mut upper, &mut lower);
    }

    let (upper, upper_added) = with_leading_edge(upper);
    let (lower, lower_added) = with_leading_edge(lower);

    for (label, arc) in [("upper", &upper), ("lower", &lower)] {
        if arc.len() < 2 {
            return Err(ProfileError::split(format!(
                "{} surface has {} point(s), at least 2 are needed",
                label,
                arc.len()
            )));
        }
    }

    Ok(SplitProfile::new(upper, lower).with_added_leading_edge(upper_added, lower_added))
}

/// Finds the split by looking for the first reversal in the direction of travel along x. The
/// returned index is the last point of the first surface.
///
/// Steps with no change in x are ignored, so a reversal is found between two consecutive non-zero
/// steps `a < b`, and the split sits just before step `b`. If the step directly after `b` reverses
/// again, the point between them is a single-point excursion (for instance the jump back to the
/// leading edge in a Lednicer-ordered file) and the split moves forward to include it.
pub fn gradient_split_index(points: &[Point2<f64>]) -> Result<usize> {
    let steps: Vec<(usize, f64)> = points
        .iter()
        .tuple_windows()
        .map(|(p0, p1)| p0.x - p1.x)
        .enumerate()
        .filter(|(_, g)| *g != 0.0)
        .collect();

    for (k, (&(_, g0), &(b, g1))) in steps.iter().tuple_windows().enumerate() {
        if g0.signum() == g1.signum() {
            continue;
        }

        if let Some(&(c, g2)) = steps.get(k + 2) {
            if c == b + 1 && g2.signum() != g1.signum() {
                return Ok(b);
            }
        }

        return Ok(b - 1);
    }

    Err(ProfileError::split(
        "the contour never reverses direction along the chord",
    ))
}

/// Uses the point of largest x as the split, unless it lies at either end of the contour, in
/// which case the contour starts at the trailing edge and the point of smallest x is used.
pub fn extremum_split_index(points: &[Point2<f64>]) -> usize {
    let last = points.len().saturating_sub(1);
    let max_i = points
        .iter()
        .position_max_by(|a, b| a.x.total_cmp(&b.x))
        .unwrap_or(0);

    if max_i < EXTREMUM_END_MARGIN || last - max_i < EXTREMUM_END_MARGIN {
        points
            .iter()
            .position_min_by(|a, b| a.x.total_cmp(&b.x))
            .unwrap_or(0)
    } else {
        max_i
    }
}

/// Returns a copy of the arc which runs from low x to high x. The decision is made on the second
/// and second to last points, which are less likely than the end points to be shared with the
/// other surface, and falls back to the end points for short arcs.
fn oriented(arc: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let n = arc.len();
    let backwards = if n >= 4 && arc[1].x != arc[n - 2].x {
        arc[1].x > arc[n - 2].x
    } else {
        n >= 2 && arc[0].x > arc[n - 1].x
    };

    if backwards {
        arc.iter().rev().copied().collect()
    } else {
        arc.to_vec()
    }
}

fn mean_y(arc: &[Point2<f64>]) -> f64 {
    if arc.is_empty() {
        return 0.0;
    }
    arc.iter().map(|p| p.y).sum::<f64>() / arc.len() as f64
}

/// Makes the arc start at x = 0. A first point slightly behind the leading edge is moved onto it,
/// any other start gets a synthetic (0, 0) in front. Also returns whether a point was added.
fn with_leading_edge(mut arc: Vec<Point2<f64>>) -> (Vec<Point2<f64>>, bool) {
    match arc.first().map(|p| p.x) {
        Some(x) if x < 0.0 => {
            warn!(x, y = arc[0].y, "Leading edge point lies behind x = 0, moved onto it");
            arc[0].x = 0.0;
            (arc, false)
        }
        Some(x) if x != 0.0 => (std::iter::once(Point2::origin()).chain(arc).collect(), true),
        _ => (arc, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn pts(p: &[(f64, f64)]) -> Vec<Point2<f64>> {
        p.iter().map(|(a, b)| Point2::new(*a, *b)).collect()
    }

    fn scenario() -> Vec<Point2<f64>> {
        pts(&[(1.0, 0.0), (0.5, 0.06), (0.0, 0.0), (0.5, -0.04), (1.0, 0.0)])
    }

    #[test_case(SplitStrategy::Gradient)]
    #[test_case(SplitStrategy::Extremum)]
    fn test_scenario_arcs(s: SplitStrategy) {
        let result = split(&scenario(), s).unwrap();
        assert_eq!(pts(&[(0.0, 0.0), (0.5, 0.06), (1.0, 0.0)]), result.upper);
        assert_eq!(pts(&[(0.0, 0.0), (0.5, -0.04), (1.0, 0.0)]), result.lower);
    }

    #[test]
    fn test_gradient_index_scenario() {
        assert_eq!(1, gradient_split_index(&scenario()).unwrap());
    }

    #[test]
    fn test_extremum_index_scenario() {
        assert_eq!(2, extremum_split_index(&scenario()));
    }

    #[test]
    fn test_extremum_index_interior_max() {
        // Contour which starts at the leading edge, so the maximum x is in the middle
        let points = pts(&[
            (0.0, 0.0),
            (0.1, -0.03),
            (0.4, -0.04),
            (0.8, -0.02),
            (1.0, 0.0),
            (0.8, 0.03),
            (0.4, 0.06),
            (0.1, 0.04),
        ]);
        assert_eq!(4, extremum_split_index(&points));

        let result = split(&points, SplitStrategy::Extremum).unwrap();
        assert_eq!(
            pts(&[(0.0, 0.0), (0.1, 0.04), (0.4, 0.06), (0.8, 0.03)]),
            result.upper
        );
        assert_eq!(
            pts(&[(0.0, 0.0), (0.1, -0.03), (0.4, -0.04), (0.8, -0.02), (1.0, 0.0)]),
            result.lower
        );
    }

    #[test_case(SplitStrategy::Gradient)]
    #[test_case(SplitStrategy::Extremum)]
    fn test_reverse_winding_swaps_surfaces(s: SplitStrategy) {
        let points = pts(&[(1.0, 0.0), (0.5, -0.04), (0.0, 0.0), (0.5, 0.06), (1.0, 0.0)]);
        let result = split(&points, s).unwrap();
        assert_eq!(pts(&[(0.0, 0.0), (0.5, 0.06), (1.0, 0.0)]), result.upper);
        assert_eq!(pts(&[(0.0, 0.0), (0.5, -0.04), (1.0, 0.0)]), result.lower);
    }

    #[test]
    fn test_lednicer_order() {
        let points = pts(&[
            (0.0, 0.0),
            (0.5, 0.06),
            (1.0, 0.0),
            (0.0, 0.0),
            (0.5, -0.04),
            (1.0, 0.0),
        ]);
        assert_eq!(2, gradient_split_index(&points).unwrap());

        let result = split(&points, SplitStrategy::Gradient).unwrap();
        assert_eq!(pts(&[(0.0, 0.0), (0.5, 0.06), (1.0, 0.0)]), result.upper);
        assert_eq!(pts(&[(0.0, 0.0), (0.5, -0.04), (1.0, 0.0)]), result.lower);
    }

    #[test]
    fn test_vertical_leading_edge() {
        let points = pts(&[
            (1.0, 0.0),
            (0.5, 0.05),
            (0.0, 0.01),
            (0.0, -0.01),
            (0.5, -0.05),
            (1.0, 0.0),
        ]);
        let result = split(&points, SplitStrategy::Gradient).unwrap();
        assert_eq!(pts(&[(0.0, 0.01), (0.5, 0.05), (1.0, 0.0)]), result.upper);
        assert_eq!(pts(&[(0.0, -0.01), (0.5, -0.05), (1.0, 0.0)]), result.lower);
    }

    #[test]
    fn test_duplicate_trailing_edge_ignored() {
        let points = pts(&[
            (1.0, 0.0),
            (1.0, 0.0),
            (0.5, 0.06),
            (0.0, 0.0),
            (0.5, -0.04),
            (1.0, 0.0),
        ]);
        assert_eq!(2, gradient_split_index(&points).unwrap());
    }

    #[test]
    fn test_three_point_contour() {
        let points = pts(&[(1.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
        let result = split(&points, SplitStrategy::Gradient).unwrap();
        assert_eq!(pts(&[(0.0, 0.0), (1.0, 0.0)]), result.upper);
        assert_eq!(pts(&[(0.0, 0.0), (1.0, 0.0)]), result.lower);
    }

    #[test]
    fn test_no_reversal() {
        let points = pts(&[(0.0, 0.0), (0.5, 0.1), (1.0, 0.0)]);
        let result = split(&points, SplitStrategy::Gradient);
        assert!(matches!(result, Err(ProfileError::Split(_))));
    }

    #[test]
    fn test_constant_x() {
        let points = pts(&[(0.5, 0.0), (0.5, 0.1), (0.5, 0.2)]);
        let result = split(&points, SplitStrategy::Gradient);
        assert!(matches!(result, Err(ProfileError::Split(_))));
    }

    #[test]
    fn test_too_few_points() {
        let points = pts(&[(1.0, 0.0), (0.0, 0.0)]);
        let result = split(&points, SplitStrategy::Extremum);
        assert!(matches!(result, Err(ProfileError::Split(_))));
    }

    #[test]
    fn test_deterministic_labels() {
        let a = split(&scenario(), SplitStrategy::Gradient).unwrap();
        for _ in 0..10 {
            let b = split(&scenario(), SplitStrategy::Gradient).unwrap();
            assert_eq!(a.upper, b.upper);
            assert_eq!(a.lower, b.lower);
        }
    }

    #[test]
    fn test_input_untouched() {
        let points = scenario();
        let copy = points.clone();
        let _ = split(&points, SplitStrategy::Gradient).unwrap();
        assert_eq!(copy, points);
    }

    #[test]
    fn test_negative_leading_edge_moved_to_zero() {
        let points = pts(&[
            (1.0, 0.0),
            (0.5, 0.06),
            (-0.00001, 0.001),
            (0.5, -0.04),
            (1.0, 0.0),
        ]);
        let result = split(&points, SplitStrategy::Gradient).unwrap();
        assert_eq!(pts(&[(0.0, 0.0), (0.5, 0.06), (1.0, 0.0)]), result.upper);
        assert_eq!(pts(&[(0.0, 0.001), (0.5, -0.04), (1.0, 0.0)]), result.lower);
    }

    #[test_case(SplitStrategy::Gradient)]
    #[test_case(SplitStrategy::Extremum)]
    fn test_contour_leaves_out_added_points(s: SplitStrategy) {
        let result = split(&scenario(), s).unwrap();
        assert_eq!(scenario(), result.to_contour());
    }
}
