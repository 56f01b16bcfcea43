use super::Profile;
use crate::errors::{ProfileError, Result};
use ncollide2d::na::Point2;
use regex::Regex;
use tracing::{debug, trace, warn};

/// Matches a signed decimal number with optional fraction and exponent, such as `1`, `-.5`,
/// `0.00126` or `1.2E-03`
const NUMBER_PATTERN: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";

/// Parses the lines of an airfoil coordinate file (Selig or Lednicer layout). The first line is
/// the name of the profile, and every following line that contains exactly two numbers becomes a
/// point of the raw contour. Lines with any other count of numbers are skipped.
///
/// Some files start their coordinates with a point count, which reads like a point with an x
/// value greater than one. If the first point has x > 1 it is dropped.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Profile> {
    if lines.len() < 2 {
        return Err(ProfileError::parse(format!(
            "expected a name line and at least one coordinate line, found {} line(s)",
            lines.len()
        )));
    }

    let number = Regex::new(NUMBER_PATTERN)
        .map_err(|e| ProfileError::parse(format!("bad number pattern: {e}")))?;

    let name = lines[0].as_ref().trim().to_string();
    let mut points = Vec::new();

    for (i, line) in lines.iter().enumerate().skip(1) {
        let tokens: Vec<f64> = number
            .find_iter(line.as_ref())
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .collect();

        if let [x, y] = tokens.as_slice() {
            points.push(Point2::new(*x, *y));
        } else {
            trace!(line = i, tokens = tokens.len(), "Skipping line");
        }
    }

    if let Some(first) = points.first() {
        if first.x > 1.0 {
            debug!(x = first.x, y = first.y, "Dropping point count header");
            points.remove(0);
        }
    }

    if points.is_empty() {
        return Err(ProfileError::parse(format!(
            "profile '{}' contains no coordinate pairs",
            name
        )));
    }

    let outside = points.iter().filter(|p| !(0.0..=1.0).contains(&p.x)).count();
    if outside > 0 {
        warn!(
            name = name.as_str(),
            count = outside,
            "Points lie outside the unit chord"
        );
    }

    debug!(name = name.as_str(), points = points.len(), "Parsed profile");

    Ok(Profile::new(name, points))
}
