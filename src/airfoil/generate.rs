use super::common::Spacing;
use ncollide2d::na::{Point2, Vector2};
use std::fmt::Write;

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber P is the
/// location of the maximum camber, and TT is the maximum thickness of the airfoil as a fraction of
/// the chord.  For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord and a max
/// thickness which is 12% of the chord length.
///
/// All geometry is on a unit chord, the leading edge at (0, 0) and the trailing edge at x = 1.
pub struct Naca4Digit {
    t: f64,
    m: f64,
    p: f64,
    closed: bool,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `t_max` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 t_max should be 0.12
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02
    ///
    /// * `max_camber_chord` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 2412 this values should be 0.4
    pub fn new(t_max: f64, max_camber: f64, max_camber_chord: f64) -> Naca4Digit {
        Naca4Digit {
            t: t_max,
            m: max_camber,
            p: max_camber_chord,
            closed: false,
        }
    }

    /// Removes the finite trailing edge thickness of the standard formula by subtracting a linear
    /// ramp, so that both surfaces meet exactly at (1, 0)
    #[must_use]
    pub fn closed(mut self) -> Naca4Digit {
        self.closed = true;
        self
    }

    fn open_thickness(&self, x: f64) -> f64 {
        (2.0 * self.t)
            * (1.485 * x.sqrt()
                + -0.630 * x
                + -1.758 * x.powf(2.0)
                + 1.4215 * x.powf(3.0)
                + -0.5075 * x.powf(4.0))
    }

    /// Return the full thickness of the airfoil with respect to the camber line at a fraction from
    /// 0.0 to 1.0
    pub fn thickness(&self, x: f64) -> f64 {
        if self.closed {
            self.open_thickness(x) - x * self.open_thickness(1.0)
        } else {
            self.open_thickness(x)
        }
    }

    /// Return a 2D point with the position of the camber line at a fraction from 0.0 to 1.0
    pub fn camber_line(&self, x: f64) -> Point2<f64> {
        let y = if self.p < 1e-6 {
            0.0
        } else if x < self.p {
            (self.m / self.p.powf(2.0)) * (2.0 * self.p * x - x.powf(2.0))
        } else {
            // Factored so that the trailing edge lands exactly on y = 0
            (self.m / (1.0 - self.p).powf(2.0)) * (1.0 - x) * (1.0 + x - 2.0 * self.p)
        };

        Point2::new(x, y)
    }

    fn camber_normal(&self, x: f64) -> Vector2<f64> {
        let slope = if self.p < 1e-6 {
            0.0
        } else if x < self.p {
            (2.0 * self.m / self.p.powf(2.0)) * (self.p - x)
        } else {
            (2.0 * self.m / (1.0 - self.p).powf(2.0)) * (self.p - x)
        };

        let theta = slope.atan();
        Vector2::new(-theta.sin(), theta.cos())
    }

    /// The upper and lower surface points of the station at chord fraction `x`, offset from the
    /// camber line by half the thickness along its normal
    pub fn surfaces_at(&self, x: f64) -> (Point2<f64>, Point2<f64>) {
        let c = self.camber_line(x);
        let n = self.camber_normal(x);
        let half = self.thickness(x) * 0.5;

        (c + n * half, c - n * half)
    }

    /// Generates a closed contour in Selig order: from the trailing edge forward along the upper
    /// surface, through the leading edge, and back along the lower surface. There are `n`
    /// intervals on each surface distributed by `spacing`, and the leading edge point is shared.
    pub fn contour(&self, n: usize, spacing: Spacing) -> Vec<Point2<f64>> {
        let stations: Vec<(Point2<f64>, Point2<f64>)> = (0..=n)
            .map(|i| self.surfaces_at(spacing.position(i, n)))
            .collect();

        let upper = stations.iter().rev().map(|(u, _)| *u);
        let lower = stations.iter().skip(1).map(|(_, l)| *l);
        upper.chain(lower).collect()
    }

    /// Renders `contour` as the text of a Selig coordinate file
    pub fn to_selig(&self, name: &str, n: usize, spacing: Spacing) -> String {
        let mut text = String::new();
        text.push_str(name);
        text.push('\n');
        for p in self.contour(n, spacing).iter() {
            // Writing into a String can't fail
            let _ = writeln!(text, "{} {}", p.x, p.y);
        }
        text
    }
}
