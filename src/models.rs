//! Model types produced by the built-in estimators.

use std::fmt;

use crate::types::Point;

/// 2D line `a·x + b·y + c = 0`.
///
/// Lines built by [`Line::normalized`] have a unit normal (`a² + b² = 1`)
/// and a canonical sign (`a > 0`, or `a == 0` and `b > 0`), so
/// [`Line::signed_distance`] is a true Euclidean distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Rescale to a unit normal with canonical sign.
    ///
    /// Returns `None` if the normal `(a, b)` is zero or not finite.
    pub fn normalized(self) -> Option<Self> {
        let norm = self.a.hypot(self.b);
        if !norm.is_finite() || norm <= f64::EPSILON {
            return None;
        }
        let flip = self.a < 0.0 || (self.a == 0.0 && self.b < 0.0);
        let scale = if flip { -norm } else { norm };
        Some(Self::new(self.a / scale, self.b / scale, self.c / scale))
    }

    /// Line through two distinct points.
    pub fn through(p: &Point, q: &Point) -> Option<Self> {
        Self::new(p.y - q.y, q.x - p.x, p.x * q.y - q.x * p.y).normalized()
    }

    pub fn params(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// `a·x + b·y + c`; the signed distance when the line is normalized.
    pub fn signed_distance(&self, p: &Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Convert to `y = slope·x + intercept`, unless the line is vertical.
    pub fn to_slope_intercept(&self) -> Option<(f64, f64)> {
        if self.b.abs() <= f64::EPSILON {
            return None;
        }
        Some((-self.a / self.b, -self.c / self.b))
    }

    /// Component-wise comparison of the normalized forms.
    pub fn approx_eq(&self, other: &Line, tolerance: f64) -> bool {
        match (self.normalized(), other.normalized()) {
            (Some(l), Some(r)) => {
                (l.a - r.a).abs() <= tolerance
                    && (l.b - r.b).abs() <= tolerance
                    && (l.c - r.c).abs() <= tolerance
            }
            _ => false,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::Line;
    use crate::types::Point;
    use approx::assert_relative_eq;

    #[test]
    fn normalization_fixes_scale_and_sign() {
        let line = Line::new(-3.0, 4.0, 10.0).normalized().unwrap();
        assert_relative_eq!(line.a, 0.6);
        assert_relative_eq!(line.b, -0.8);
        assert_relative_eq!(line.c, -2.0);

        let horizontal = Line::new(0.0, -2.0, 4.0).normalized().unwrap();
        assert_eq!(horizontal.params(), [0.0, 1.0, -2.0]);

        assert!(Line::new(0.0, 0.0, 1.0).normalized().is_none());
    }

    #[test]
    fn line_through_points_has_zero_distance_at_both() {
        let p = Point::new(1.0, 2.0);
        let q = Point::new(4.0, 6.0);
        let line = Line::through(&p, &q).unwrap();
        assert!(line.signed_distance(&p).abs() < 1e-12);
        assert!(line.signed_distance(&q).abs() < 1e-12);
        assert_relative_eq!(line.signed_distance(&Point::new(1.0, 2.0 + 5.0)).abs(), 3.0);
        assert!(Line::through(&p, &p).is_none());
    }

    #[test]
    fn slope_intercept_and_approx_eq() {
        let line = Line::new(2.0, -1.0, 1.0);
        let (slope, intercept) = line.to_slope_intercept().unwrap();
        assert_relative_eq!(slope, 2.0);
        assert_relative_eq!(intercept, 1.0);
        assert!(Line::new(1.0, 0.0, 3.0).to_slope_intercept().is_none());

        assert!(line.approx_eq(&Line::new(-4.0, 2.0, -2.0), 1e-12));
        assert!(!line.approx_eq(&Line::new(2.0, -1.0, 1.5), 1e-6));
        assert_eq!(Line::new(0.6, -0.8, 1.0).to_string(), "0.6, -0.8, 1");
    }
}
