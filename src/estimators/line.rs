//! Line estimator for 2D line fitting.

use nalgebra::Matrix2;

use crate::core::Estimator;
use crate::models::Line;
use crate::types::Point;

/// Line estimator for 2D line fitting.
///
/// A minimal sample of two points gives the line through both. Larger sets,
/// as used by the final refinement, are fitted by total least squares: the
/// normal is the eigenvector of the scatter matrix with the smallest
/// eigenvalue, and the line passes through the centroid. Either way the
/// result is normalized (`a² + b² = 1`).
///
/// The error is the signed point-to-line distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEstimator;

impl LineEstimator {
    pub fn new() -> Self {
        Self
    }

    fn fit(data: &[Point], indices: &[usize]) -> Option<Line> {
        match indices {
            [] | [_] => return None,
            &[i, j] => return Line::through(&data[i], &data[j]),
            _ => {}
        }
        let m = indices.len() as f64;
        let (sum_x, sum_y) = indices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &i| (sx + data[i].x, sy + data[i].y));
        let (mean_x, mean_y) = (sum_x / m, sum_y / m);

        let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
        for &i in indices {
            let dx = data[i].x - mean_x;
            let dy = data[i].y - mean_y;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }

        // Coincident points: no direction to fit.
        let scale = 1.0 + mean_x * mean_x + mean_y * mean_y;
        if sxx + syy <= f64::EPSILON * scale * m {
            return None;
        }

        let eigen = Matrix2::new(sxx, sxy, sxy, syy).symmetric_eigen();
        let smallest = eigen.eigenvalues.imin();
        let normal = eigen.eigenvectors.column(smallest);
        let (a, b) = (normal[0], normal[1]);
        Line::new(a, b, -(a * mean_x + b * mean_y)).normalized()
    }
}

impl Estimator for LineEstimator {
    type Datum = Point;
    type Model = Line;

    fn sample_size(&self) -> usize {
        2
    }

    fn compute_models(&self, data: &[Point], sample: &[usize]) -> Vec<Line> {
        Self::fit(data, sample).into_iter().collect()
    }

    fn compute_error(&self, model: &Line, datum: &Point) -> f64 {
        model.signed_distance(datum)
    }
}

#[cfg(test)]
mod tests {
    use super::LineEstimator;
    use crate::core::Estimator;
    use crate::models::Line;
    use crate::types::Point;
    use approx::assert_relative_eq;

    #[test]
    fn two_points_define_the_line_through_them() {
        let data = [Point::new(0.0, 1.25), Point::new(400.0, 301.25)];
        let models = LineEstimator.compute_models(&data, &[0, 1]);
        assert_eq!(models.len(), 1);
        let truth = Line::new(0.6, -0.8, 1.0);
        assert!(models[0].approx_eq(&truth, 1e-12), "got {}", models[0]);
    }

    #[test]
    fn axis_aligned_lines_pick_the_right_normal() {
        let horizontal = [Point::new(-3.0, 2.0), Point::new(5.0, 2.0)];
        let line = &LineEstimator.compute_models(&horizontal, &[0, 1])[0];
        assert!(line.approx_eq(&Line::new(0.0, 1.0, -2.0), 1e-12), "got {line}");

        let vertical = [Point::new(7.0, -1.0), Point::new(7.0, 9.0)];
        let line = &LineEstimator.compute_models(&vertical, &[0, 1])[0];
        assert!(line.approx_eq(&Line::new(1.0, 0.0, -7.0), 1e-12), "got {line}");
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let data = [Point::new(3.0, 4.0), Point::new(3.0, 4.0), Point::new(1.0, 1.0)];
        assert!(LineEstimator.compute_models(&data, &[0, 1]).is_empty());
        assert_eq!(LineEstimator.compute_models(&data, &[0, 2]).len(), 1);
    }

    #[test]
    fn minimal_sample_agrees_with_orthogonal_regression() {
        let data = [Point::new(1.0, 2.0), Point::new(4.0, -2.0), Point::new(1.0, 2.0)];
        let minimal = LineEstimator.compute_models(&data, &[0, 1]);
        // Duplicate point forces the regression path onto the same line.
        let regression = LineEstimator.refine_model(&data, &[0, 1, 2]).unwrap();
        assert_eq!(minimal, vec![Line::through(&data[0], &data[1]).unwrap()]);
        assert!(minimal[0].approx_eq(&regression, 1e-12), "{} vs {regression}", minimal[0]);
    }

    #[test]
    fn error_is_signed_euclidean_distance() {
        let line = Line::new(0.0, 1.0, -2.0);
        assert_relative_eq!(LineEstimator.compute_error(&line, &Point::new(10.0, 5.0)), 3.0);
        assert_relative_eq!(LineEstimator.compute_error(&line, &Point::new(-4.0, 0.5)), -1.5);
    }

    #[test]
    fn many_points_give_orthogonal_regression() {
        // Noisy samples of y = x.
        let data = [
            Point::new(0.0, 0.1),
            Point::new(1.0, 0.9),
            Point::new(2.0, 2.1),
            Point::new(3.0, 2.9),
        ];
        let line = LineEstimator.refine_model(&data, &[0, 1, 2, 3]).unwrap();
        let expected = Line::new(1.0, -1.0, 0.0);
        assert!(line.approx_eq(&expected, 0.05), "got {line}");
        assert!((line.a.hypot(line.b) - 1.0).abs() < 1e-12);
    }
}
