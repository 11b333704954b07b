//! Synthetic line data with a known ground truth.
//!
//! Used to build benchmark and test inputs; the search engine never calls it.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{RansacError, Result};
use crate::models::Line;
use crate::types::Point;

/// Noisy observations of a known model plus the indices generated as inliers.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticData<D> {
    pub data: Vec<D>,
    pub inliers: Vec<usize>,
}

/// Generates points on (or near) a line inside an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineObserver {
    pub range_min: Point,
    pub range_max: Point,
}

impl Default for LineObserver {
    /// The 640×480 image rectangle.
    fn default() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(640.0, 480.0))
    }
}

impl LineObserver {
    pub fn new(range_min: Point, range_max: Point) -> Self {
        Self {
            range_min,
            range_max,
        }
    }

    /// Draw `n` points.
    ///
    /// Each point is an inlier with probability `inlier_ratio`: it is placed on
    /// `line` and then both coordinates are perturbed by Gaussian noise of
    /// standard deviation `noise`. Outliers are uniform in the rectangle. The
    /// free coordinate runs along the axis the line is less steep against, so
    /// inliers spread over the whole rectangle width (or height).
    pub fn generate<R: Rng>(
        &self,
        line: &Line,
        n: usize,
        noise: f64,
        inlier_ratio: f64,
        rng: &mut R,
    ) -> Result<SyntheticData<Point>> {
        if line.a == 0.0 && line.b == 0.0 {
            return Err(RansacError::InvalidSetting {
                name: "line",
                reason: "normal (a, b) must not be zero".into(),
            });
        }
        if !noise.is_finite() || noise < 0.0 {
            return Err(RansacError::InvalidSetting {
                name: "noise",
                reason: format!("must be finite and non-negative, got {noise}"),
            });
        }
        if !(0.0..=1.0).contains(&inlier_ratio) {
            return Err(RansacError::InvalidSetting {
                name: "inlier_ratio",
                reason: format!("must lie in [0, 1], got {inlier_ratio}"),
            });
        }

        let width = self.range_max.x - self.range_min.x;
        let height = self.range_max.y - self.range_min.y;
        let x_major = line.b.abs() > line.a.abs();

        let mut data = Vec::with_capacity(n);
        let mut inliers = Vec::new();
        for i in 0..n {
            let mut point = Point::origin();
            if x_major {
                point.x = width * rng.gen::<f64>() + self.range_min.x;
            } else {
                point.y = height * rng.gen::<f64>() + self.range_min.y;
            }

            if rng.gen::<f64>() > inlier_ratio {
                if x_major {
                    point.y = height * rng.gen::<f64>() + self.range_min.y;
                } else {
                    point.x = width * rng.gen::<f64>() + self.range_min.x;
                }
            } else {
                if x_major {
                    point.y = (line.a * point.x + line.c) / -line.b;
                } else {
                    point.x = (line.b * point.y + line.c) / -line.a;
                }
                let dx: f64 = rng.sample(StandardNormal);
                let dy: f64 = rng.sample(StandardNormal);
                point.x += noise * dx;
                point.y += noise * dy;
                inliers.push(i);
            }
            data.push(point);
        }

        Ok(SyntheticData { data, inliers })
    }
}
