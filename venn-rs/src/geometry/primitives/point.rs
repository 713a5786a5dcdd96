use crate::geometry::geo_traits::{DistanceTo, Transformable};
use crate::geometry::transformation::Transformation;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    /// Centroid of a set of points. Panics on an empty slice.
    pub fn centroid_of(points: &[Point]) -> Point {
        debug_assert!(!points.is_empty(), "centroid of no points");
        let n = points.len() as f64;
        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.0, sy + p.1));
        Point(sx / n, sy / n)
    }
}

impl DistanceTo<Point> for Point {
    fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl Transformable for Point {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let m = t.matrix();
        let Point(x, y) = *self;
        self.0 = m[0][0].into_inner() * x + m[0][1].into_inner() * y + m[0][2].into_inner();
        self.1 = m[1][0].into_inner() * x + m[1][1].into_inner() * y + m[1][2].into_inner();
        self
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}
