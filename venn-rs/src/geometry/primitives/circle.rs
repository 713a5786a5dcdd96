use std::cmp::Ordering;
use std::f64::consts::PI;

use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::{
    CollidesWith, DistanceTo, SeparationDistance, Shape, Transformable,
};
use crate::geometry::primitives::{Point, Rect};
use crate::geometry::transformation::Transformation;

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );

        Self { center, radius }
    }

    /// Circle whose area equals `area`, i.e. radius = sqrt(area / pi).
    pub fn from_area(center: Point, area: f64) -> Self {
        debug_assert!(area.is_finite() && area >= 0.0, "invalid area: {area}");
        Self::new(center, (area / PI).sqrt())
    }
}

impl Shape for Circle {
    fn centroid(&self) -> Point {
        self.center
    }

    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    fn bbox(&self) -> Rect {
        let (r, x, y) = (self.radius, self.center.0, self.center.1);
        Rect {
            x_min: x - r,
            y_min: y - r,
            x_max: x + r,
            y_max: y + r,
        }
    }
}

impl CollidesWith<Point> for Circle {
    fn collides_with(&self, point: &Point) -> bool {
        point.sq_distance(&self.center) <= self.radius.powi(2)
    }
}

impl DistanceTo<Point> for Circle {
    fn distance(&self, point: &Point) -> f64 {
        let sq_d = point.sq_distance(&self.center);
        if sq_d < self.radius.powi(2) {
            0.0 //point is inside circle
        } else {
            sq_d.sqrt() - self.radius
        }
    }

    fn sq_distance(&self, point: &Point) -> f64 {
        self.distance(point).powi(2)
    }
}

impl SeparationDistance<Point> for Circle {
    fn separation_distance(&self, point: &Point) -> (GeoPosition, f64) {
        let d_center = self.center.distance(point);
        match d_center.partial_cmp(&self.radius).unwrap() {
            Ordering::Less | Ordering::Equal => (GeoPosition::Interior, self.radius - d_center),
            Ordering::Greater => (GeoPosition::Exterior, d_center - self.radius),
        }
    }
}

impl Transformable for Circle {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Circle { center, radius: _ } = self;
        center.transform(t);
        self
    }
}
