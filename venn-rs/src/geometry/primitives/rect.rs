use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Circle, Point};

/// Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        debug_assert!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Bounding box of a set of circles. Panics on an empty slice.
    pub fn bounding_circles<'a>(circles: impl IntoIterator<Item = &'a Circle>) -> Rect {
        let mut circles = circles.into_iter();
        let mut bbox = circles.next().expect("no circles provided").bbox();

        for c in circles {
            let b = c.bbox();
            bbox.x_min = f64::min(bbox.x_min, b.x_min);
            bbox.y_min = f64::min(bbox.y_min, b.y_min);
            bbox.x_max = f64::max(bbox.x_max, b.x_max);
            bbox.y_max = f64::max(bbox.y_max, b.y_max);
        }
        bbox
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Shape for Rect {
    fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn bbox(&self) -> Rect {
        *self
    }
}
