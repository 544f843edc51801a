use nalgebra::Point2;

/// A 2D point in image pixel coordinates.
///
/// Plain coordinate equality, no identity — two points with equal `(x, y)`
/// compare equal regardless of how they were produced.
pub type Point = Point2<f32>;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    (a - b).norm()
}

/// The midpoint of the segment `a`-`b`.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn midpoint_averages_coordinates() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 2.0);
        assert_eq!(midpoint(a, b), Point::new(2.0, 1.0));
    }

    #[test]
    fn point_round_trips_through_json() {
        let p = Point::new(3.5, -1.25);
        let json = serde_json::to_string(&p).expect("serialize");
        let back: Point = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(p, back);
    }
}
