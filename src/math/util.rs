use super::{Offset, Point};

/// Computes the vector between two grid points, flipping the y axis so that
/// the result is expressed in math space rather than screen space.
///
/// # Returns
/// `(p1.x - p2.x, p2.y - p1.y)`
pub fn vector_between(p1: Point, p2: Point) -> Offset {
    Offset::new(p1.x as i64 - p2.x as i64, p2.y as i64 - p1.y as i64)
}

/// Computes the dot product of two offsets.
pub fn dot(a: Offset, b: Offset) -> i64 {
    a.x * b.x + a.y * b.y
}

/// Computes the straight line distance between two grid points.
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = a.x as f64 - b.x as f64;
    let dy = a.y as f64 - b.y as f64;
    dx.hypot(dy)
}

/// Computes the number of unit cardinal steps between two grid points.
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn vector_between_flips_y() {
        let v = vector_between(Point::new(3, 1), Point::new(1, 4));
        assert_eq!(v, Offset::new(2, 3));
        assert_eq!(dot(v, Offset::new(1, 0)), 2);
        assert_eq!(dot(v, Offset::new(0, -1)), -3);
    }

    #[test]
    fn distances() {
        assert_approx_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(manhattan(Point::new(-2, 5), Point::new(3, 1)), 9);
    }

    #[test]
    fn extreme_points() {
        let (min, max) = (Point::new(i32::MIN, 0), Point::new(i32::MAX, 0));
        assert_eq!(vector_between(max, min), Offset::new(u32::MAX as i64, 0));
        assert_eq!(vector_between(min, max), Offset::new(-(u32::MAX as i64), 0));
        assert_approx_eq!(euclidean(min, max), u32::MAX as f64);
        assert_eq!(manhattan(min, max), u32::MAX);
    }
}
