use crate::direction::Direction;
use crate::error::MapResult;
use crate::math::{dot, vector_between, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A security camera watching a 90° cone in one of the four cardinal directions.
/// The cone is unbounded in length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Camera {
    center: Point,
    direction: Direction,
}

impl Camera {
    pub fn new(center: Point, direction: Direction) -> Self {
        Self { center, direction }
    }

    /// Creates a camera from a direction initial (`n`, `s`, `e` or `w`).
    pub fn from_char(center: Point, direction: char) -> MapResult<Self> {
        Ok(Self::new(center, Direction::from_char(direction)?))
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true if the point is inside the camera's field of view, that is
    /// within 45° either side of the heading. Both edges of the cone are inside,
    /// and so is the camera's own cell.
    pub fn contains(&self, point: Point) -> bool {
        let to_point = vector_between(point, self.center);
        let heading = self.direction.heading();
        // tan(45°) = 1, so compare the components along and across the heading
        let along = dot(to_point, heading);
        let across = heading.perp_dot(to_point).abs();
        along >= across
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::MapError;
    use cgmath::Vector2;

    #[test]
    fn sees_straight_ahead() {
        let center = Point::new(5, 5);
        for dir in Direction::ALL {
            let camera = Camera::new(center, dir);
            assert!(camera.contains(center));
            let mut ahead = center;
            let mut behind = center;
            for _ in 0..20 {
                ahead = dir.step(ahead);
                behind = behind - dir.offset();
                assert!(camera.contains(ahead), "{dir:?} should see {ahead:?}");
                assert!(!camera.contains(behind), "{dir:?} should not see {behind:?}");
            }
        }
    }

    #[test]
    fn north_is_up_the_screen() {
        let camera = Camera::new(Point::new(0, 0), Direction::North);
        assert!(camera.contains(Point::new(0, -3)));
        assert!(camera.contains(Point::new(1, -3)));
        assert!(camera.contains(Point::new(-1, -3)));
        assert!(!camera.contains(Point::new(0, 3)));
        assert!(!camera.contains(Point::new(3, -1)));
        assert!(!camera.contains(Point::new(-3, 0)));
    }

    #[test]
    fn cone_widens_with_distance() {
        let camera = Camera::new(Point::new(0, 0), Direction::East);
        assert!(!camera.contains(Point::new(1, 2)));
        assert!(camera.contains(Point::new(4, 2)));
        assert!(camera.contains(Point::new(4, -2)));
        assert!(camera.contains(Point::new(10, 7)));
        assert!(!camera.contains(Point::new(-4, 2)));
    }

    #[test]
    fn diagonal_edges_are_inside() {
        let center = Point::new(0, 0);
        for dir in Direction::ALL {
            let camera = Camera::new(center, dir);
            let ahead = dir.offset() * 3;
            let across = Vector2::new(ahead.y, ahead.x);
            assert!(camera.contains(center + ahead + across), "{dir:?}");
            assert!(camera.contains(center + ahead - across), "{dir:?}");
            assert!(!camera.contains(center - ahead + across), "{dir:?}");
            assert!(!camera.contains(center - ahead - across), "{dir:?}");
        }
    }

    #[test]
    fn far_side_of_the_plane() {
        let east = Camera::new(Point::new(i32::MIN, 0), Direction::East);
        assert!(east.contains(Point::new(i32::MAX, 0)));
        assert!(east.contains(Point::new(i32::MAX, i32::MAX)));
        let west = Camera::new(Point::new(i32::MIN, 0), Direction::West);
        assert!(!west.contains(Point::new(i32::MAX, 0)));
        let south = Camera::new(Point::new(0, i32::MIN), Direction::South);
        assert!(south.contains(Point::new(0, i32::MAX)));
    }

    #[test]
    fn rejects_unknown_directions() {
        assert_eq!(
            Camera::from_char(Point::new(0, 0), 's'),
            Ok(Camera::new(Point::new(0, 0), Direction::South))
        );
        assert!(matches!(
            Camera::from_char(Point::new(0, 0), 'q'),
            Err(MapError::InvalidShape { .. })
        ));
    }
}
