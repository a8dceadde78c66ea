use crate::direction::Direction;
use crate::math::Point;
use itertools::Itertools;
use std::fmt;

/// A route found by a [`Pathfinder`](super::Pathfinder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    /// Where the route begins. Not one of the route's steps.
    start: Point,
    /// Every cell stepped onto, in order, ending at the target.
    points: Vec<Point>,
    /// The accumulated step cost.
    cost: i32,
}

impl Path {
    pub(crate) fn new(start: Point, points: Vec<Point>, cost: i32) -> Self {
        Self {
            start,
            points,
            cost,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    /// The cell the route ends on.
    pub fn end(&self) -> Point {
        self.points.last().copied().unwrap_or(self.start)
    }

    /// The cells stepped onto, excluding the start.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The number of steps.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Returns an iterator over the direction of each step.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        std::iter::once(&self.start)
            .chain(&self.points)
            .tuple_windows()
            .filter_map(|(from, to)| Direction::between(*from, *to))
    }
}

/// Spells out a route as one direction initial per step, e.g. `"EENNW"`.
pub fn path_to_directions(path: &Path) -> String {
    path.directions().map(Direction::symbol).collect()
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", path_to_directions(self))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn spells_each_step() {
        let path = Path::new(
            Point::new(0, 0),
            vec![
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(0, 1),
                Point::new(0, 0),
            ],
            40,
        );
        assert_eq!(path_to_directions(&path), "ESWN");
        assert_eq!(path.len(), 4);
        assert_eq!(path.end(), Point::new(0, 0));
    }

    #[test]
    fn empty_path() {
        let path = Path::new(Point::new(2, 2), vec![], 0);
        assert!(path.is_empty());
        assert_eq!(path.end(), Point::new(2, 2));
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn spells_steps_at_plane_edge() {
        let path = Path::new(
            Point::new(i32::MAX, i32::MIN),
            vec![
                Point::new(i32::MAX - 1, i32::MIN),
                Point::new(i32::MAX - 1, i32::MIN + 1),
                Point::new(i32::MAX, i32::MIN + 1),
                Point::new(i32::MAX, i32::MIN),
            ],
            40,
        );
        assert_eq!(path.to_string(), "WSEN");
    }
}
