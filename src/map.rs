use crate::clock::{Clock, DayPhase, SystemClock};
use crate::direction::Direction;
use crate::error::{MapError, MapResult};
use crate::grid::Grid;
use crate::math::Point;
use crate::obstacle::{Obstacle, ObstacleKind};
use crate::util::Interval;
use itertools::iproduct;
use log::{debug, trace};
use smallvec::SmallVec;
use std::fmt;

/// The character drawn for cells that no obstacle covers.
pub const FILLER: char = '.';

/// The directions an agent can safely step in, in N, S, E, W order.
pub type SafeDirections = SmallVec<[Direction; 4]>;

/// A collection of obstacles on an unbounded grid.
pub struct Map {
    /// The obstacles, in insertion order.
    obstacles: Vec<Obstacle>,
    /// Decides whether time-dependent obstacles are in their day or night shape.
    clock: Box<dyn Clock>,
}

impl Map {
    /// Creates an empty map that reads the local wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty map driven by the given time source.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            obstacles: vec![],
            clock: Box::new(clock),
        }
    }

    /// Creates a map holding the given obstacles, in order.
    pub fn from_obstacles(obstacles: impl IntoIterator<Item = Obstacle>) -> Self {
        let mut map = Self::new();
        map.obstacles.extend(obstacles);
        map
    }

    /// Replaces the map's time source.
    pub fn set_clock(&mut self, clock: impl Clock + 'static) {
        self.clock = Box::new(clock);
    }

    /// Adds an obstacle to the map. Obstacles are validated on construction,
    /// so this cannot fail.
    pub fn add_obstacle(&mut self, obstacle: impl Into<Obstacle>) {
        let obstacle = obstacle.into();
        trace!(
            "Adding {:?} at {:?} as obstacle #{}",
            obstacle.kind(),
            obstacle.center(),
            self.obstacles.len()
        );
        self.obstacles.push(obstacle);
    }

    /// The obstacles on the map, in insertion order.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Returns the number of obstacles on the map.
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Removes every obstacle from the map.
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Samples the map's clock.
    pub fn day_phase(&self) -> DayPhase {
        self.clock.day_phase()
    }

    /// Returns true if any obstacle covers the point right now.
    pub fn is_blocked(&self, point: Point) -> bool {
        self.is_blocked_at(point, self.day_phase())
    }

    /// Returns true if any obstacle covers the point during the given phase of the day.
    pub fn is_blocked_at(&self, point: Point, phase: DayPhase) -> bool {
        self.obstacles.iter().any(|o| o.contains(point, phase))
    }

    /// Gets the kind of the earliest added obstacle covering the point right now.
    pub fn first_match(&self, point: Point) -> Option<ObstacleKind> {
        self.first_match_at(point, self.day_phase())
    }

    /// Gets the kind of the earliest added obstacle covering the point
    /// during the given phase of the day.
    pub fn first_match_at(&self, point: Point, phase: DayPhase) -> Option<ObstacleKind> {
        self.obstacles
            .iter()
            .find(|o| o.contains(point, phase))
            .map(|o| o.kind())
    }

    /// Lists the directions in which the neighbouring cell is currently unobstructed.
    ///
    /// This does not check the point itself; callers that care whether the agent's
    /// own cell is covered should check [`Map::is_blocked`] first, or use
    /// [`Assessment`](crate::Assessment).
    pub fn safe_directions(&self, point: Point) -> SafeDirections {
        self.safe_directions_at(point, self.day_phase())
    }

    /// Lists the unobstructed directions during the given phase of the day.
    /// A step off the edge of the plane is never safe.
    pub fn safe_directions_at(&self, point: Point, phase: DayPhase) -> SafeDirections {
        Direction::ALL
            .into_iter()
            .filter(|dir| {
                dir.checked_step(point)
                    .is_some_and(|next| !self.is_blocked_at(next, phase))
            })
            .collect()
    }

    /// Draws the rectangle between two corners, both inclusive, with each cell showing
    /// the symbol of the first obstacle covering it or [`FILLER`].
    pub fn render(&self, top_left: Point, bottom_right: Point) -> MapResult<Grid> {
        if top_left.x > bottom_right.x || top_left.y > bottom_right.y {
            return Err(MapError::InvalidRegion {
                top_left,
                bottom_right,
            });
        }

        let phase = self.day_phase();
        let xs = Interval::new(top_left.x, bottom_right.x);
        let ys = Interval::new(top_left.y, bottom_right.y);
        debug!("Rendering {:?} x {:?} during the {:?}", xs, ys, phase);

        let cells = iproduct!(ys.iter(), xs.iter())
            .map(|(y, x)| {
                self.first_match_at(Point::new(x, y), phase)
                    .map_or(FILLER, ObstacleKind::symbol)
            })
            .collect();
        Ok(Grid::new(top_left, xs.count() as usize, cells))
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("obstacles", &self.obstacles)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::clock::FixedClock;
    use crate::obstacle::{Fence, Guard, MagicCross, Sensor};

    fn day_map() -> Map {
        Map::with_clock(FixedClock(12))
    }

    #[test]
    fn empty_map_is_open() {
        let map = day_map();
        assert!(map.is_empty());
        assert!(!map.is_blocked(Point::new(0, 0)));
        assert_eq!(map.first_match(Point::new(0, 0)), None);
        assert_eq!(
            map.safe_directions(Point::new(0, 0)).as_slice(),
            &Direction::ALL
        );
    }

    #[test]
    fn first_match_follows_insertion_order() {
        let mut map = day_map();
        map.add_obstacle(Sensor::new(Point::new(0, 0), 2.0).unwrap());
        map.add_obstacle(Guard::new(Point::new(1, 0)));
        assert_eq!(map.len(), 2);
        assert_eq!(map.first_match(Point::new(1, 0)), Some(ObstacleKind::Sensor));

        let mut reversed = day_map();
        reversed.add_obstacle(Guard::new(Point::new(1, 0)));
        reversed.add_obstacle(Sensor::new(Point::new(0, 0), 2.0).unwrap());
        assert_eq!(
            reversed.first_match(Point::new(1, 0)),
            Some(ObstacleKind::Guard)
        );

        // Obstruction does not depend on order
        for p in [Point::new(1, 0), Point::new(0, 2), Point::new(5, 5)] {
            assert_eq!(map.is_blocked(p), reversed.is_blocked(p));
        }
    }

    #[test]
    fn safe_directions_skip_blocked_neighbours() {
        let mut map = day_map();
        map.add_obstacle(Guard::new(Point::new(0, -1)));
        map.add_obstacle(Fence::new(Point::new(1, -3), Point::new(1, 3)).unwrap());
        let dirs = map.safe_directions(Point::new(0, 0));
        assert_eq!(dirs.as_slice(), &[Direction::South, Direction::West]);

        map.add_obstacle(Guard::new(Point::new(0, 1)));
        map.add_obstacle(Guard::new(Point::new(-1, 0)));
        assert!(map.safe_directions(Point::new(0, 0)).is_empty());
    }

    #[test]
    fn no_safe_step_off_the_plane() {
        let mut map = day_map();
        assert_eq!(
            map.safe_directions(Point::new(i32::MAX, 0)).as_slice(),
            &[Direction::North, Direction::South, Direction::West]
        );
        assert_eq!(
            map.safe_directions(Point::new(i32::MIN, i32::MIN)).as_slice(),
            &[Direction::South, Direction::East]
        );

        map.add_obstacle(Guard::new(Point::new(i32::MAX - 1, 0)));
        assert_eq!(
            map.safe_directions(Point::new(i32::MAX, 0)).as_slice(),
            &[Direction::North, Direction::South]
        );
    }

    #[test]
    fn render_at_plane_edge() {
        let mut map = day_map();
        map.add_obstacle(Guard::new(Point::new(i32::MAX, i32::MAX)));
        let grid = map
            .render(Point::new(i32::MAX - 1, i32::MAX - 1), Point::new(i32::MAX, i32::MAX))
            .unwrap();
        assert_eq!(grid.to_string(), "..\n.g\n");
    }

    #[test]
    fn cross_follows_the_clock() {
        let mut map = Map::with_clock(FixedClock(12));
        map.add_obstacle(MagicCross::new(Point::new(0, 0)));
        assert!(map.is_blocked(Point::new(3, 0)));
        assert!(!map.is_blocked(Point::new(3, 2)));

        map.set_clock(FixedClock(23));
        assert!(!map.is_blocked(Point::new(3, 0)));
        assert!(map.is_blocked(Point::new(3, 2)));
    }

    #[test]
    fn render_single_guard() {
        let mut map = day_map();
        map.add_obstacle(Guard::new(Point::new(1, 1)));
        let grid = map.render(Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.to_string(), "...\n.g.\n...\n");
        assert_eq!(grid.get(Point::new(1, 1)), Some('g'));
        assert_eq!(grid.get(Point::new(3, 1)), None);
    }

    #[test]
    fn render_mixed_obstacles() {
        let mut map = day_map();
        map.add_obstacle(Fence::new(Point::new(0, 0), Point::new(3, 0)).unwrap());
        map.add_obstacle(Sensor::new(Point::new(2, 2), 1.0).unwrap());
        map.add_obstacle(Guard::new(Point::new(2, 2)));
        let grid = map.render(Point::new(-2, 0), Point::new(3, 2)).unwrap();
        let rows = grid
            .rows()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(rows, vec!["..ffff", "....s.", "...sss"]);
    }

    #[test]
    fn render_rejects_inverted_regions() {
        let map = day_map();
        assert!(matches!(
            map.render(Point::new(2, 0), Point::new(0, 2)),
            Err(MapError::InvalidRegion { .. })
        ));
        assert!(matches!(
            map.render(Point::new(0, 2), Point::new(2, 0)),
            Err(MapError::InvalidRegion { .. })
        ));
        let single = map.render(Point::new(4, 4), Point::new(4, 4)).unwrap();
        assert_eq!(single.to_string(), ".\n");
    }
}
