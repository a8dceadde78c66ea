use crate::error::{MapError, MapResult};
use crate::math::{Offset, Point};
use cgmath::Vector2;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four cardinal directions an agent can move in.
///
/// Grid coordinates grow downwards, so north decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, in the order they are reported to users.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Parses a direction from its lowercase or uppercase initial.
    pub fn from_char(c: char) -> MapResult<Self> {
        match c.to_ascii_lowercase() {
            'n' => Ok(Direction::North),
            's' => Ok(Direction::South),
            'e' => Ok(Direction::East),
            'w' => Ok(Direction::West),
            _ => Err(MapError::invalid_shape(format!(
                "'{c}' is not a direction; expected one of n, s, e or w"
            ))),
        }
    }

    /// The character used when printing directions.
    pub fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    /// The unit offset of one step in this direction, in grid coordinates.
    pub fn offset(self) -> Vector2<i32> {
        match self {
            Direction::North => Vector2::new(0, -1),
            Direction::South => Vector2::new(0, 1),
            Direction::East => Vector2::new(1, 0),
            Direction::West => Vector2::new(-1, 0),
        }
    }

    /// The unit vector of this direction in math space (positive y points up).
    pub fn heading(self) -> Offset {
        let offset = self.offset();
        Offset::new(offset.x as i64, -(offset.y as i64))
    }

    /// The cell one step away from `point` in this direction.
    /// Overflows at the edge of the plane; see [`Direction::checked_step`].
    pub fn step(self, point: Point) -> Point {
        point + self.offset()
    }

    /// The cell one step away from `point`, or `None` if that would leave
    /// the representable plane.
    pub fn checked_step(self, point: Point) -> Option<Point> {
        let offset = self.offset();
        Some(Point::new(
            point.x.checked_add(offset.x)?,
            point.y.checked_add(offset.y)?,
        ))
    }

    /// Works out which way a single cardinal step from `from` to `to` went.
    /// Returns `None` unless the points are exactly one cardinal step apart.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let dx = to.x as i64 - from.x as i64;
        let dy = to.y as i64 - from.y as i64;
        Self::ALL.into_iter().find(|dir| {
            let offset = dir.offset();
            (offset.x as i64, offset.y as i64) == (dx, dy)
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
