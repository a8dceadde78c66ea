//! Grid and vector math.

use cgmath::{Point2, Vector2};
pub use util::*;

mod util;

/// A cell on the grid. The plane is unbounded, so any `i32` pair is valid.
pub type Point = Point2<i32>;

/// A difference between two cells in math space (positive y points up).
/// Wide enough to hold the distance between any two points.
pub type Offset = Vector2<i64>;
