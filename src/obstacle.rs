pub use camera::Camera;
pub use cross::{MagicCross, CROSS_CELLS};

use crate::clock::DayPhase;
use crate::error::{MapError, MapResult};
use crate::math::{euclidean, Point};
use crate::util::Interval;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod camera;
mod cross;

/// The kinds of obstacle that can be placed on a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObstacleKind {
    Guard,
    Fence,
    Sensor,
    Camera,
    MagicCross,
}

impl ObstacleKind {
    /// The character drawn for this kind of obstacle on a rendered map.
    pub fn symbol(self) -> char {
        match self {
            ObstacleKind::Guard => 'g',
            ObstacleKind::Fence => 'f',
            ObstacleKind::Sensor => 's',
            ObstacleKind::Camera => 'c',
            ObstacleKind::MagicCross => 't',
        }
    }
}

/// Something on the map that the agent must stay clear of.
///
/// Each variant validates its geometry when constructed, so an `Obstacle`
/// is always well formed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Obstacle {
    Guard(Guard),
    Fence(Fence),
    Sensor(Sensor),
    Camera(Camera),
    MagicCross(MagicCross),
}

impl Obstacle {
    /// The kind of the obstacle.
    pub fn kind(&self) -> ObstacleKind {
        match self {
            Obstacle::Guard(_) => ObstacleKind::Guard,
            Obstacle::Fence(_) => ObstacleKind::Fence,
            Obstacle::Sensor(_) => ObstacleKind::Sensor,
            Obstacle::Camera(_) => ObstacleKind::Camera,
            Obstacle::MagicCross(_) => ObstacleKind::MagicCross,
        }
    }

    /// The obstacle's reference point. For a fence this is where it starts.
    pub fn center(&self) -> Point {
        match self {
            Obstacle::Guard(o) => o.center,
            Obstacle::Fence(o) => o.start,
            Obstacle::Sensor(o) => o.center,
            Obstacle::Camera(o) => o.center(),
            Obstacle::MagicCross(o) => o.center(),
        }
    }

    /// Returns true if the obstacle covers the point during the given phase of the day.
    pub fn contains(&self, point: Point, phase: DayPhase) -> bool {
        match self {
            Obstacle::Guard(o) => o.contains(point),
            Obstacle::Fence(o) => o.contains(point),
            Obstacle::Sensor(o) => o.contains(point),
            Obstacle::Camera(o) => o.contains(point),
            Obstacle::MagicCross(o) => o.contains(point, phase),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Obstacle {
                fn from(obstacle: $variant) -> Self {
                    Obstacle::$variant(obstacle)
                }
            }
        )*
    };
}

impl_from_variant!(Guard, Fence, Sensor, Camera, MagicCross);

/// A guard standing on a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Guard {
    pub center: Point,
}

impl Guard {
    pub fn new(center: Point) -> Self {
        Self { center }
    }

    pub fn contains(&self, point: Point) -> bool {
        point == self.center
    }
}

/// A horizontal or vertical fence covering every cell between its two ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FenceEnds", into = "FenceEnds"))]
pub struct Fence {
    start: Point,
    end: Point,
    /// The cells covered along each axis. One of these is always a single value.
    xs: Interval<i32>,
    ys: Interval<i32>,
}

impl Fence {
    /// Creates a new fence. Fails if the ends share neither a row nor a column.
    pub fn new(start: Point, end: Point) -> MapResult<Self> {
        if start.x != end.x && start.y != end.y {
            return Err(MapError::invalid_shape(format!(
                "fence from {start:?} to {end:?} is diagonal; only horizontal or vertical fences are allowed"
            )));
        }
        Ok(Self {
            start,
            end,
            xs: Interval::spanning(start.x, end.x),
            ys: Interval::spanning(start.y, end.y),
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// The number of cells the fence covers.
    pub fn cell_count(&self) -> u64 {
        self.xs.count() + self.ys.count() - 1
    }

    pub fn contains(&self, point: Point) -> bool {
        self.xs.contains(point.x) && self.ys.contains(point.y)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct FenceEnds {
    start: Point,
    end: Point,
}

#[cfg(feature = "serde")]
impl TryFrom<FenceEnds> for Fence {
    type Error = MapError;

    fn try_from(ends: FenceEnds) -> MapResult<Self> {
        Fence::new(ends.start, ends.end)
    }
}

#[cfg(feature = "serde")]
impl From<Fence> for FenceEnds {
    fn from(fence: Fence) -> Self {
        Self {
            start: fence.start,
            end: fence.end,
        }
    }
}

/// A motion sensor covering every cell within its range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SensorSpec", into = "SensorSpec"))]
pub struct Sensor {
    center: Point,
    /// The range in cells.
    range: f64,
}

impl Sensor {
    /// Creates a new sensor. Fails if the range is negative or not a number.
    pub fn new(center: Point, range: f64) -> MapResult<Self> {
        if range.is_nan() || range < 0.0 {
            return Err(MapError::invalid_shape(format!(
                "sensor range {range} must be a non-negative number"
            )));
        }
        Ok(Self { center, range })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn contains(&self, point: Point) -> bool {
        euclidean(point, self.center) <= self.range
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct SensorSpec {
    center: Point,
    range: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<SensorSpec> for Sensor {
    type Error = MapError;

    fn try_from(spec: SensorSpec) -> MapResult<Self> {
        Sensor::new(spec.center, spec.range)
    }
}

#[cfg(feature = "serde")]
impl From<Sensor> for SensorSpec {
    fn from(sensor: Sensor) -> Self {
        Self {
            center: sensor.center,
            range: sensor.range,
        }
    }
}
