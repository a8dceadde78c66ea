pub use assessment::Assessment;
pub use cgmath;
pub use clock::{Clock, DayPhase, FixedClock, SystemClock};
#[cfg(feature = "debug")]
pub use debug::take_debug_trace;
pub use direction::Direction;
pub use error::{MapError, MapResult};
pub use grid::Grid;
pub use map::{Map, SafeDirections, FILLER};
pub use math::Point;
pub use node::Node;
pub use obstacle::{Camera, Fence, Guard, MagicCross, Obstacle, ObstacleKind, Sensor};
pub use pathfinding::{
    path_to_directions, step_cost, Heuristic, Path, Pathfinder, SearchConfig, SEARCH_TIMEOUT,
};
pub use util::Interval;

mod assessment;
pub mod clock;
mod debug;
mod direction;
mod error;
mod grid;
mod map;
pub mod math;
mod node;
pub mod obstacle;
mod pathfinding;
mod util;

slotmap::new_key_type! {
    /// Handle to a [Node] in a path search's arena.
    pub struct NodeId;
}
