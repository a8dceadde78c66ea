use crate::map::{Map, SafeDirections};
use crate::math::Point;
use std::fmt;

/// What an agent standing at a point should be told about its surroundings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Assessment {
    /// The agent's own cell is covered by an obstacle.
    Compromised,
    /// Every neighbouring cell is covered.
    Trapped,
    /// The agent can step in any of these directions.
    Safe(SafeDirections),
}

impl Assessment {
    /// Assesses a point. A covered cell takes precedence over its neighbours.
    pub fn of(map: &Map, point: Point) -> Self {
        let phase = map.day_phase();
        if map.is_blocked_at(point, phase) {
            return Assessment::Compromised;
        }
        let dirs = map.safe_directions_at(point, phase);
        if dirs.is_empty() {
            Assessment::Trapped
        } else {
            Assessment::Safe(dirs)
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Assessment::Safe(_))
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assessment::Compromised => {
                write!(f, "Agent, your location is compromised. Abort mission.")
            }
            Assessment::Trapped => {
                write!(f, "You cannot safely move in any direction. Abort mission.")
            }
            Assessment::Safe(dirs) => {
                write!(f, "You can safely take any of the following directions: ")?;
                dirs.iter().try_for_each(|dir| write!(f, "{dir}"))
            }
        }
    }
}
