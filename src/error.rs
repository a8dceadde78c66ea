use crate::math::Point;
use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong building obstacles, drawing the map or finding a route.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    // Construction errors
    /// An obstacle was given geometry it cannot have, such as a diagonal fence.
    #[error("Invalid obstacle shape: {reason}")]
    InvalidShape { reason: String },

    /// A render region whose corners are the wrong way round.
    #[error("Invalid map region: top-left {top_left:?} is not above and left of bottom-right {bottom_right:?}")]
    InvalidRegion { top_left: Point, bottom_right: Point },

    // Search errors
    /// A route was requested from a cell to itself.
    #[error("Invalid path request: start and target are both {point:?}")]
    InvalidRequest { point: Point },

    /// The search ran past its deadline. `elapsed` is always greater than the timeout.
    #[error("Path search timed out after {elapsed:?}")]
    Timeout { elapsed: Duration },

    /// Every cell reachable from the start was explored without finding the target.
    #[error("No path found")]
    NoPathFound,
}

impl MapError {
    pub(crate) fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }
}

/// Result type alias for all fallible map operations.
pub type MapResult<T> = Result<T, MapError>;
