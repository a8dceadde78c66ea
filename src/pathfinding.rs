//! A* route finding over the 4-connected grid.

use crate::debug::debug_expand;
use crate::direction::Direction;
use crate::error::{MapError, MapResult};
use crate::map::Map;
use crate::math::Point;
use crate::node::Node;
use crate::NodeId;
use log::{debug, trace, warn};
use slotmap::SlotMap;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::{Duration, Instant};

pub use path::{path_to_directions, Path};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod path;

/// Give up searching after this long.
pub const SEARCH_TIMEOUT: Duration = Duration::from_millis(30_000);

/// The cost of a straight step between neighbouring cells.
const STRAIGHT_COST: i64 = 10;

/// The cost of a diagonal step. Only reachable through the heuristic,
/// since agents never move diagonally.
const DIAGONAL_COST: i64 = 14;

/// The order in which a node's neighbours are explored.
const NEIGHBOURS: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::South,
    Direction::North,
];

/// Computes the cost between two cells as if diagonal moves were allowed.
///
/// Neighbouring cells always cost [`STRAIGHT_COST`]. Over longer distances this
/// never exceeds the true 4-connected cost, so it is a valid A* estimate.
pub fn step_cost(a: Point, b: Point) -> i32 {
    let dx = a.x.abs_diff(b.x) as i64;
    let dy = a.y.abs_diff(b.y) as i64;
    let (lo, hi) = (dx.min(dy), dx.max(dy));
    saturate(DIAGONAL_COST * lo + STRAIGHT_COST * (hi - lo))
}

fn saturate(cost: i64) -> i32 {
    i32::try_from(cost).unwrap_or(i32::MAX)
}

/// The estimate of the remaining cost used to rank nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Heuristic {
    /// The same formula as [`step_cost`].
    #[default]
    Octile,
    /// Ten times the Manhattan distance; the exact cost on an open grid.
    Manhattan,
}

impl Heuristic {
    pub fn estimate(self, from: Point, to: Point) -> i32 {
        match self {
            Heuristic::Octile => step_cost(from, to),
            Heuristic::Manhattan => {
                let dist = from.x.abs_diff(to.x) as i64 + from.y.abs_diff(to.y) as i64;
                saturate(STRAIGHT_COST * dist)
            }
        }
    }
}

/// The parameters of a path search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// The wall-clock time after which the search is abandoned.
    pub timeout: Duration,
    /// How the remaining cost to the target is estimated.
    pub heuristic: Heuristic,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout: SEARCH_TIMEOUT,
            heuristic: Heuristic::Octile,
        }
    }
}

/// Finds safe routes across a [`Map`].
///
/// The map must not change while a search is running; the borrow enforces this.
pub struct Pathfinder<'a> {
    map: &'a Map,
    config: SearchConfig,
}

impl<'a> Pathfinder<'a> {
    /// Creates a pathfinder with the default configuration.
    pub fn new(map: &'a Map) -> Self {
        Self::with_config(map, SearchConfig::default())
    }

    pub fn with_config(map: &'a Map, config: SearchConfig) -> Self {
        Self { map, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Finds a shortest route from `start` to `target` that never enters a covered cell.
    ///
    /// The map's clock is read once, so time-dependent obstacles keep one shape
    /// for the whole search.
    ///
    /// # Errors
    /// * [`MapError::InvalidRequest`] if `start` and `target` are the same cell.
    /// * [`MapError::Timeout`] if the search runs longer than the configured timeout.
    /// * [`MapError::NoPathFound`] if every reachable cell was explored without
    ///   reaching the target.
    pub fn find_path(&self, start: Point, target: Point) -> MapResult<Path> {
        if start == target {
            return Err(MapError::InvalidRequest { point: start });
        }

        let phase = self.map.day_phase();
        let heuristic = self.config.heuristic;
        debug!(
            "Searching for a path from {:?} to {:?} during the {:?}",
            start, target, phase
        );

        let started = Instant::now();
        let mut search = Search::new();
        search.open_node(Node {
            position: start,
            g_cost: 0,
            h_cost: heuristic.estimate(start, target),
            parent: None,
        });

        loop {
            let elapsed = started.elapsed();
            if elapsed > self.config.timeout {
                warn!(
                    "Gave up searching for a path from {:?} to {:?} after {:?} ({} nodes open, {} closed)",
                    start,
                    target,
                    elapsed,
                    search.open.len(),
                    search.closed.len()
                );
                return Err(MapError::Timeout { elapsed });
            }

            let Some(current_id) = search.pop_best() else {
                debug!(
                    "No path from {:?} to {:?}; explored {} cells",
                    start,
                    target,
                    search.closed.len()
                );
                return Err(MapError::NoPathFound);
            };
            let current = search.nodes[current_id];
            search.closed.insert(current.position);
            search.expanded += 1;
            trace!(
                "Expanding {:?} (g = {}, h = {})",
                current.position,
                current.g_cost,
                current.h_cost
            );
            debug_expand(&current);

            if current.position == target {
                let path = search.retrace(start, current_id);
                debug!(
                    "Found a path of {} steps after expanding {} nodes in {:?}",
                    path.len(),
                    search.expanded,
                    started.elapsed()
                );
                return Ok(path);
            }

            for dir in NEIGHBOURS {
                let Some(position) = dir.checked_step(current.position) else {
                    continue;
                };
                if search.closed.contains(&position) {
                    continue;
                }
                if self.map.is_blocked_at(position, phase) {
                    search.closed.insert(position);
                    continue;
                }

                let g_cost = current.g_cost.saturating_add(step_cost(current.position, position));
                match search.index.get(&position).copied() {
                    Some(id) if g_cost < search.nodes[id].g_cost => {
                        let node = &mut search.nodes[id];
                        node.g_cost = g_cost;
                        node.h_cost = heuristic.estimate(position, target);
                        node.parent = Some(current_id);
                        search.push(id);
                    }
                    Some(_) => {}
                    None => {
                        search.open_node(Node {
                            position,
                            g_cost,
                            h_cost: heuristic.estimate(position, target),
                            parent: Some(current_id),
                        });
                    }
                }
            }
        }
    }
}

/// The state of a single search. Dropped when the search ends.
struct Search {
    /// Every node created during the search.
    nodes: SlotMap<NodeId, Node>,
    /// Looks up the node for a position. A position that is indexed but not
    /// closed is in the open set.
    index: HashMap<Point, NodeId>,
    /// The frontier. May hold stale entries for nodes whose cost has since dropped.
    open: BinaryHeap<OpenEntry>,
    /// Cells that have been expanded or found to be covered.
    closed: HashSet<Point>,
    /// The next insertion sequence number.
    seq: u64,
    /// The number of nodes expanded so far.
    expanded: usize,
}

impl Search {
    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            index: HashMap::new(),
            open: BinaryHeap::new(),
            closed: HashSet::new(),
            seq: 0,
            expanded: 0,
        }
    }

    /// Adds a new node to the open set.
    fn open_node(&mut self, node: Node) {
        let position = node.position;
        let id = self.nodes.insert(node);
        self.index.insert(position, id);
        self.push(id);
    }

    /// Queues a node at its current cost.
    fn push(&mut self, id: NodeId) {
        let node = &self.nodes[id];
        self.open.push(OpenEntry {
            f_cost: node.f_cost(),
            h_cost: node.h_cost,
            g_cost: node.g_cost,
            seq: self.seq,
            id,
        });
        self.seq += 1;
    }

    /// Removes the open node with the lowest f cost, then the lowest h cost,
    /// then the earliest queued.
    fn pop_best(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.open.pop() {
            let node = &self.nodes[entry.id];
            if entry.g_cost == node.g_cost && !self.closed.contains(&node.position) {
                return Some(entry.id);
            }
        }
        None
    }

    /// Follows parent links back from `end`, excluding the start node.
    fn retrace(&self, start: Point, end: NodeId) -> Path {
        let mut points = vec![];
        let mut id = end;
        while let Some(parent) = self.nodes[id].parent {
            points.push(self.nodes[id].position);
            id = parent;
        }
        points.reverse();
        Path::new(start, points, self.nodes[end].g_cost)
    }
}

/// An entry in the open set's priority queue.
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f_cost: i32,
    h_cost: i32,
    /// The node's g cost when queued, used to recognise stale entries.
    g_cost: i32,
    seq: u64,
    id: NodeId,
}

impl OpenEntry {
    fn rank(&self) -> (i32, i32, u64) {
        (self.f_cost, self.h_cost, self.seq)
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed, so the max-heap yields the lowest rank first
        other.rank().cmp(&self.rank())
    }
}
