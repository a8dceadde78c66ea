use crate::math::Point;
use crate::NodeId;

/// A cell visited during a single path search.
///
/// Nodes are identified by their position alone; the costs and parent link
/// are search bookkeeping.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    /// The cell the node stands for.
    pub position: Point,
    /// The cost of the best known route from the start.
    pub g_cost: i32,
    /// The estimated cost from here to the target.
    pub h_cost: i32,
    /// The node this one was reached from, in the same search's arena.
    pub parent: Option<NodeId>,
}

impl Node {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            g_cost: 0,
            h_cost: 0,
            parent: None,
        }
    }

    /// The estimated total cost of a route through this node. Saturates at `i32::MAX`.
    pub fn f_cost(&self) -> i32 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}
