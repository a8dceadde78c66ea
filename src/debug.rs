use crate::node::Node;
#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_TRACE: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

/// Records that a node was expanded by the path search.
#[allow(unused)]
pub fn debug_expand(node: &Node) {
    #[cfg(feature = "debug")]
    DEBUG_TRACE.with(|trace| {
        trace.borrow_mut().push(json!({
            "type": "expand",
            "pos": [node.position.x, node.position.y],
            "g": node.g_cost,
            "h": node.h_cost,
            "f": node.f_cost(),
        }))
    })
}

/// Takes the nodes expanded on this thread since the last call, as a JSON array.
#[cfg(feature = "debug")]
pub fn take_debug_trace() -> serde_json::Value {
    json!(DEBUG_TRACE.with(|trace| trace.take()))
}
