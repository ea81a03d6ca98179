use serde::{Deserialize, Serialize};

/// Child → parent containment edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HierarchyEdge {
    pub child: u32,
    pub parent: u32,
}

impl HierarchyEdge {
    pub fn new(child: u32, parent: u32) -> Self {
        Self { child, parent }
    }

    pub fn is_self_loop(&self) -> bool {
        self.child == self.parent
    }
}
