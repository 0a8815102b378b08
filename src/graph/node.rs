/// ID for nodes, which are essentially `usize`.
///
/// Ids are dense: a graph of order `n` has exactly the nodes `0..n`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Default)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const MIN: NodeId = NodeId(0);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<usize> for NodeId {
    fn from(x: usize) -> Self {
        Self(x)
    }
}

impl From<NodeId> for usize {
    fn from(n: NodeId) -> Self {
        n.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An integer attached to an arc, typically an index into caller-owned weights.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Default)]
pub struct Label(pub i64);

impl From<i64> for Label {
    fn from(x: i64) -> Self {
        Self(x)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
