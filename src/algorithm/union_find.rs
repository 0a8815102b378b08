use crate::graph::NodeId;

/// A disjoint-set forest over node ids, with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Number of disjoint sets.
    pub fn sets(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `n`.
    pub fn find(&mut self, n: NodeId) -> NodeId {
        let mut root = n.to_raw();
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = n.to_raw();
        while self.parent[cur] != root {
            let nxt = self.parent[cur];
            self.parent[cur] = root;
            cur = nxt;
        }
        NodeId::new(root)
    }

    pub fn same_set(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the sets of `a` and `b`.
    ///
    /// Returns false if they were one set already.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let mut ra = self.find(a).to_raw();
        let mut rb = self.find(b).to_raw();
        if ra == rb {
            return false;
        }
        if self.rank[ra] < self.rank[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        if self.rank[ra] == self.rank[rb] {
            self.rank[ra] = self.rank[ra].saturating_add(1);
        }
        self.sets -= 1;
        true
    }
}
