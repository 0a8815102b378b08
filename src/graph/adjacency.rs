use crate::graph::*;

/// A graph as a list of neighbors for each node.
///
/// The id of a node is its index in the list.
/// Adjacency lists are inherently directed.
/// Undirected graphs are represented with reciprocal arcs, see [Undirected].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AdjacencyList(pub Vec<Vec<NodeId>>);

/// The labeled counterpart of a neighbor: target and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Half {
    pub to: NodeId,
    pub label: Label,
}

/// An adjacency list whose arcs carry labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LabeledAdjacencyList(pub Vec<Vec<Half>>);

impl AdjacencyList {
    /// Creates `order` nodes without arcs.
    pub fn new(order: usize) -> Self {
        Self(vec![vec![]; order])
    }

    pub fn neighbors(&self, n: NodeId) -> &[NodeId] {
        &self.0[n.to_raw()]
    }

    /// Appends an arc, growing the list so that both endpoints exist.
    pub fn add_arc(&mut self, fr: NodeId, to: NodeId) {
        let need = fr.to_raw().max(to.to_raw()) + 1;
        if self.0.len() < need {
            self.0.resize(need, vec![]);
        }
        self.0[fr.to_raw()].push(to);
    }

    /// The graph with every arc reversed.
    pub fn transpose(&self) -> AdjacencyList {
        let mut res = AdjacencyList::new(self.0.len());
        for (fr, to) in self.0.iter().enumerate() {
            for t in to.iter() {
                res.0[t.to_raw()].push(NodeId::new(fr));
            }
        }
        res
    }
}

impl From<Vec<Vec<usize>>> for AdjacencyList {
    fn from(raw: Vec<Vec<usize>>) -> Self {
        Self(
            raw.into_iter()
                .map(|to| to.into_iter().map(NodeId::new).collect())
                .collect(),
        )
    }
}

impl Adjacency for AdjacencyList {
    fn order(&self) -> usize {
        self.0.len()
    }

    fn out_degree(&self, n: NodeId) -> usize {
        self.0[n.to_raw()].len()
    }

    fn arc(&self, n: NodeId, x: usize) -> OutArc {
        OutArc {
            to: self.0[n.to_raw()][x],
            label: None,
        }
    }
}

impl LabeledAdjacencyList {
    pub fn new(order: usize) -> Self {
        Self(vec![vec![]; order])
    }

    pub fn neighbors(&self, n: NodeId) -> &[Half] {
        &self.0[n.to_raw()]
    }

    /// Appends a labeled arc, growing the list so that both endpoints exist.
    pub fn add_arc(&mut self, fr: NodeId, to: Half) {
        let need = fr.to_raw().max(to.to.to_raw()) + 1;
        if self.0.len() < need {
            self.0.resize(need, vec![]);
        }
        self.0[fr.to_raw()].push(to);
    }

    /// Drops labels.
    pub fn unlabeled(&self) -> AdjacencyList {
        AdjacencyList(
            self.0
                .iter()
                .map(|to| to.iter().map(|h| h.to).collect())
                .collect(),
        )
    }

    /// Makes the graph reciprocal.
    ///
    /// For every arc `fr -> to` lacking an arc `to -> fr` with the same label,
    /// such an arc is appended to `to`.
    pub fn undirected(&self) -> LabeledUndirected {
        let mut res = self.clone();
        for (fr, to) in self.0.iter().enumerate() {
            let fr = NodeId::new(fr);
            for h in to.iter() {
                let back = Half {
                    to: fr,
                    label: h.label,
                };
                if !self.0[h.to.to_raw()].contains(&back) {
                    res.add_arc(h.to, back);
                }
            }
        }
        LabeledUndirected { adjacency: res }
    }
}

impl Adjacency for LabeledAdjacencyList {
    fn order(&self) -> usize {
        self.0.len()
    }

    fn out_degree(&self, n: NodeId) -> usize {
        self.0[n.to_raw()].len()
    }

    fn arc(&self, n: NodeId, x: usize) -> OutArc {
        let h = self.0[n.to_raw()][x];
        OutArc {
            to: h.to,
            label: Some(h.label),
        }
    }
}

/// An undirected graph: an adjacency list kept reciprocal by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Undirected {
    pub adjacency: AdjacencyList,
}

impl Undirected {
    pub fn new(order: usize) -> Self {
        Self {
            adjacency: AdjacencyList::new(order),
        }
    }

    /// Adds both arcs of an edge. A loop is added once.
    pub fn add_edge(&mut self, e: Edge) {
        self.adjacency.add_arc(e.0, e.1);
        if e.0 != e.1 {
            self.adjacency.add_arc(e.1, e.0);
        }
    }
}

impl Adjacency for Undirected {
    fn order(&self) -> usize {
        self.adjacency.order()
    }

    fn out_degree(&self, n: NodeId) -> usize {
        self.adjacency.out_degree(n)
    }

    fn arc(&self, n: NodeId, x: usize) -> OutArc {
        self.adjacency.arc(n, x)
    }
}

/// A labeled undirected graph: reciprocal arcs carry the same label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LabeledUndirected {
    pub adjacency: LabeledAdjacencyList,
}

impl LabeledUndirected {
    pub fn new(order: usize) -> Self {
        Self {
            adjacency: LabeledAdjacencyList::new(order),
        }
    }

    /// Adds both arcs of an edge, each carrying `label`. A loop is added once.
    pub fn add_edge(&mut self, e: Edge, label: Label) {
        self.adjacency.add_arc(e.0, Half { to: e.1, label });
        if e.0 != e.1 {
            self.adjacency.add_arc(e.1, Half { to: e.0, label });
        }
    }

    /// Lists every edge once, from the arcs whose source is not above their target.
    ///
    /// Arc order is kept, so the result is deterministic.
    pub fn weighted_edge_list<W>(&self, weight: W) -> WeightedEdgeList<W>
    where
        W: Fn(Label) -> f64,
    {
        let mut edges = vec![];
        for (fr, to) in self.adjacency.0.iter().enumerate() {
            let fr = NodeId::new(fr);
            for h in to.iter().filter(|h| fr <= h.to) {
                edges.push(LabeledEdge {
                    edge: Edge(fr, h.to),
                    label: h.label,
                });
            }
        }
        WeightedEdgeList {
            order: self.adjacency.order(),
            weight,
            edges,
        }
    }
}

impl Adjacency for LabeledUndirected {
    fn order(&self) -> usize {
        self.adjacency.order()
    }

    fn out_degree(&self, n: NodeId) -> usize {
        self.adjacency.out_degree(n)
    }

    fn arc(&self, n: NodeId, x: usize) -> OutArc {
        self.adjacency.arc(n, x)
    }
}
