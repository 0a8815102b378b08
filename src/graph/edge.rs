use super::{Label, NodeId};

/// An undirected edge, a pair of endpoints.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge(pub NodeId, pub NodeId);

/// An edge with a label, typically a weight index.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct LabeledEdge {
    pub edge: Edge,
    pub label: Label,
}

/// The input of Kruskal's algorithm.
///
/// * `order`: number of nodes, the endpoints of `edges` must be below it.
/// * `weight`: maps edge labels to weights.
/// * `edges`: each undirected edge once, no reciprocal duplicates needed.
#[derive(Clone)]
pub struct WeightedEdgeList<W>
where
    W: Fn(Label) -> f64,
{
    pub order: usize,
    pub weight: W,
    pub edges: Vec<LabeledEdge>,
}

impl<W> WeightedEdgeList<W>
where
    W: Fn(Label) -> f64,
{
    pub fn new(order: usize, weight: W) -> Self {
        Self {
            order,
            weight,
            edges: vec![],
        }
    }

    pub fn add_edge(&mut self, edge: Edge, label: Label) {
        self.edges.push(LabeledEdge { edge, label });
    }

    /// Weight of the `i`-th edge.
    pub fn weight_of(&self, i: usize) -> f64 {
        (self.weight)(self.edges[i].label)
    }

    /// Whether edges are in ascending order by weight, as `kruskal_sorted` requires.
    pub fn is_sorted(&self) -> bool {
        self.edges
            .windows(2)
            .all(|w| (self.weight)(w[0].label) <= (self.weight)(w[1].label))
    }
}

impl<W> std::fmt::Debug for WeightedEdgeList<W>
where
    W: Fn(Label) -> f64,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        for e in self.edges.iter() {
            l.entry(&(e.edge.0, e.edge.1, (self.weight)(e.label)));
        }
        l.finish()
    }
}
