use super::UnionFind;
use crate::graph::*;
use tracing::debug;

impl<W> WeightedEdgeList<W>
where
    W: Fn(Label) -> f64,
{
    /// A minimum spanning forest by Kruskal's algorithm.
    ///
    /// Edges are considered by ascending weight.
    /// Edges of equal weight keep their order in the list.
    /// Returns the forest as an undirected graph of the same order,
    /// and its total weight.
    /// A disconnected graph gives one tree per connected component.
    pub fn kruskal(&self) -> (LabeledUndirected, f64) {
        let weights: Vec<f64> = self.edges.iter().map(|e| (self.weight)(e.label)).collect();
        let mut sorted: Vec<usize> = (0..self.edges.len()).collect();
        sorted.sort_by(|a, b| weights[*a].total_cmp(&weights[*b]));
        span(
            self.order,
            sorted.into_iter().map(|i| (self.edges[i], weights[i])),
        )
    }

    /// Same as [WeightedEdgeList::kruskal] without sorting.
    ///
    /// Edges must already be in ascending order by weight.
    /// This is not checked: unsorted input gives a spanning forest
    /// which may not be minimal.
    pub fn kruskal_sorted(&self) -> (LabeledUndirected, f64) {
        span(
            self.order,
            self.edges.iter().map(|e| (*e, (self.weight)(e.label))),
        )
    }
}

fn span<I>(order: usize, edges: I) -> (LabeledUndirected, f64)
where
    I: Iterator<Item = (LabeledEdge, f64)>,
{
    let mut forest = LabeledUndirected::new(order);
    let mut sets = UnionFind::new(order);
    let mut total = 0.0;
    let mut accepted = 0;
    for (e, w) in edges {
        if accepted + 1 >= order {
            break;
        }
        if sets.union(e.edge.0, e.edge.1) {
            forest.add_edge(e.edge, e.label);
            total += w;
            accepted += 1;
        }
    }
    debug!(order, accepted, total, "kruskal finished");
    (forest, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::ConnectedComponents;
    use petgraph::{
        algo::min_spanning_tree,
        data::Element,
        graph::UnGraph,
    };
    use quickcheck_macros::quickcheck;

    //       (10)
    //     0------4----\
    //     |     /|     \(70)
    // (30)| (40) |(60)  \
    //     |/     |      |
    //     1------2------3
    //       (50)   (20)
    fn sample() -> LabeledUndirected {
        let mut g = LabeledUndirected::default();
        for (u, v, l) in [
            (0, 1, 30),
            (0, 4, 10),
            (1, 2, 50),
            (1, 4, 40),
            (2, 3, 20),
            (2, 4, 60),
            (3, 4, 70),
        ] {
            g.add_edge(Edge(NodeId(u), NodeId(v)), Label(l));
        }
        g
    }

    fn halves(xs: &[(usize, i64)]) -> Vec<Half> {
        xs.iter()
            .map(|(to, l)| Half {
                to: NodeId(*to),
                label: Label(*l),
            })
            .collect()
    }

    fn expected_tree() -> LabeledAdjacencyList {
        LabeledAdjacencyList(vec![
            halves(&[(4, 10), (1, 30)]),
            halves(&[(0, 30), (2, 50)]),
            halves(&[(3, 20), (1, 50)]),
            halves(&[(2, 20)]),
            halves(&[(0, 10)]),
        ])
    }

    #[test]
    fn five_nodes() {
        let l = sample().weighted_edge_list(|l| l.0 as f64);
        assert!(!l.is_sorted());
        let (t, dist) = l.kruskal();
        assert_eq!(t.adjacency, expected_tree());
        assert_eq!(dist, 110.0);
    }

    #[test]
    fn five_nodes_presorted() {
        let mut l = WeightedEdgeList::new(5, |l: Label| l.0 as f64);
        for (u, v, w) in [
            (0, 4, 10),
            (2, 3, 20),
            (0, 1, 30),
            (1, 4, 40),
            (1, 2, 50),
            (2, 4, 60),
            (3, 4, 70),
        ] {
            l.add_edge(Edge(NodeId(u), NodeId(v)), Label(w));
        }
        assert!(l.is_sorted());
        let (t, dist) = l.kruskal_sorted();
        assert_eq!(t.adjacency, expected_tree());
        assert_eq!(dist, 110.0);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut l = WeightedEdgeList::new(3, |_: Label| 1.0);
        l.add_edge(Edge(NodeId(1), NodeId(2)), Label(0));
        l.add_edge(Edge(NodeId(0), NodeId(2)), Label(1));
        l.add_edge(Edge(NodeId(0), NodeId(1)), Label(2));
        let (t, dist) = l.kruskal();
        assert_eq!(dist, 2.0);
        assert_eq!(
            t.adjacency,
            LabeledAdjacencyList(vec![
                halves(&[(2, 1)]),
                halves(&[(2, 0)]),
                halves(&[(1, 0), (0, 1)]),
            ])
        );
    }

    #[test]
    fn disconnected_gives_forest() {
        let mut l = WeightedEdgeList::new(4, |l: Label| l.0 as f64);
        l.add_edge(Edge(NodeId(0), NodeId(1)), Label(2));
        l.add_edge(Edge(NodeId(2), NodeId(3)), Label(5));
        l.add_edge(Edge(NodeId(3), NodeId(3)), Label(1));
        let (t, dist) = l.kruskal();
        assert_eq!(dist, 7.0);
        assert_eq!(t.connected_component_reps().0.len(), 2);
    }

    #[quickcheck]
    fn sorted_input_gives_same_tree(g: ArbitraryWeighted) {
        let l = g.graph.weighted_edge_list(g.weight());
        let (t, dist) = l.kruskal();
        let mut sorted = l.clone();
        sorted
            .edges
            .sort_by(|a, b| (g.weight())(a.label).total_cmp(&(g.weight())(b.label)));
        assert!(sorted.is_sorted());
        let (ts, dists) = sorted.kruskal_sorted();
        assert_eq!(t, ts);
        assert_eq!(dist, dists);
    }

    #[quickcheck]
    fn minimal_spanning_forest(g: ArbitraryWeighted) {
        let (t, dist) = g.graph.weighted_edge_list(g.weight()).kruskal();
        let components = g.undirected().connected_component_reps().0.len();
        assert_eq!(t.adjacency.arc_size(), 2 * (g.order - components));
        assert_eq!(t.connected_component_reps().0.len(), components);

        let mut oracle = UnGraph::<(), f64>::new_undirected();
        for _ in 0..g.order {
            oracle.add_node(());
        }
        for (i, (u, v)) in g.edges.iter().enumerate() {
            oracle.add_edge((*u as u32).into(), (*v as u32).into(), g.weights[i]);
        }
        let oracle_dist: f64 = min_spanning_tree(&oracle)
            .filter_map(|e| match e {
                Element::Edge { weight, .. } => Some(weight),
                _ => None,
            })
            .sum();
        assert_eq!(dist, oracle_dist);
    }
}
