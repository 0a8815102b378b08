//! Structural predicates to run on untrusted input before any algorithm.
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// Checks that every arc targets a node of the graph.
///
/// Returns the first out-of-range arc `(fr, to)` if any.
pub fn bounds_ok<G: Adjacency>(g: &G) -> Result<(), (NodeId, NodeId)> {
    let order = g.order();
    for n in g.nodes() {
        for a in g.arcs(n) {
            if a.to.to_raw() >= order {
                return Err((n, a.to));
            }
        }
    }
    Ok(())
}

/// Finds parallel arcs by sorting each neighbor list.
///
/// Returns an example `(fr, to)` with more than one arc from `fr` to `to`.
/// Multiple loops on a node count as parallel arcs.
/// Cheaper than [has_parallel_map] on small or sparse graphs.
pub fn has_parallel_sort<G: Adjacency>(g: &G) -> Option<(NodeId, NodeId)> {
    let mut t = vec![];
    for n in g.nodes() {
        t.clear();
        t.extend(g.arcs(n).map(|a| a.to));
        t.sort_unstable();
        if let Some(w) = t.windows(2).find(|w| w[0] == w[1]) {
            return Some((n, w[0]));
        }
    }
    None
}

/// Same as [has_parallel_sort] but with a hash set per node.
pub fn has_parallel_map<G: Adjacency>(g: &G) -> Option<(NodeId, NodeId)> {
    let mut seen = HashSet::with_hasher(RandomState::new());
    for n in g.nodes() {
        seen.clear();
        for a in g.arcs(n) {
            if !seen.insert(a.to) {
                return Some((n, a.to));
            }
        }
    }
    None
}

/// A graph is simple if it has neither loops nor parallel arcs.
///
/// Returns the first node with a loop or a parallel arc.
pub fn is_simple<G: Adjacency>(g: &G) -> Result<(), NodeId> {
    let mut seen = HashSet::with_hasher(RandomState::new());
    for n in g.nodes() {
        seen.clear();
        for a in g.arcs(n) {
            if a.to == n || !seen.insert(a.to) {
                return Err(n);
            }
        }
    }
    Ok(())
}

/// Checks that every arc has a reciprocal.
///
/// Returns the first arc `(fr, to)` lacking an arc `to -> fr`.
/// Labels are not compared and multiplicities are not counted.
pub fn is_undirected<G: Adjacency>(g: &G) -> Result<(), (NodeId, NodeId)> {
    for n in g.nodes() {
        for a in g.arcs(n) {
            if !g.arcs(a.to).any(|b| b.to == n) {
                return Err((n, a.to));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn bounds() {
        assert_eq!(bounds_ok(&AdjacencyList::default()), Ok(()));
        let g = AdjacencyList::from(vec![vec![9]]);
        assert_eq!(bounds_ok(&g), Err((NodeId(0), NodeId(9))));
    }

    #[test]
    fn parallel_arcs() {
        let mut g = AdjacencyList::from(vec![vec![], vec![0]]);
        assert_eq!(has_parallel_sort(&g), None);
        assert_eq!(has_parallel_map(&g), None);
        g.add_arc(NodeId(1), NodeId(0));
        assert_eq!(has_parallel_sort(&g), Some((NodeId(1), NodeId(0))));
        assert_eq!(has_parallel_map(&g), Some((NodeId(1), NodeId(0))));
    }

    #[test]
    fn simple() {
        let g = AdjacencyList::from(vec![vec![], vec![], vec![0, 1]]);
        assert_eq!(is_simple(&g), Ok(()));
        let looped = AdjacencyList::from(vec![vec![], vec![1], vec![0, 1]]);
        assert_eq!(is_simple(&looped), Err(NodeId(1)));
        let parallel = AdjacencyList::from(vec![vec![], vec![], vec![0, 1, 0]]);
        assert_eq!(is_simple(&parallel), Err(NodeId(2)));
    }

    #[test]
    fn undirected() {
        let mut g = AdjacencyList::from(vec![vec![1, 2], vec![], vec![0]]);
        assert_eq!(is_undirected(&g), Err((NodeId(0), NodeId(1))));
        g.add_arc(NodeId(1), NodeId(0));
        assert_eq!(is_undirected(&g), Ok(()));
    }

    #[quickcheck]
    fn parallel_checks_agree(g: ArbitraryDigraph) {
        let g = g.graph;
        assert_eq!(
            has_parallel_sort(&g).is_some(),
            has_parallel_map(&g).is_some()
        );
    }
}
