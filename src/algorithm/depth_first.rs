//! A configurable depth-first traversal and search.
//!
//! A walk is configured once with a [DfsConfig], validated into a [Dfs] and
//! then run from one or more start nodes.
//!
//! # Traversal and search
//!
//! With only observing callbacks, a [Dfs] runs in [Mode::Traversal]:
//! every node reachable from the start is visited exactly once.
//! Configuring any conditional callback switches it into [Mode::Search]:
//! a callback returning [ControlFlow::Break] ends the whole run right away,
//! siblings pending at every level included.
//!
//! # Example
//!
//! ```rust
//! use adjgraph::{algorithm::*, graph::*};
//! use std::ops::ControlFlow;
//!
//! //   0
//! //  / \
//! // 1   4
//! // |\
//! // 2 3
//! let g = AdjacencyList::from(vec![vec![1, 4], vec![2, 3], vec![], vec![], vec![]]);
//! let mut seen = vec![];
//! let res = DfsConfig::new()
//!     .ok_node_visitor(|n| {
//!         seen.push(n);
//!         if n == NodeId(2) {
//!             ControlFlow::Break(())
//!         } else {
//!             ControlFlow::Continue(())
//!         }
//!     })
//!     .build()
//!     .unwrap()
//!     .run(&g, NodeId(0));
//! assert!(res.is_break());
//! assert_eq!(seen, vec![NodeId(0), NodeId(1), NodeId(2)]);
//! ```
use crate::{graph::*, Error, Result};
use rand::{seq::SliceRandom, RngCore};
pub use std::ops::ControlFlow;
use tracing::{debug, trace};

/// An arc as handed to arc callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArcVisit {
    pub from: NodeId,
    /// Position of the arc among the arcs of `from`.
    pub index: usize,
    pub to: NodeId,
    /// Present when walking a labeled graph.
    pub label: Option<Label>,
}

/// A handler object of a depth-first walk.
///
/// Handlers of one walk are invoked in the order they were configured.
/// In [Mode::Search] the first [ControlFlow::Break] ends the walk and later
/// handlers are not invoked.
pub trait Visitor {
    /// Whether this handler may stop the walk.
    fn is_conditional(&self) -> bool {
        false
    }

    /// `n` is reached for the first time.
    fn node(&mut self, _n: NodeId) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// An arc of a node being explored, before its target is looked at.
    ///
    /// Called for every arc, whether its target is visited already or not.
    fn arc(&mut self, _arc: &ArcVisit) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// All arcs of `n` have been explored.
    /// `parent` is the node `n` was reached from, `None` for the start node.
    fn finish(&mut self, _n: NodeId, _parent: Option<NodeId>) {}
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn is_conditional(&self) -> bool {
        (**self).is_conditional()
    }

    fn node(&mut self, n: NodeId) -> ControlFlow<()> {
        (**self).node(n)
    }

    fn arc(&mut self, arc: &ArcVisit) -> ControlFlow<()> {
        (**self).arc(arc)
    }

    fn finish(&mut self, n: NodeId, parent: Option<NodeId>) {
        (**self).finish(n, parent)
    }
}

struct NodeFn<F>(F);

impl<F: FnMut(NodeId)> Visitor for NodeFn<F> {
    fn node(&mut self, n: NodeId) -> ControlFlow<()> {
        (self.0)(n);
        ControlFlow::Continue(())
    }
}

struct OkNodeFn<F>(F);

impl<F: FnMut(NodeId) -> ControlFlow<()>> Visitor for OkNodeFn<F> {
    fn is_conditional(&self) -> bool {
        true
    }

    fn node(&mut self, n: NodeId) -> ControlFlow<()> {
        (self.0)(n)
    }
}

struct ArcFn<F>(F);

impl<F: FnMut(&ArcVisit)> Visitor for ArcFn<F> {
    fn arc(&mut self, arc: &ArcVisit) -> ControlFlow<()> {
        (self.0)(arc);
        ControlFlow::Continue(())
    }
}

struct OkArcFn<F>(F);

impl<F: FnMut(&ArcVisit) -> ControlFlow<()>> Visitor for OkArcFn<F> {
    fn is_conditional(&self) -> bool {
        true
    }

    fn arc(&mut self, arc: &ArcVisit) -> ControlFlow<()> {
        (self.0)(arc)
    }
}

/// How a [Dfs] treats callback results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Results are ignored and the walk always completes.
    Traversal,
    /// A [ControlFlow::Break] ends the walk.
    Search,
}

/// Options of a depth-first walk.
///
/// * `node_visitor` / `ok_node_visitor`: called when a node is first reached.
///   At most one of them.
/// * `arc_visitor` / `ok_arc_visitor`: called for each arc explored.
///   At most one of them.
/// * `handler`: any number of extra [Visitor]s, called after the above.
/// * `visited`: an external visited set. Nodes already in it are not entered.
///   Without one, a set sized to the graph is allocated.
/// * `rng`: explore the arcs of each node in a fresh random order.
#[derive(Default)]
pub struct DfsConfig<'a> {
    node_visitor: Option<Box<dyn FnMut(NodeId) + 'a>>,
    ok_node_visitor: Option<Box<dyn FnMut(NodeId) -> ControlFlow<()> + 'a>>,
    arc_visitor: Option<Box<dyn FnMut(&ArcVisit) + 'a>>,
    ok_arc_visitor: Option<Box<dyn FnMut(&ArcVisit) -> ControlFlow<()> + 'a>>,
    handlers: Vec<Box<dyn Visitor + 'a>>,
    visited: Option<&'a mut Bits>,
    rng: Option<&'a mut dyn RngCore>,
}

impl<'a> DfsConfig<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_visitor<F>(mut self, f: F) -> Self
    where
        F: FnMut(NodeId) + 'a,
    {
        self.node_visitor = Some(Box::new(f));
        self
    }

    pub fn ok_node_visitor<F>(mut self, f: F) -> Self
    where
        F: FnMut(NodeId) -> ControlFlow<()> + 'a,
    {
        self.ok_node_visitor = Some(Box::new(f));
        self
    }

    pub fn arc_visitor<F>(mut self, f: F) -> Self
    where
        F: FnMut(&ArcVisit) + 'a,
    {
        self.arc_visitor = Some(Box::new(f));
        self
    }

    pub fn ok_arc_visitor<F>(mut self, f: F) -> Self
    where
        F: FnMut(&ArcVisit) -> ControlFlow<()> + 'a,
    {
        self.ok_arc_visitor = Some(Box::new(f));
        self
    }

    pub fn handler<V>(mut self, v: V) -> Self
    where
        V: Visitor + 'a,
    {
        self.handlers.push(Box::new(v));
        self
    }

    pub fn visited(mut self, visited: &'a mut Bits) -> Self {
        self.visited = Some(visited);
        self
    }

    pub fn rng<R>(mut self, rng: &'a mut R) -> Self
    where
        R: RngCore,
    {
        self.rng = Some(rng);
        self
    }

    /// Validates the options.
    ///
    /// Fails if both variants of the node visitor, or of the arc visitor, are given.
    pub fn build(self) -> Result<Dfs<'a>> {
        if self.node_visitor.is_some() && self.ok_node_visitor.is_some() {
            debug!("rejected depth-first configuration: conflicting node visitors");
            return Err(Error::ConflictingNodeVisitors);
        }
        if self.arc_visitor.is_some() && self.ok_arc_visitor.is_some() {
            debug!("rejected depth-first configuration: conflicting arc visitors");
            return Err(Error::ConflictingArcVisitors);
        }
        let mut handlers: Vec<Box<dyn Visitor + 'a>> = vec![];
        if let Some(f) = self.node_visitor {
            handlers.push(Box::new(NodeFn(f)));
        }
        if let Some(f) = self.ok_node_visitor {
            handlers.push(Box::new(OkNodeFn(f)));
        }
        if let Some(f) = self.arc_visitor {
            handlers.push(Box::new(ArcFn(f)));
        }
        if let Some(f) = self.ok_arc_visitor {
            handlers.push(Box::new(OkArcFn(f)));
        }
        handlers.extend(self.handlers);
        let visited = match self.visited {
            Some(b) => Visited::Borrowed(b),
            None => Visited::Owned(Bits::default()),
        };
        Ok(Dfs::assemble(handlers, visited, self.rng))
    }
}

enum Visited<'a> {
    Owned(Bits),
    Borrowed(&'a mut Bits),
}

impl<'a> Visited<'a> {
    fn get(&self) -> &Bits {
        match self {
            Visited::Owned(b) => b,
            Visited::Borrowed(b) => b,
        }
    }

    fn get_mut(&mut self) -> &mut Bits {
        match self {
            Visited::Owned(b) => b,
            Visited::Borrowed(b) => b,
        }
    }
}

/// A validated depth-first walk.
///
/// The visited set persists across [Dfs::run] calls,
/// so running from every node in turn walks each node once.
pub struct Dfs<'a> {
    handlers: Vec<Box<dyn Visitor + 'a>>,
    visited: Visited<'a>,
    rng: Option<&'a mut dyn RngCore>,
    mode: Mode,
}

struct Frame {
    node: NodeId,
    degree: usize,
    cursor: usize,
    perm: Option<Vec<usize>>,
}

impl Frame {
    fn next(&mut self) -> Option<usize> {
        if self.cursor >= self.degree {
            return None;
        }
        let x = match &self.perm {
            Some(p) => p[self.cursor],
            None => self.cursor,
        };
        self.cursor += 1;
        Some(x)
    }
}

impl<'a> Dfs<'a> {
    /// A walk driven by `handlers` alone, in stored arc order, with its own visited set.
    pub fn with_handlers(handlers: Vec<Box<dyn Visitor + 'a>>) -> Self {
        Self::assemble(handlers, Visited::Owned(Bits::default()), None)
    }

    fn assemble(
        handlers: Vec<Box<dyn Visitor + 'a>>,
        visited: Visited<'a>,
        rng: Option<&'a mut dyn RngCore>,
    ) -> Self {
        let mode = if handlers.iter().any(|h| h.is_conditional()) {
            Mode::Search
        } else {
            Mode::Traversal
        };
        debug!(
            ?mode,
            handlers = handlers.len(),
            randomized = rng.is_some(),
            "depth-first configured"
        );
        Self {
            handlers,
            visited,
            rng,
            mode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Nodes visited so far.
    pub fn visited(&self) -> &Bits {
        self.visited.get()
    }

    pub fn is_visited(&self, n: NodeId) -> bool {
        let b = self.visited.get();
        n.to_raw() < b.len() && b.bit(n)
    }

    /// Walks from `start`.
    ///
    /// Returns [ControlFlow::Break] iff a conditional callback stopped the walk.
    /// If `start` is visited already, nothing happens.
    pub fn run<G>(&mut self, g: &G, start: NodeId) -> ControlFlow<()>
    where
        G: Adjacency + ?Sized,
    {
        self.visited.get_mut().grow(g.order());
        if !self.mark(start) {
            return ControlFlow::Continue(());
        }
        if self.enter(start).is_break() {
            return self.stopped(start);
        }
        let mut stack = vec![self.frame(g, start)];
        while let Some(top) = stack.last_mut() {
            let n = top.node;
            let x = match top.next() {
                Some(x) => x,
                None => {
                    stack.pop();
                    let parent = stack.last().map(|f| f.node);
                    for h in self.handlers.iter_mut() {
                        h.finish(n, parent);
                    }
                    continue;
                }
            };
            let a = g.arc(n, x);
            let visit = ArcVisit {
                from: n,
                index: x,
                to: a.to,
                label: a.label,
            };
            if self.explore(&visit).is_break() {
                return self.stopped(n);
            }
            if self.mark(a.to) {
                if self.enter(a.to).is_break() {
                    return self.stopped(a.to);
                }
                let f = self.frame(g, a.to);
                stack.push(f);
            }
        }
        ControlFlow::Continue(())
    }

    fn stopped(&self, at: NodeId) -> ControlFlow<()> {
        trace!(%at, "depth-first search stopped");
        ControlFlow::Break(())
    }

    /// Marks `n` as visited, returning whether it was not yet.
    fn mark(&mut self, n: NodeId) -> bool {
        let b = self.visited.get_mut();
        if b.bit(n) {
            false
        } else {
            b.set(n);
            true
        }
    }

    fn enter(&mut self, n: NodeId) -> ControlFlow<()> {
        let search = self.mode == Mode::Search;
        for h in self.handlers.iter_mut() {
            if h.node(n).is_break() && search {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn explore(&mut self, arc: &ArcVisit) -> ControlFlow<()> {
        let search = self.mode == Mode::Search;
        for h in self.handlers.iter_mut() {
            if h.arc(arc).is_break() && search {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn frame<G>(&mut self, g: &G, n: NodeId) -> Frame
    where
        G: Adjacency + ?Sized,
    {
        let degree = g.out_degree(n);
        let perm = self.rng.as_mut().map(|r| {
            let mut perm: Vec<usize> = (0..degree).collect();
            perm.shuffle(&mut **r);
            perm
        });
        Frame {
            node: n,
            degree,
            cursor: 0,
            perm,
        }
    }
}

/// Builds `config` and runs it once from `start`.
pub fn depth_first<G>(g: &G, start: NodeId, config: DfsConfig<'_>) -> Result<ControlFlow<()>>
where
    G: Adjacency + ?Sized,
{
    let mut dfs = config.build()?;
    Ok(dfs.run(g, start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::{BTreeSet, VecDeque};

    fn reachable(g: &AdjacencyList, start: NodeId) -> Vec<NodeId> {
        let mut seen = vec![false; g.order()];
        let mut queue = VecDeque::from(vec![start]);
        seen[start.to_raw()] = true;
        while let Some(n) = queue.pop_front() {
            for to in g.neighbors(n) {
                if !seen[to.to_raw()] {
                    seen[to.to_raw()] = true;
                    queue.push_back(*to);
                }
            }
        }
        (0..g.order())
            .filter(|i| seen[*i])
            .map(NodeId::new)
            .collect()
    }

    fn tree() -> AdjacencyList {
        //   0
        //  / \
        // 1   4
        // |\
        // 2 3
        AdjacencyList::from(vec![vec![1, 4], vec![2, 3], vec![], vec![], vec![]])
    }

    #[quickcheck]
    fn traversal_visits_reachable_once(g: ArbitraryDigraph, seed: u64, shuffle: bool) {
        let g = g.graph;
        let start = NodeId(seed as usize % g.order());
        let mut rng = StdRng::seed_from_u64(seed);
        let mut order = vec![];
        let mut config = DfsConfig::new().node_visitor(|n| order.push(n));
        if shuffle {
            config = config.rng(&mut rng);
        }
        let res = depth_first(&g, start, config).unwrap();
        assert!(res.is_continue());
        let oracle = reachable(&g, start);
        assert_eq!(order.len(), oracle.len());
        order.sort();
        assert_eq!(order, oracle);
    }

    #[test]
    fn conflicting_visitors() {
        let res = DfsConfig::new()
            .node_visitor(|_| {})
            .ok_node_visitor(|_| ControlFlow::Continue(()))
            .build();
        assert!(matches!(res, Err(Error::ConflictingNodeVisitors)));
        let res = DfsConfig::new()
            .arc_visitor(|_| {})
            .ok_arc_visitor(|_| ControlFlow::Continue(()))
            .build();
        assert!(matches!(res, Err(Error::ConflictingArcVisitors)));
    }

    #[test]
    fn conflict_visits_nothing() {
        let mut count = 0;
        let res = depth_first(
            &tree(),
            NodeId(0),
            DfsConfig::new()
                .arc_visitor(|_| count += 1)
                .ok_arc_visitor(|_| ControlFlow::Continue(())),
        );
        assert!(res.is_err());
        assert_eq!(count, 0);
    }

    #[test]
    fn mode_follows_visitors() {
        let dfs = DfsConfig::new().node_visitor(|_| {}).build().unwrap();
        assert_eq!(dfs.mode(), Mode::Traversal);
        let dfs = DfsConfig::new()
            .node_visitor(|_| {})
            .ok_arc_visitor(|_| ControlFlow::Continue(()))
            .build()
            .unwrap();
        assert_eq!(dfs.mode(), Mode::Search);
    }

    #[test]
    fn stop_unwinds_every_level() {
        let g = tree();
        let mut seen = vec![];
        let mut dfs = DfsConfig::new()
            .ok_node_visitor(|n| {
                seen.push(n);
                if n == NodeId(2) {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .build()
            .unwrap();
        assert!(dfs.run(&g, NodeId(0)).is_break());
        assert!(!dfs.is_visited(NodeId(3)));
        assert!(!dfs.is_visited(NodeId(4)));
        drop(dfs);
        assert_eq!(seen, vec![NodeId(0), NodeId(1), NodeId(2)]);
    }

    #[test]
    fn arc_stop_prunes_target() {
        let g = tree();
        let mut seen = vec![];
        let res = depth_first(
            &g,
            NodeId(0),
            DfsConfig::new()
                .node_visitor(|n| seen.push(n))
                .ok_arc_visitor(|a| {
                    if a.to == NodeId(3) {
                        ControlFlow::Break(())
                    } else {
                        ControlFlow::Continue(())
                    }
                }),
        )
        .unwrap();
        assert!(res.is_break());
        assert_eq!(seen, vec![NodeId(0), NodeId(1), NodeId(2)]);
    }

    struct Stubborn;

    impl Visitor for Stubborn {
        fn node(&mut self, _n: NodeId) -> ControlFlow<()> {
            ControlFlow::Break(())
        }
    }

    #[test]
    fn traversal_ignores_results() {
        let res = depth_first(&tree(), NodeId(0), DfsConfig::new().handler(Stubborn)).unwrap();
        assert!(res.is_continue());
    }

    #[test]
    fn labeled_arcs() {
        let mut g = LabeledUndirected::default();
        g.add_edge(Edge(NodeId(0), NodeId(1)), Label(10));
        g.add_edge(Edge(NodeId(1), NodeId(2)), Label(20));
        let mut labels = vec![];
        depth_first(
            &g,
            NodeId(0),
            DfsConfig::new().arc_visitor(|a| labels.push((a.from, a.to, a.label))),
        )
        .unwrap();
        assert_eq!(
            labels,
            vec![
                (NodeId(0), NodeId(1), Some(Label(10))),
                (NodeId(1), NodeId(0), Some(Label(10))),
                (NodeId(1), NodeId(2), Some(Label(20))),
                (NodeId(2), NodeId(1), Some(Label(20))),
            ]
        );
    }

    #[test]
    fn external_visited_set() {
        let g = tree();
        let mut visited = Bits::new(2);
        visited.set(NodeId(1));
        let mut seen = vec![];
        depth_first(
            &g,
            NodeId(0),
            DfsConfig::new()
                .node_visitor(|n| seen.push(n))
                .visited(&mut visited),
        )
        .unwrap();
        assert_eq!(seen, vec![NodeId(0), NodeId(4)]);
        assert_eq!(visited.len(), 5);
        assert_eq!(visited.to_vec(), vec![NodeId(0), NodeId(1), NodeId(4)]);
    }

    #[derive(Default)]
    struct Finished(Vec<(NodeId, Option<NodeId>)>);

    impl Visitor for Finished {
        fn finish(&mut self, n: NodeId, parent: Option<NodeId>) {
            self.0.push((n, parent));
        }
    }

    #[test]
    fn finish_in_postorder() {
        let mut fin = Finished::default();
        depth_first(&tree(), NodeId(0), DfsConfig::new().handler(&mut fin)).unwrap();
        assert_eq!(
            fin.0,
            vec![
                (NodeId(2), Some(NodeId(1))),
                (NodeId(3), Some(NodeId(1))),
                (NodeId(1), Some(NodeId(0))),
                (NodeId(4), Some(NodeId(0))),
                (NodeId(0), None),
            ]
        );
    }

    #[test]
    fn seeded_order_is_reproducible() {
        let mut g = AdjacencyList::new(20);
        for i in 1..20 {
            g.add_arc(NodeId(0), NodeId(i));
        }
        let walk = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut order = vec![];
            depth_first(
                &g,
                NodeId(0),
                DfsConfig::new().node_visitor(|n| order.push(n)).rng(&mut rng),
            )
            .unwrap();
            order
        };
        assert_eq!(walk(7), walk(7));
        assert_eq!(walk(7).len(), 20);
    }

    #[test]
    fn rng_shuffles_neighbors() {
        let mut g = AdjacencyList::new(20);
        for i in 1..20 {
            g.add_arc(NodeId(0), NodeId(i));
        }
        let stored: Vec<NodeId> = (0..20).map(NodeId::new).collect();
        let orders: BTreeSet<Vec<NodeId>> = (0..8u64)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut order = vec![];
                depth_first(
                    &g,
                    NodeId(0),
                    DfsConfig::new().node_visitor(|n| order.push(n)).rng(&mut rng),
                )
                .unwrap();
                order
            })
            .collect();
        assert!(orders.iter().any(|o| *o != stored));
        assert!(orders.len() >= 2);
        for o in orders.iter() {
            let mut sorted = o.clone();
            sorted.sort();
            assert_eq!(sorted, stored);
        }
    }

    #[test]
    fn rng_permutes_each_node_afresh() {
        // 0 -> {1, 2}, 1 -> 3..13, 2 -> 13..23
        let mut g = AdjacencyList::new(23);
        g.add_arc(NodeId(0), NodeId(1));
        g.add_arc(NodeId(0), NodeId(2));
        for i in 0..10 {
            g.add_arc(NodeId(1), NodeId(3 + i));
            g.add_arc(NodeId(2), NodeId(13 + i));
        }
        let children = |order: &[NodeId], first: usize| -> Vec<usize> {
            order
                .iter()
                .map(|n| n.to_raw())
                .filter(|n| (first..first + 10).contains(n))
                .map(|n| n - first)
                .collect()
        };
        let differs = (0..8u64).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut order = vec![];
            depth_first(
                &g,
                NodeId(0),
                DfsConfig::new().node_visitor(|n| order.push(n)).rng(&mut rng),
            )
            .unwrap();
            assert_eq!(order.len(), 23);
            children(&order, 3) != children(&order, 13)
        });
        assert!(differs);
    }
}
