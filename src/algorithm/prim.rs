use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::{Ordering, Reverse};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct Weight(f64);

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Cheapest known edge into a node outside the tree.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    from: NodeId,
    label: Label,
    weight: f64,
}

impl LabeledUndirected {
    /** Grows a minimum spanning tree from `start` by Prim's algorithm.

    Only the connected component of `start` is spanned.
    Calling it once per component representative on the same `forest`
    builds a minimum spanning forest.

    * `weight` maps edge labels to weights.
    * `forest` is reset to [FromList::new] if its order differs from the graph's.
      Otherwise nodes already reached in it are treated as spanned and skipped.
      `start` becomes a root.
    * `labels`, if given, receives at each spanned node the label of the edge
      from its parent. It must have a slot per node.
    * `leaves`, if given, receives the leaves of this tree only.
      It is grown to the graph order when shorter.

    Returns the number of nodes spanned, `start` included, and the total
    weight of the tree.
    Among frontier nodes of equal cost the lowest id is taken first.
    A node's edge is only replaced by a strictly cheaper one.
    */
    pub fn prim<W>(
        &self,
        start: NodeId,
        weight: W,
        forest: &mut FromList,
        mut labels: Option<&mut [Label]>,
        mut leaves: Option<&mut Bits>,
    ) -> (usize, f64)
    where
        W: Fn(Label) -> f64,
    {
        let order = self.order();
        if forest.order() != order {
            *forest = FromList::new(order);
        }
        forest.leaves.grow(order);
        if let Some(l) = leaves.as_deref_mut() {
            l.grow(order);
        }

        forest.paths[start.to_raw()] = PathEnd { from: None, len: 1 };
        forest.max_len = forest.max_len.max(1);
        forest.leaves.set(start);
        if let Some(l) = leaves.as_deref_mut() {
            l.set(start);
        }

        let mut best: Vec<Option<Frontier>> = vec![None; order];
        let mut queue: KeyedPriorityQueue<NodeId, Reverse<(Weight, NodeId)>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(order, RandomState::new());
        let mut spanned = 1;
        let mut dist = 0.0;
        let mut cur = start;
        loop {
            for h in self.adjacency.neighbors(cur) {
                if forest.is_reached(h.to) {
                    continue;
                }
                let w = weight(h.label);
                let better = match best[h.to.to_raw()] {
                    None => true,
                    Some(b) => w < b.weight,
                };
                if better {
                    best[h.to.to_raw()] = Some(Frontier {
                        from: cur,
                        label: h.label,
                        weight: w,
                    });
                    // inserts, or replaces the priority of a queued node
                    queue.push(h.to, Reverse((Weight(w), h.to)));
                }
            }

            let next = loop {
                match queue.pop() {
                    Some((n, _)) if forest.is_reached(n) => continue,
                    Some((n, _)) => break best[n.to_raw()].map(|b| (n, b)),
                    None => break None,
                }
            };
            let (n, b) = match next {
                Some(x) => x,
                None => break,
            };

            let len = forest.paths[b.from.to_raw()].len + 1;
            forest.paths[n.to_raw()] = PathEnd {
                from: Some(b.from),
                len,
            };
            forest.max_len = forest.max_len.max(len);
            if let Some(l) = labels.as_deref_mut() {
                l[n.to_raw()] = b.label;
            }
            dist += b.weight;
            forest.leaves.clear(b.from);
            forest.leaves.set(n);
            if let Some(l) = leaves.as_deref_mut() {
                l.clear(b.from);
                l.set(n);
            }
            spanned += 1;
            cur = n;
        }
        debug!(start = start.to_raw(), spanned, dist, "prim finished");
        (spanned, dist)
    }
}
