use super::NodeId;

const WORD_BITS: usize = u64::BITS as usize;

/// A fixed-capacity set of node ids.
///
/// Testing and setting are O(1).
/// Iteration yields ids in ascending order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Bits {
    words: Vec<u64>,
    len: usize,
}

impl Bits {
    /// Creates a set able to hold ids `0..n`, all clear.
    pub fn new(n: usize) -> Self {
        Self {
            words: vec![0; (n + WORD_BITS - 1) / WORD_BITS],
            len: n,
        }
    }

    /// Creates a set with every id in `0..n` present.
    pub fn all_ones(n: usize) -> Self {
        let mut res = Self::new(n);
        res.fill();
        res
    }

    /// Capacity in bits, set or not.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the capacity is zero. See [Bits::none_set] for the set being empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether no bit is set.
    pub fn none_set(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    pub fn bit(&self, n: NodeId) -> bool {
        let n = n.to_raw();
        debug_assert!(n < self.len);
        self.words[n / WORD_BITS] & (1 << (n % WORD_BITS)) != 0
    }

    pub fn set(&mut self, n: NodeId) {
        let n = n.to_raw();
        debug_assert!(n < self.len);
        self.words[n / WORD_BITS] |= 1 << (n % WORD_BITS);
    }

    pub fn clear(&mut self, n: NodeId) {
        let n = n.to_raw();
        debug_assert!(n < self.len);
        self.words[n / WORD_BITS] &= !(1 << (n % WORD_BITS));
    }

    /// Sets every bit in `0..len()`.
    pub fn fill(&mut self) {
        for w in self.words.iter_mut() {
            *w = u64::MAX;
        }
        let tail = self.len % WORD_BITS;
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last = (1 << tail) - 1;
            }
        }
    }

    /// Grows the capacity to at least `n` bits. Existing bits are kept.
    pub fn grow(&mut self, n: usize) {
        if n > self.len {
            self.words.resize((n + WORD_BITS - 1) / WORD_BITS, 0);
            self.len = n;
        }
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates over present ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.words.iter().enumerate().flat_map(|(i, w)| {
            let mut w = *w;
            std::iter::from_fn(move || {
                if w == 0 {
                    None
                } else {
                    let b = w.trailing_zeros() as usize;
                    w &= w - 1;
                    Some(NodeId::new(i * WORD_BITS + b))
                }
            })
        })
    }

    pub fn to_vec(&self) -> Vec<NodeId> {
        self.iter().collect()
    }
}

impl std::fmt::Debug for Bits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter().map(|n| n.to_raw())).finish()
    }
}

/// Renders the set as a binary number, the highest present id first.
impl std::fmt::Binary for Bits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let top = match self.iter().last() {
            None => return write!(f, "0"),
            Some(n) => n.to_raw(),
        };
        for i in (0..=top).rev() {
            let c = if self.bit(NodeId::new(i)) { '1' } else { '0' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
