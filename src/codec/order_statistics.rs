/// A complete binary tree of counts over the universe `{0..n-1}` answering "which
/// element is the k-th one still available" and "mark this element consumed" in
/// `O(log n)`.
///
/// Nodes are stored heap-style: the root lives at index 1 and the children of node
/// `v` at `2v` and `2v + 1`. The leaf for element `i` sits at `capacity + i`, where
/// `capacity` is the smallest power of two not below `n`. Leaves past `n` carry a
/// weight of zero so they are never selected.
#[derive(Debug, Clone, Default)]
pub struct OrderStatisticsTree {
    weights: Vec<u32>,
    capacity: usize,
    len: usize,
}

impl OrderStatisticsTree {
    /// Creates a tree over `{0..n-1}` with every element available.
    pub fn new(n: usize) -> Self {
        let mut tree = Self::default();
        tree.reset(n);
        tree
    }

    /// Reinitializes the tree over `{0..n-1}` with every element available.
    ///
    /// The backing storage only grows, so a tree reused across calls of similar size
    /// does not reallocate.
    pub fn reset(&mut self, n: usize) {
        self.capacity = n.next_power_of_two();
        self.len = n;

        let nodes = self.capacity << 1;
        if self.weights.len() < nodes {
            self.weights.resize(nodes, 0);
        }

        let leaves = &mut self.weights[self.capacity..nodes];
        leaves[..n].fill(1);
        leaves[n..].fill(0);

        for v in (1..self.capacity).rev() {
            self.weights[v] = self.weights[v << 1] + self.weights[(v << 1) + 1];
        }
    }

    /// Number of elements the tree was last reset for.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements still available.
    pub fn available(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.weights[1] as usize
        }
    }

    /// Returns the `k`-th (0-indexed) smallest element that is still available.
    ///
    /// `k` must be below [`available`](Self::available).
    pub fn select(&self, k: usize) -> usize {
        debug_assert!(k < self.available(), "rank {} out of range", k);

        let mut remaining = k as u32;
        let mut v = 1;
        while v < self.capacity {
            let left = v << 1;
            if self.weights[left] > remaining {
                v = left;
            } else {
                remaining -= self.weights[left];
                v = left + 1;
            }
        }
        v - self.capacity
    }

    /// Marks `index` as consumed and updates the sums on the path to the root.
    pub fn consume(&mut self, index: usize) {
        debug_assert!(index < self.len, "element {} out of range", index);

        let mut v = self.capacity + index;
        self.weights[v] = 0;
        while v > 1 {
            v >>= 1;
            self.weights[v] = self.weights[v << 1] + self.weights[(v << 1) + 1];
        }
    }
}
