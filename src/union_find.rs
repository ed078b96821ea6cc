//! Weighted quick-union (disjoint-set) structure.
//!
//! Elements are `usize` ordinals in `[0, n)` where `n` is fixed at
//! construction time. Sets only ever merge, never split, so connectivity
//! between any two elements is monotonic over the life of the structure —
//! the board's winning-path queries depend on that.
//!
//! Union is weighted by set size: the smaller tree's root is attached
//! beneath the larger one, which bounds tree height logarithmically.
//! There is no path compression; [`UnionFind::find`] and
//! [`UnionFind::connected`] take `&self` and never mutate.

/// A disjoint-set structure with union-by-size.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Creates `n` singleton sets, each element its own representative.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in `[0, n)`. Indices outside the element
    /// range are a logic error in the caller, not a recoverable state.
    pub fn find(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// The root of the smaller set becomes a child of the root of the
    /// larger one. Merging a set with itself is a no-op.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }
        if self.size[root_a] < self.size[root_b] {
            self.parent[root_a] = root_b;
            self.size[root_b] += self.size[root_a];
        } else {
            self.parent[root_b] = root_a;
            self.size[root_a] += self.size[root_b];
        }
    }

    /// Returns true iff `a` and `b` are in the same set.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the number of elements in the structure.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the structure holds no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_singletons() {
        let uf = UnionFind::new(5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i, "element {i} should be its own representative");
        }
    }

    #[test]
    fn union_connects_two_elements() {
        let mut uf = UnionFind::new(4);
        assert!(!uf.connected(0, 1));
        uf.union(0, 1);
        assert!(uf.connected(0, 1));
    }

    #[test]
    fn union_does_not_affect_others() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        assert!(!uf.connected(0, 2));
        assert!(!uf.connected(0, 3));
        assert!(!uf.connected(2, 3));
    }

    #[test]
    fn connectivity_is_transitive() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        uf.union(1, 2);
        assert!(uf.connected(0, 2));
    }

    #[test]
    fn union_is_idempotent() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        let rep = uf.find(0);
        uf.union(0, 1);
        uf.union(1, 0);
        assert_eq!(uf.find(0), rep);
        assert_eq!(uf.find(1), rep);
    }

    #[test]
    fn smaller_set_attaches_beneath_larger() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(0, 2);
        // {0,1,2} outweighs {3}, so the singleton joins under its root
        let big_root = uf.find(0);
        uf.union(3, 0);
        assert_eq!(uf.find(3), big_root);
    }

    #[test]
    fn merging_everything_yields_one_set() {
        let mut uf = UnionFind::new(64);
        for i in 1..64 {
            uf.union(0, i);
        }
        let root = uf.find(0);
        for i in 0..64 {
            assert_eq!(uf.find(i), root);
        }
    }

    #[test]
    fn len_and_is_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.len(), 0);

        let uf = UnionFind::new(3);
        assert!(!uf.is_empty());
        assert_eq!(uf.len(), 3);
    }

    #[test]
    #[should_panic]
    fn find_out_of_range_panics() {
        let uf = UnionFind::new(3);
        uf.find(3);
    }
}
