//! Disjoint Set (Union-Find) used for cycle detection in Kruskal's algorithm.
//!
//! This is the textbook variant: `find` walks parent links without path
//! compression and `union` always links the root of the first argument below
//! the root of the second. Chains can degrade to *O*(*n*) on adversarial
//! orderings; the structure lives for a single solver run.
//!
//! `find` is iterative, so deep chains cannot exhaust the stack.

/// A Disjoint Set (Union-Find) over the vertices `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    /// Parent pointers. `None` marks a representative (root).
    parent: Vec<Option<usize>>,
    /// Number of disjoint components.
    components: usize,
}

impl DisjointSet {
    /// Creates a disjoint set of `len` singleton components.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    pub fn new(len: usize) -> Self {
        Self {
            parent: vec![None; len],
            components: len,
        }
    }

    /// Finds the representative of the set containing `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*) worst case
    pub fn find(&self, vertex: usize) -> usize {
        assert!(vertex < self.len(), "vertex {vertex} out of bounds");
        let mut root = vertex;
        while let Some(parent) = self.parent[root] {
            root = parent;
        }
        root
    }

    /// Unites the sets containing `x` and `y`.
    ///
    /// The representative of `x` becomes a child of the representative of `y`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    ///
    /// # Panics
    /// Panics if `x` or `y` is out of bounds.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);

        if x_root == y_root {
            return false;
        }

        self.parent[x_root] = Some(y_root);
        self.components -= 1;
        true
    }

    /// Returns `true` if `x` and `y` share a representative.
    pub fn same(&self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Returns the number of disjoint components.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the number of elements in the disjoint set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set() {
        let mut ds = DisjointSet::new(3);

        assert_eq!(ds.find(0), 0);
        assert_eq!(ds.find(1), 1);
        assert_eq!(ds.component_count(), 3);

        assert!(ds.union(0, 1));
        assert_eq!(ds.find(0), ds.find(1));
        assert!(!ds.same(0, 2));

        assert!(ds.union(1, 2));
        assert!(ds.same(0, 2));
        assert_eq!(ds.component_count(), 1);

        // Already united
        assert!(!ds.union(0, 2));
        assert_eq!(ds.component_count(), 1);
    }

    #[test]
    fn union_links_first_root_under_second() {
        let mut ds = DisjointSet::new(4);
        ds.union(0, 1);
        assert_eq!(ds.find(0), 1);

        ds.union(2, 3);
        ds.union(1, 3);
        // 0 -> 1 -> 3, 2 -> 3
        assert_eq!(ds.find(0), 3);
        assert_eq!(ds.find(2), 3);
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let n = 100_000;
        let mut ds = DisjointSet::new(n);
        for i in 0..n - 1 {
            // Each union hangs the current root below the next vertex.
            ds.union(i, i + 1);
        }
        assert_eq!(ds.find(0), n - 1);
        assert_eq!(ds.component_count(), 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn find_out_of_bounds_panics() {
        let ds = DisjointSet::new(2);
        ds.find(2);
    }

    #[test]
    fn empty_default() {
        let ds = DisjointSet::default();
        assert!(ds.is_empty());
        assert_eq!(ds.len(), 0);
    }
}
