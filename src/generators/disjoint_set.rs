/// Union-find over path-cell indices, used by the Kruskal generator.
///
/// Parents and ranks live in two parallel arenas; a root is its own parent.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Creates `size` singleton sets.
    pub fn new(size: usize) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Returns the root of `x`, re-linking every node on the way directly to it.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets holding `x` and `y`.
    ///
    /// Returns `false` if they were already in the same set, i.e. linking them
    /// would close a cycle.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_singletons() {
        let mut set = DisjointSet::new(4);
        (0..4).for_each(|i| assert_eq!(set.find(i), i));
        assert!(!set.connected(0, 1));
    }

    #[test]
    fn test_union_reports_cycles() {
        let mut set = DisjointSet::new(5);
        assert!(set.union(0, 1));
        assert!(set.union(1, 2));
        assert!(!set.union(0, 2));
        assert!(!set.union(2, 2));
        assert!(set.connected(0, 2));
        assert!(!set.connected(0, 3));
        assert!(set.union(3, 4));
        assert!(set.union(4, 0));
        assert!(set.connected(2, 3));
    }

    #[test]
    fn test_union_by_rank_keeps_taller_root() {
        let mut set = DisjointSet::new(3);
        set.union(0, 1);
        let root = set.find(0);
        assert_eq!(set.rank[root], 1);
        set.union(2, 0);
        // The singleton is attached under the rank-1 root
        assert_eq!(set.find(2), root);
        assert_eq!(set.rank[root], 1);
    }

    #[test]
    fn test_find_compresses_path() {
        let mut set = DisjointSet::new(4);
        // Build the chain 3 -> 2 -> 1 -> 0 by hand
        set.parent = vec![0, 0, 1, 2];
        assert_eq!(set.find(3), 0);
        assert_eq!(set.parent, vec![0, 0, 0, 0]);
    }

    /// Reference connectivity by flooding an adjacency list.
    fn reachable(n: usize, edges: &[(usize, usize)], from: usize, to: usize) -> bool {
        let mut seen = vec![false; n];
        let mut stack = vec![from];
        seen[from] = true;
        while let Some(x) = stack.pop() {
            if x == to {
                return true;
            }
            for &(a, b) in edges {
                let other = if a == x {
                    b
                } else if b == x {
                    a
                } else {
                    continue;
                };
                if !seen[other] {
                    seen[other] = true;
                    stack.push(other);
                }
            }
        }
        false
    }

    proptest! {
        #[test]
        fn prop_find_matches_unions(
            edges in prop::collection::vec((0usize..12, 0usize..12), 0..30)
        ) {
            let mut set = DisjointSet::new(12);
            for &(a, b) in &edges {
                set.union(a, b);
            }
            for a in 0..12 {
                for b in 0..12 {
                    prop_assert_eq!(set.connected(a, b), reachable(12, &edges, a, b));
                }
            }
        }

        #[test]
        fn prop_union_order_independent(
            edges in prop::collection::vec((0usize..10, 0usize..10), 0..20)
        ) {
            let mut forward = DisjointSet::new(10);
            let mut backward = DisjointSet::new(10);
            edges.iter().for_each(|&(a, b)| { forward.union(a, b); });
            edges.iter().rev().for_each(|&(a, b)| { backward.union(b, a); });
            for a in 0..10 {
                for b in 0..10 {
                    prop_assert_eq!(forward.connected(a, b), backward.connected(a, b));
                }
            }
        }
    }
}
