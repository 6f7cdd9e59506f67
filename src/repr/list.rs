use super::*;

/// Per-vertex adjacency lists of `(neighbor, weight)` pairs in insertion order.
///
/// Unlike the adjacency matrix, lists are append-only: adding the same edge twice yields two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyLists {
    lists: Vec<Vec<WeightedNeighbor>>,
}

impl AdjacencyLists {
    /// Creates `n` empty lists
    pub(crate) fn new(n: NumNodes) -> Self {
        Self {
            lists: vec![Vec::new(); n as usize],
        }
    }

    pub(crate) fn push(&mut self, u: Node, v: Node, weight: Weight) {
        self.lists[u as usize].push((v, weight));
    }

    /// Returns the list of vertex `u`.
    /// ** Panics if `u >= n` **
    pub fn of(&self, u: Node) -> &[WeightedNeighbor] {
        &self.lists[u as usize]
    }

    /// Returns an iterator over `(u, list of u)` for all vertices
    pub fn iter(&self) -> impl Iterator<Item = (Node, &[WeightedNeighbor])> + '_ {
        self.lists
            .iter()
            .enumerate()
            .map(|(u, list)| (u as Node, list.as_slice()))
    }

    /// Returns the total number of entries over all lists
    pub fn number_of_entries(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Returns an owned copy of all lists
    pub fn to_vecs(&self) -> Vec<Vec<WeightedNeighbor>> {
        self.lists.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_only() {
        let mut lists = AdjacencyLists::new(3);
        lists.push(0, 1, 4);
        lists.push(0, 1, 9);
        lists.push(2, 0, 1);

        assert_eq!(lists.of(0), &[(1, 4), (1, 9)]);
        assert!(lists.of(1).is_empty());
        assert_eq!(lists.number_of_entries(), 3);
        assert_eq!(
            lists.iter().map(|(u, l)| (u, l.len())).collect::<Vec<_>>(),
            vec![(0, 2), (1, 0), (2, 1)]
        );
    }

    #[test]
    fn owned_copy_matches_lists() {
        let mut lists = AdjacencyLists::new(3);
        lists.push(1, 2, 5);
        lists.push(1, 0, 3);

        let copy = lists.to_vecs();
        assert_eq!(copy.len(), 3);
        for (u, list) in lists.iter() {
            assert_eq!(copy[u as usize].as_slice(), lists.of(u));
            assert_eq!(copy[u as usize].as_slice(), list);
        }

        lists.push(0, 1, 7);
        assert!(copy[0].is_empty());
        assert_eq!(lists.of(0), &[(1, 7)]);
    }
}
