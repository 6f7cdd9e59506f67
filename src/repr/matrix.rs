use std::{fmt::Debug, ops::Index};

use super::*;

/// Dense `n x n` adjacency matrix stored row-major.
///
/// Cell `(u, v)` holds the weight of the edge `u -> v` or `0` if there is none.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: NumNodes,
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Creates an all-zero matrix for `n` nodes.
    /// The caller guarantees `n > 0`.
    pub(crate) fn new(n: NumNodes) -> Self {
        debug_assert!(n > 0);
        Self {
            n,
            cells: vec![0; n as usize * n as usize],
        }
    }

    #[inline]
    fn cell(&self, u: Node, v: Node) -> usize {
        debug_assert!(u < self.n && v < self.n);
        u as usize * self.n as usize + v as usize
    }

    /// Returns the number of rows (and columns)
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the weight stored at `(u, v)`.
    /// ** Panics if `u >= n || v >= n` **
    pub fn get(&self, u: Node, v: Node) -> Weight {
        self.cells[self.cell(u, v)]
    }

    pub(crate) fn set(&mut self, u: Node, v: Node, weight: Weight) {
        let cell = self.cell(u, v);
        self.cells[cell] = weight;
    }

    /// Returns row `u`, i.e. the weights of all edges leaving `u`.
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Weight] {
        let n = self.n as usize;
        let beg = u as usize * n;
        &self.cells[beg..beg + n]
    }

    /// Returns an iterator over all rows in vertex order
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        self.cells.chunks_exact(self.n as usize)
    }

    /// Returns the number of nonzero cells
    pub fn number_of_nonzeros(&self) -> usize {
        self.cells.iter().filter(|&&w| w != 0).count()
    }

    /// Returns *true* if `(u, v)` and `(v, u)` hold the same weight for all pairs
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|u| (u + 1..self.n).all(|v| self.get(u, v) == self.get(v, u)))
    }

    /// Returns an owned copy of the matrix as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Index<(Node, Node)> for AdjacencyMatrix {
    type Output = Weight;

    fn index(&self, (u, v): (Node, Node)) -> &Self::Output {
        &self.cells[self.cell(u, v)]
    }
}

impl Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_rows() {
        let mut matrix = AdjacencyMatrix::new(3);
        assert_eq!(matrix.number_of_nonzeros(), 0);
        assert!(matrix.is_symmetric());

        matrix.set(0, 2, 7);
        assert_eq!(matrix.get(0, 2), 7);
        assert_eq!(matrix[(0, 2)], 7);
        assert_eq!(matrix.row(0), &[0, 0, 7]);
        assert!(!matrix.is_symmetric());

        matrix.set(2, 0, 7);
        assert!(matrix.is_symmetric());
        assert_eq!(matrix.to_rows(), vec![vec![0, 0, 7], vec![0, 0, 0], vec![7, 0, 0]]);
        assert_eq!(matrix.number_of_nonzeros(), 2);
    }
}
