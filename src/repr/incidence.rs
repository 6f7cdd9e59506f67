use std::fmt::Debug;

use super::*;

/// Vertex-by-edge incidence matrix.
///
/// Column `i` belongs to the `i`-th added edge `Edge(u, v)` with `w = |matrix[u][v]|`:
/// row `u` holds `+w`, row `v` holds `+w` for undirected and `-w` for directed graphs.
/// Both entries are assignments in that order, so a self-loop column has a single entry
/// (`+w` undirected, `-w` directed).
#[derive(Clone, PartialEq, Eq)]
pub struct IncidenceMatrix {
    n: NumNodes,
    m: NumEdges,
    cells: Vec<SignedWeight>,
}

impl IncidenceMatrix {
    /// Builds the incidence matrix of `edges`, reading weights from `matrix`
    pub fn build(matrix: &AdjacencyMatrix, edges: &[Edge], directed: bool) -> Self {
        let n = matrix.number_of_nodes();
        let m = edges.len();
        let mut cells = vec![0; n as usize * m];

        for (i, &Edge(u, v)) in edges.iter().enumerate() {
            let weight = matrix.get(u, v) as SignedWeight;
            cells[u as usize * m + i] = weight;
            cells[v as usize * m + i] = if directed { -weight } else { weight };
        }

        Self {
            n,
            m: m as NumEdges,
            cells,
        }
    }

    /// Returns the number of rows
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the number of columns
    pub fn number_of_edges(&self) -> NumEdges {
        self.m
    }

    /// Returns the entry of vertex `u` in column `edge`.
    /// ** Panics if `u >= n || edge >= m` **
    pub fn get(&self, u: Node, edge: NumEdges) -> SignedWeight {
        assert!(edge < self.m);
        self.cells[u as usize * self.m as usize + edge as usize]
    }

    /// Returns the row of vertex `u`.
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[SignedWeight] {
        let m = self.m as usize;
        let beg = u as usize * m;
        &self.cells[beg..beg + m]
    }

    /// Returns an iterator over all rows in vertex order
    pub fn rows(&self) -> impl Iterator<Item = &[SignedWeight]> + '_ {
        (0..self.n).map(|u| self.row(u))
    }

    /// Returns an iterator over column `edge`, one entry per vertex.
    /// ** Panics if `edge >= m` **
    pub fn column(&self, edge: NumEdges) -> impl Iterator<Item = SignedWeight> + '_ {
        assert!(edge < self.m);
        self.rows().map(move |row| row[edge as usize])
    }

    /// Returns an owned copy of the matrix as nested rows
    pub fn to_rows(&self) -> Vec<Vec<SignedWeight>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Debug for IncidenceMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_with(n: NumNodes, entries: &[(Node, Node, Weight)]) -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::new(n);
        for &(u, v, w) in entries {
            matrix.set(u, v, w);
        }
        matrix
    }

    #[test]
    fn signs_follow_directedness() {
        let matrix = matrix_with(3, &[(0, 1, 5), (1, 0, 5), (2, 1, 3), (1, 2, 3)]);
        let edges = [Edge(0, 1), Edge(2, 1)];

        let undirected = IncidenceMatrix::build(&matrix, &edges, false);
        assert_eq!(undirected.to_rows(), vec![vec![5, 0], vec![5, 3], vec![0, 3]]);

        let directed = IncidenceMatrix::build(&matrix, &edges, true);
        assert_eq!(directed.to_rows(), vec![vec![5, 0], vec![-5, -3], vec![0, 3]]);
        assert_eq!(directed.column(1).collect::<Vec<_>>(), vec![0, -3, 3]);
    }

    #[test]
    fn self_loop_has_single_entry() {
        let matrix = matrix_with(2, &[(1, 1, 4)]);
        let edges = [Edge(1, 1)];

        assert_eq!(IncidenceMatrix::build(&matrix, &edges, false).get(1, 0), 4);
        assert_eq!(IncidenceMatrix::build(&matrix, &edges, true).get(1, 0), -4);
    }

    #[test]
    fn no_edges() {
        let incidence = IncidenceMatrix::build(&AdjacencyMatrix::new(3), &[], false);
        assert_eq!(incidence.number_of_edges(), 0);
        assert!(incidence.rows().all(|row| row.is_empty()));
    }
}
