use std::fmt::Display;

use super::*;

/// A writer for console reports.
///
/// Each cell is left-aligned in a field of width two followed by a space, which keeps single-digit
/// grids aligned with `V{i} ` labels for `n <= 10`.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    style: MatrixStyle,
    /// Label prefix of a vertex (default: `V`)
    vertex_prefix: String,
    /// Label prefix of an edge (default: `E`)
    edge_prefix: String,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self {
            style: MatrixStyle::Presence,
            vertex_prefix: "V".to_string(),
            edge_prefix: "E".to_string(),
        }
    }
}

impl ReportWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how matrix cells are printed
    pub fn style(mut self, style: MatrixStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the label prefix of vertices in matrix headers
    pub fn vertex_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.vertex_prefix = prefix.into();
        self
    }

    /// Sets the label prefix of edges in the incidence matrix
    pub fn edge_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.edge_prefix = prefix.into();
        self
    }

    /// Writes the `n x n` adjacency matrix, one row per vertex
    pub fn write_adjacency_matrix<W>(&self, writer: &mut W, graph: &Graph) -> Result<()>
    where
        W: Write,
    {
        self.write_header(writer, graph.number_of_nodes())?;

        for (u, row) in graph.adjacency_matrix().rows().enumerate() {
            self.write_label(writer, &self.vertex_prefix, u)?;
            self.write_cells(writer, row.iter().map(|&w| w as SignedWeight))?;
        }

        writeln!(writer)
    }

    /// Writes the incidence matrix transposed, i.e. one row per edge in insertion order and one
    /// column per vertex
    pub fn write_incidence_matrix<W>(&self, writer: &mut W, graph: &Graph) -> Result<()>
    where
        W: Write,
    {
        let incidence = graph.incidence_matrix();
        self.write_header(writer, incidence.number_of_nodes())?;

        for edge in 0..incidence.number_of_edges() {
            self.write_label(writer, &self.edge_prefix, edge)?;
            self.write_cells(writer, incidence.column(edge))?;
        }

        writeln!(writer)
    }

    /// Writes `u: v(w) ...` for every vertex, listing entries in the order they were stored
    pub fn write_adjacency_list<W>(&self, writer: &mut W, graph: &Graph) -> Result<()>
    where
        W: Write,
    {
        for (u, neighbors) in graph.adjacency_list().iter() {
            write!(writer, "{u}: ")?;
            for (v, w) in neighbors {
                write!(writer, "{v}({w}) ")?;
            }
            writeln!(writer)?;
        }

        writeln!(writer)
    }

    fn write_header<W>(&self, writer: &mut W, n: NumNodes) -> Result<()>
    where
        W: Write,
    {
        write!(writer, "  ")?;
        for u in 0..n {
            self.write_label(writer, &self.vertex_prefix, u)?;
        }
        writeln!(writer)
    }

    fn write_label<W, I>(&self, writer: &mut W, prefix: &str, index: I) -> Result<()>
    where
        W: Write,
        I: Display,
    {
        write!(writer, "{prefix}{index} ")
    }

    /// Writes one row of cells including the line break
    fn write_cells<W, I>(&self, writer: &mut W, values: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = SignedWeight>,
    {
        for value in values {
            let value = match self.style {
                MatrixStyle::Presence => (value != 0) as SignedWeight,
                MatrixStyle::Weights => value,
            };
            write!(writer, "{value:<2} ")?;
        }
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// 0 -5- 1 -7- 2
    fn path_graph(directed: bool) -> Graph {
        Graph::from_weighted_edges(3, directed, [(0, 1, 5), (1, 2, 7)]).unwrap()
    }

    #[test]
    fn adjacency_matrix_presence() {
        let graph = path_graph(false);
        assert_eq!(
            report(|w| graph.try_write_adjacency_matrix(w)),
            "  V0 V1 V2 \nV0 0  1  0  \nV1 1  0  1  \nV2 0  1  0  \n\n"
        );
    }

    #[test]
    fn adjacency_matrix_weights() {
        let graph = Graph::from_weighted_edges(2, true, [(0, 1, 100), (1, 1, 12)]).unwrap();
        let writer = ReportWriter::new().style(MatrixStyle::Weights);
        assert_eq!(
            report(|w| writer.write_adjacency_matrix(w, &graph)),
            "  V0 V1 \nV0 0  100 \nV1 0  12 \n\n"
        );
    }

    #[test]
    fn incidence_matrix_rows_are_edges() {
        let graph = path_graph(false);
        assert_eq!(
            report(|w| graph.try_write_incidence_matrix(w)),
            "  V0 V1 V2 \nE0 1  1  0  \nE1 0  1  1  \n\n"
        );

        let writer = ReportWriter::new().style(MatrixStyle::Weights);
        assert_eq!(
            report(|w| writer.write_incidence_matrix(w, &graph)),
            "  V0 V1 V2 \nE0 5  5  0  \nE1 0  7  7  \n\n"
        );
    }

    #[test]
    fn incidence_matrix_keeps_signs() {
        let graph = path_graph(true);
        let writer = ReportWriter::new().style(MatrixStyle::Weights);
        assert_eq!(
            report(|w| writer.write_incidence_matrix(w, &graph)),
            "  V0 V1 V2 \nE0 5  -5 0  \nE1 0  7  -7 \n\n"
        );
        assert_eq!(
            report(|w| graph.try_write_incidence_matrix(w)),
            "  V0 V1 V2 \nE0 1  1  0  \nE1 0  1  1  \n\n"
        );
    }

    #[test]
    fn incidence_matrix_without_edges() {
        let graph = Graph::new(2, false).unwrap();
        assert_eq!(
            report(|w| graph.try_write_incidence_matrix(w)),
            "  V0 V1 \n\n"
        );
    }

    #[test]
    fn adjacency_list_as_stored() {
        let graph = path_graph(false);
        assert_eq!(
            report(|w| graph.try_write_adjacency_list(w)),
            "0: 1(5) \n1: 0(5) 2(7) \n2: 1(7) \n\n"
        );

        let mut one_sided = Graph::with_options(
            3,
            false,
            GraphOptions::new().mirror_undirected_edges(false),
        )
        .unwrap();
        one_sided.add_weighted_edges([(0, 1, 5), (1, 2, 7)]).unwrap();
        assert_eq!(
            report(|w| one_sided.try_write_adjacency_list(w)),
            "0: 1(5) \n1: 2(7) \n2: \n\n"
        );
    }

    #[test]
    fn custom_prefixes() {
        let graph = Graph::from_edges(1, false, [(0, 0)]).unwrap();
        let writer = ReportWriter::new().vertex_prefix("u").edge_prefix("e");
        assert_eq!(
            report(|w| writer.write_adjacency_matrix(w, &graph)),
            "  u0 \nu0 1  \n\n"
        );
        assert_eq!(
            report(|w| writer.write_incidence_matrix(w, &graph)),
            "  u0 \ne0 1  \n\n"
        );
    }
}
