/*!
# IO

Console reports of the three graph representations.

Graphs are never read from or persisted to files; the only output is a human-readable dump of

- the **adjacency matrix** as an `n x n` grid with `V{i}` labels,
- the **incidence matrix** as one row `E{i}` per edge (in insertion order) and one column per vertex,
- the **adjacency list** as `u: v(w) v(w) ...` per vertex, as stored.

Grids print either the *presence* of an entry (`0`/`1`) or its (signed) value, see [`MatrixStyle`].
Every report ends with a blank line.

## Traits

- [`ReportWriter`] holds the formatting options and writes to any [`Write`].
- [`GraphReport`] is a shorthand on [`Graph`] using the default [`ReportWriter`].

```
use matgraphs::{prelude::*, io::*};

let graph = Graph::from_edges(2, false, [(0, 1)]).unwrap();

let mut out = Vec::new();
graph.try_write_adjacency_matrix(&mut out).unwrap();
assert_eq!(String::from_utf8(out).unwrap(), "  V0 V1 \nV0 0  1  \nV1 1  0  \n\n");
```
*/

mod report;

use std::io::{Result, Write};

use crate::prelude::*;

pub use report::*;

/// How a cell of a matrix report is printed
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum MatrixStyle {
    /// `1` for any nonzero entry, `0` otherwise
    #[default]
    Presence,
    /// The stored value; incidence entries keep their sign
    Weights,
}

/// Trait for writing reports of a graph using the default [`ReportWriter`]
pub trait GraphReport {
    /// Writes the adjacency matrix as a presence grid
    fn try_write_adjacency_matrix<W: Write>(&self, writer: &mut W) -> Result<()>;

    /// Writes the incidence matrix as a presence grid, one row per edge
    fn try_write_incidence_matrix<W: Write>(&self, writer: &mut W) -> Result<()>;

    /// Writes the stored adjacency lists
    fn try_write_adjacency_list<W: Write>(&self, writer: &mut W) -> Result<()>;
}

impl GraphReport for Graph {
    fn try_write_adjacency_matrix<W: Write>(&self, writer: &mut W) -> Result<()> {
        ReportWriter::default().write_adjacency_matrix(writer, self)
    }

    fn try_write_incidence_matrix<W: Write>(&self, writer: &mut W) -> Result<()> {
        ReportWriter::default().write_incidence_matrix(writer, self)
    }

    fn try_write_adjacency_list<W: Write>(&self, writer: &mut W) -> Result<()> {
        ReportWriter::default().write_adjacency_list(writer, self)
    }
}
