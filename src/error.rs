//! Error types for graph construction, editing, generation and search.

use thiserror::Error;

use crate::{edge::NumEdges, node::*};

/// All errors that can occur in this crate.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex index outside `0..vertices` was passed to an operation.
    #[error("Vertex {vertex} is out of range for a graph with {vertices} vertices")]
    InvalidVertex { vertex: Node, vertices: NumNodes },

    /// An edge was added with weight `0`, which the adjacency matrix reserves for *no edge*.
    #[error("Edge ({u},{v}) must have a positive weight")]
    InvalidWeight { u: Node, v: Node },

    /// A graph must have at least one vertex.
    #[error("Cannot construct a graph with {0} vertices")]
    Construction(NumNodes),

    /// Generator parameters that are inconsistent on their own (e.g. `min > max`).
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    /// The requested number of edges cannot be placed under the generator's constraints.
    #[error("Cannot generate {edges} edges on {vertices} vertices: {reason}")]
    InfeasibleGeneration {
        vertices: NumNodes,
        edges: NumEdges,
        reason: String,
    },

    /// IO error while writing a report.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Shorthand for returning `Err(GraphError::InvalidVertex)` early if `u >= n`
macro_rules! raise_unless_vertex {
    ($u : expr, $n : expr) => {
        if $u >= $n {
            return Err($crate::error::GraphError::InvalidVertex {
                vertex: $u,
                vertices: $n,
            });
        }
    };
}

pub(crate) use raise_unless_vertex;

#[cfg(test)]
mod tests {
    use super::*;

    fn check(u: Node, n: NumNodes) -> Result<()> {
        raise_unless_vertex!(u, n);
        Ok(())
    }

    #[test]
    fn vertex_bounds() {
        assert!(check(0, 1).is_ok());
        assert!(check(9, 10).is_ok());
        assert!(matches!(
            check(10, 10),
            Err(GraphError::InvalidVertex {
                vertex: 10,
                vertices: 10
            })
        ));
    }

    #[test]
    fn messages() {
        let err = GraphError::InfeasibleGeneration {
            vertices: 3,
            edges: 5,
            reason: "at most 3 simple edges".into(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot generate 5 edges on 3 vertices: at most 3 simple edges"
        );
        assert_eq!(
            GraphError::Construction(0).to_string(),
            "Cannot construct a graph with 0 vertices"
        );
    }
}
