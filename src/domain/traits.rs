use crate::domain::error::SccError;
use crate::domain::graph::{DirectedGraph, SccResult};
use crate::domain::vertex::VertexName;

pub trait SccSolver {
    /// Partitions `graph` by walking it in `order`, which must be a
    /// permutation of its vertex names (normally `graph.reverse().finish_order()`).
    fn compute(&self, graph: &DirectedGraph, order: &[VertexName]) -> Result<SccResult, SccError>;
}
