use thiserror::Error;

/// Reasons a processing order cannot drive component collection.
///
/// Each one means the order is not an exact permutation of the graph's
/// vertex names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SccError {
    #[error("order names a vertex that is not in the graph: {0}")]
    UnknownVertex(String),
    #[error("order lists vertex more than once: {0}")]
    DuplicateVertex(String),
    #[error("order omits vertex: {0}")]
    MissingVertex(String),
}
