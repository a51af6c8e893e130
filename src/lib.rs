//! Strongly connected components of named directed graphs.
//!
//! Layers:
//! - domain: vertices, graphs, traversal, the solver port
//! - infrastructure: Kosaraju solver, graph-file serde, schemas, NDJSON events
//! - usecase: analysis workflow, loading/validation, sample graph
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
