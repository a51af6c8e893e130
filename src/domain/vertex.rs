use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique identifier of a vertex within a graph.
///
/// Equality and hashing are purely by value, so names compare equal across
/// separately built graphs. `Borrow<str>` lets name-keyed maps be queried
/// with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexName(pub String);

impl VertexName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for VertexName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VertexName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Graph-local handle: the position of a vertex in its graph's insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named node and its outgoing adjacency, in edge insertion order.
///
/// Neighbours are stored as [`VertexId`]s of the owning graph. Parallel edges
/// show up as repeated ids.
#[derive(Debug, Clone)]
pub struct Vertex {
    name: VertexName,
    outgoing: Vec<VertexId>,
}

impl Vertex {
    pub fn new(name: impl Into<VertexName>) -> Self {
        Self {
            name: name.into(),
            outgoing: Vec::new(),
        }
    }

    pub fn name(&self) -> &VertexName {
        &self.name
    }

    pub fn outgoing(&self) -> &[VertexId] {
        &self.outgoing
    }

    pub fn add_outgoing(&mut self, target: VertexId) {
        self.outgoing.push(target);
    }

    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }
}

// Identity is the name alone; adjacency ids are graph-local.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
