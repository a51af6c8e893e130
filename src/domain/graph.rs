use crate::domain::traversal::{depth_first, Visited};
use crate::domain::vertex::{Vertex, VertexId, VertexName};
use std::collections::HashMap;
use std::fmt;

/// Directed graph of uniquely named vertices.
///
/// Vertices live in a `Vec` in the order their names were first introduced;
/// `index` maps each name to its position. That insertion order drives every
/// traversal, so results are reproducible for a given construction sequence.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    vertices: Vec<Vertex>,
    index: HashMap<VertexName, VertexId>,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, registering a new vertex if absent.
    pub fn ensure_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = VertexId(self.vertices.len());
        let name = VertexName::from(name);
        self.vertices.push(Vertex::new(name.clone()));
        self.index.insert(name, id);
        id
    }

    /// Adds `from -> to`, creating `from` then `to` if needed.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let u = self.ensure_vertex(from);
        let v = self.ensure_vertex(to);
        self.vertices[u.index()].add_outgoing(v);
    }

    pub fn all_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    pub fn lookup(&self, name: &str) -> Option<&Vertex> {
        self.id_of(name).map(|id| self.vertex(id))
    }

    pub fn id_of(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// Vertex behind an id issued by this graph.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    pub fn neighbors<'a>(&'a self, vertex: &'a Vertex) -> impl Iterator<Item = &'a Vertex> + 'a {
        vertex.outgoing().iter().map(move |&id| self.vertex(id))
    }

    /// Every edge as `(from, to)` names, in vertex order then adjacency order.
    pub fn edges(&self) -> impl Iterator<Item = (&VertexName, &VertexName)> + '_ {
        self.vertices.iter().flat_map(move |u| {
            u.outgoing()
                .iter()
                .map(move |&v| (u.name(), self.vertex(v).name()))
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn has_self_loop(&self, id: VertexId) -> bool {
        self.vertex(id).outgoing().contains(&id)
    }

    /// Builds the edge-reversed graph.
    ///
    /// All vertices are registered first, in this graph's insertion order,
    /// so the result's vertex order never depends on edge order.
    pub fn reverse(&self) -> DirectedGraph {
        let mut reversed = DirectedGraph {
            vertices: Vec::with_capacity(self.vertices.len()),
            index: HashMap::with_capacity(self.vertices.len()),
        };

        for v in &self.vertices {
            reversed.ensure_vertex(v.name().as_str());
        }

        for (from, to) in self.edges() {
            reversed.add_edge(to.as_str(), from.as_str());
        }

        reversed
    }

    /// Vertex names in decreasing DFS finish time.
    ///
    /// Roots are tried in insertion order; each vertex is recorded when its
    /// DFS finishes and the postorder is reversed at the end.
    pub fn finish_order(&self) -> Vec<VertexName> {
        let mut visited = Visited::for_graph(self);
        let mut post: Vec<VertexId> = Vec::with_capacity(self.vertices.len());

        for root in 0..self.vertices.len() {
            depth_first(self, VertexId(root), &mut visited, |_| {}, |v| post.push(v));
        }

        post.iter()
            .rev()
            .map(|&id| self.vertex(id).name().clone())
            .collect()
    }

    /// One `"<name> -> [<n1>, <n2>]"` line per vertex, in insertion order.
    pub fn adjacency_lines(&self) -> Vec<String> {
        self.vertices
            .iter()
            .map(|u| {
                let targets: Vec<&str> =
                    self.neighbors(u).map(|v| v.name().as_str()).collect();
                format!("{} -> [{}]", u.name(), targets.join(", "))
            })
            .collect()
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.adjacency_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Partition of a graph's vertices into strongly connected components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SccResult {
    /// Components in discovery order; members in the order they were reached.
    pub components: Vec<Vec<VertexName>>,
    /// True when the component holds a cycle: several vertices, or one with a self-loop.
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn component_of(&self, name: &str) -> Option<usize> {
        self.components
            .iter()
            .position(|comp| comp.iter().any(|n| n.as_str() == name))
    }

    pub fn cyclic_count(&self) -> usize {
        self.cyclic_component.iter().filter(|&&b| b).count()
    }

    pub fn largest_component(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }
}
