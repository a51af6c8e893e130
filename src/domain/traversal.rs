use crate::domain::graph::DirectedGraph;
use crate::domain::vertex::VertexId;

/// Visited marks for one traversal pass over a single graph.
///
/// Owned by the caller of a pass, never stored on the graph, so the same
/// graph can be walked any number of times.
#[derive(Debug, Clone)]
pub struct Visited {
    seen: Vec<bool>,
    count: usize,
}

impl Visited {
    pub fn for_graph(graph: &DirectedGraph) -> Self {
        Self {
            seen: vec![false; graph.vertex_count()],
            count: 0,
        }
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.seen[id.index()]
    }

    /// Marks `id`; returns false if it was already marked.
    pub fn insert(&mut self, id: VertexId) -> bool {
        if self.seen[id.index()] {
            return false;
        }
        self.seen[id.index()] = true;
        self.count += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Iterative depth-first walk from `root`.
///
/// Produces exactly the callbacks of the recursive formulation: a vertex is
/// marked and reported to `on_enter` the moment it is first reached, its
/// neighbours are explored in stored order (already visited ones, including
/// parallel-edge repeats, are skipped), and it is reported to `on_finish`
/// once all of them are done. Does nothing if `root` is already visited.
pub fn depth_first<E, F>(
    graph: &DirectedGraph,
    root: VertexId,
    visited: &mut Visited,
    mut on_enter: E,
    mut on_finish: F,
) where
    E: FnMut(VertexId),
    F: FnMut(VertexId),
{
    if !visited.insert(root) {
        return;
    }
    on_enter(root);

    // (vertex, index of the next outgoing edge to try)
    let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];

    while let Some((v, next_i)) = stack.pop() {
        let outgoing = graph.vertex(v).outgoing();

        if let Some(&to) = outgoing.get(next_i) {
            stack.push((v, next_i + 1));
            if visited.insert(to) {
                on_enter(to);
                stack.push((to, 0));
            }
            continue;
        }

        on_finish(v);
    }
}
