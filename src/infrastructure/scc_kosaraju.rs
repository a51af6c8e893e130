use crate::domain::error::SccError;
use crate::domain::graph::{DirectedGraph, SccResult};
use crate::domain::traits::SccSolver;
use crate::domain::traversal::{depth_first, Visited};
use crate::domain::vertex::{VertexId, VertexName};

/// Second pass of Kosaraju: forward DFS on the original graph, roots taken
/// in decreasing finish time of the reversed graph.
pub struct KosarajuSccSolver;

impl SccSolver for KosarajuSccSolver {
    fn compute(&self, graph: &DirectedGraph, order: &[VertexName]) -> Result<SccResult, SccError> {
        let roots = resolve_order(graph, order)?;
        Ok(collect_components(graph, &roots))
    }
}

impl KosarajuSccSolver {
    /// Runs both passes on `graph`.
    pub fn solve(&self, graph: &DirectedGraph) -> SccResult {
        let order = graph.reverse().finish_order();
        let roots: Vec<VertexId> = order
            .iter()
            .filter_map(|name| graph.id_of(name.as_str()))
            .collect();
        collect_components(graph, &roots)
    }
}

/// Maps `order` onto `graph` ids, rejecting anything but an exact permutation.
fn resolve_order(graph: &DirectedGraph, order: &[VertexName]) -> Result<Vec<VertexId>, SccError> {
    let mut listed = Visited::for_graph(graph);
    let mut roots = Vec::with_capacity(order.len());

    for name in order {
        let id = graph
            .id_of(name.as_str())
            .ok_or_else(|| SccError::UnknownVertex(name.to_string()))?;
        if !listed.insert(id) {
            return Err(SccError::DuplicateVertex(name.to_string()));
        }
        roots.push(id);
    }

    if listed.len() < graph.vertex_count() {
        let missing = graph
            .all_vertices()
            .enumerate()
            .find(|&(i, _)| !listed.contains(VertexId(i)))
            .map(|(_, v)| v.name().to_string())
            .unwrap_or_default();
        return Err(SccError::MissingVertex(missing));
    }

    Ok(roots)
}

fn collect_components(graph: &DirectedGraph, roots: &[VertexId]) -> SccResult {
    let mut visited = Visited::for_graph(graph);
    let mut components: Vec<Vec<VertexName>> = Vec::new();
    let mut cyclic_component: Vec<bool> = Vec::new();

    for &root in roots {
        if visited.contains(root) {
            continue;
        }

        let mut members: Vec<VertexId> = Vec::new();
        depth_first(graph, root, &mut visited, |v| members.push(v), |_| {});

        let cyclic = members.len() > 1 || graph.has_self_loop(members[0]);
        cyclic_component.push(cyclic);
        components.push(
            members
                .iter()
                .map(|&id| graph.vertex(id).name().clone())
                .collect(),
        );
    }

    SccResult {
        components,
        cyclic_component,
    }
}
