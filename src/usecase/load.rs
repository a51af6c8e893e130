use crate::domain::graph::DirectedGraph;
use crate::infrastructure::serde_json_adapter::{EdgeDto, GraphFileDto};

/// Listed vertices first, in file order, then every edge in file order.
pub fn build_graph_from_dto(dto: &GraphFileDto) -> DirectedGraph {
    let mut g = DirectedGraph::new();
    for name in &dto.vertices {
        g.ensure_vertex(name);
    }
    for edge in &dto.edges {
        g.add_edge(&edge.from, &edge.to);
    }
    g
}

/// Inverse of [`build_graph_from_dto`]: every vertex is listed so isolated
/// ones and the insertion order both survive a round trip.
pub fn graph_to_dto(graph: &DirectedGraph) -> GraphFileDto {
    GraphFileDto {
        vertices: graph
            .all_vertices()
            .map(|v| v.name().to_string())
            .collect(),
        edges: graph
            .edges()
            .map(|(from, to)| EdgeDto::new(from.as_str(), to.as_str()))
            .collect(),
    }
}
