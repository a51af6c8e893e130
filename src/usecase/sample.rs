use crate::domain::graph::DirectedGraph;

/// Eight vertices, four components: {A,B,C}, {D,E}, {F,G}, {H}.
pub fn sample_graph() -> DirectedGraph {
    let mut g = DirectedGraph::new();

    // A -> B -> C -> A
    g.add_edge("A", "B");
    g.add_edge("B", "C");
    g.add_edge("C", "A");

    // D <-> E
    g.add_edge("D", "E");
    g.add_edge("E", "D");

    // bridges between components, plus F <-> G and the sink H
    g.add_edge("C", "D");
    g.add_edge("E", "F");
    g.add_edge("F", "G");
    g.add_edge("G", "F");
    g.add_edge("G", "H");

    g
}
