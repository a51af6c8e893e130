use kosaraju_scc::domain::error::SccError;
use kosaraju_scc::domain::graph::DirectedGraph;
use kosaraju_scc::domain::traits::SccSolver;
use kosaraju_scc::domain::vertex::VertexName;
use kosaraju_scc::infrastructure::scc_kosaraju::KosarajuSccSolver;

fn graph(edges: &[(&str, &str)]) -> DirectedGraph {
    let mut g = DirectedGraph::new();
    for (u, v) in edges {
        g.add_edge(u, v);
    }
    g
}

fn components(g: &DirectedGraph) -> Vec<Vec<String>> {
    let order = g.reverse().finish_order();
    let det = KosarajuSccSolver;
    det.compute(g, &order)
        .expect("order from reverse graph is valid")
        .components
        .into_iter()
        .map(|c| c.into_iter().map(|n| n.0).collect())
        .collect()
}

fn sorted(mut comps: Vec<Vec<String>>) -> Vec<Vec<String>> {
    for c in comps.iter_mut() {
        c.sort();
    }
    comps.sort();
    comps
}

#[test]
fn kosaraju_single_vertex_without_edges() {
    let mut g = DirectedGraph::new();
    g.ensure_vertex("A");

    assert_eq!(components(&g), vec![vec!["A".to_string()]]);
}

#[test]
fn kosaraju_detects_self_loop_as_cyclic() {
    // A -> A
    let g = graph(&[("A", "A")]);
    let scc = KosarajuSccSolver.solve(&g);

    assert_eq!(scc.components.len(), 1);
    assert_eq!(scc.components[0], vec![VertexName::from("A")]);
    assert_eq!(scc.cyclic_component, vec![true]);
}

#[test]
fn kosaraju_pure_cycle_is_one_component() {
    // A -> B -> C -> A
    let g = graph(&[("A", "B"), ("B", "C"), ("C", "A")]);
    let comps = components(&g);

    assert_eq!(comps.len(), 1);
    assert_eq!(sorted(comps), vec![vec!["A", "B", "C"]]);
}

#[test]
fn kosaraju_produces_singletons_for_dag() {
    // A -> B -> C
    let g = graph(&[("A", "B"), ("B", "C")]);
    let scc = KosarajuSccSolver.solve(&g);

    assert_eq!(scc.components.len(), 3);
    for comp in scc.components.iter() {
        assert_eq!(comp.len(), 1);
    }
    assert!(scc.cyclic_component.iter().all(|&b| !b));
}

#[test]
fn kosaraju_four_components_in_sample_scenario() {
    let g = graph(&[
        ("A", "B"),
        ("B", "C"),
        ("C", "A"),
        ("D", "E"),
        ("E", "D"),
        ("C", "D"),
        ("E", "F"),
        ("F", "G"),
        ("G", "F"),
        ("G", "H"),
    ]);

    assert_eq!(
        sorted(components(&g)),
        vec![
            vec!["A", "B", "C"],
            vec!["D", "E"],
            vec!["F", "G"],
            vec!["H"],
        ]
    );
}

#[test]
fn kosaraju_parallel_edges_never_duplicate_members() {
    let g = graph(&[("A", "B"), ("A", "B"), ("B", "A"), ("B", "A")]);
    let comps = components(&g);

    assert_eq!(comps.len(), 1);
    assert_eq!(comps[0].len(), 2);

    let order = g.reverse().finish_order();
    assert_eq!(order.len(), 2);
}

#[test]
fn kosaraju_order_from_another_graph_is_rejected() {
    let g = graph(&[("A", "B")]);
    let other = graph(&[("A", "C")]);

    let err = KosarajuSccSolver
        .compute(&g, &other.reverse().finish_order())
        .unwrap_err();
    assert_eq!(err, SccError::UnknownVertex("C".to_string()));
}

#[test]
fn kosaraju_solve_matches_explicit_two_pass() {
    let g = graph(&[("x", "y"), ("y", "z"), ("z", "y"), ("w", "x")]);
    let explicit = KosarajuSccSolver
        .compute(&g, &g.reverse().finish_order())
        .expect("valid");
    assert_eq!(KosarajuSccSolver.solve(&g), explicit);
}
