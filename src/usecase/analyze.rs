use crate::domain::graph::{DirectedGraph, SccResult};
use crate::domain::traits::SccSolver;
use crate::domain::vertex::{VertexId, VertexName};
use crate::usecase::event::AppEvent;
use crate::usecase::stats::AnalyzeStats;
use anyhow::{Context, Result};
use tokio::sync::mpsc;

/// Everything the two Kosaraju passes produced for one graph.
#[derive(Debug, Clone)]
pub struct SccReport {
    pub original_adjacency: Vec<String>,
    pub reversed_adjacency: Vec<String>,
    /// Decreasing finish time on the reversed graph.
    pub finish_order: Vec<VertexName>,
    pub result: SccResult,
}

impl SccReport {
    /// Text rendering, one section per stage.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("=== Original Graph (Adjacency) ===\n");
        for line in &self.original_adjacency {
            out.push_str(line);
            out.push('\n');
        }

        out.push_str("\n=== Reversed Graph (Adjacency) ===\n");
        for line in &self.reversed_adjacency {
            out.push_str(line);
            out.push('\n');
        }

        out.push_str("\n=== Finish Order on Reversed Graph (desc) ===\n");
        out.push_str(&format_names(&self.finish_order));
        out.push('\n');

        out.push_str("\n=== Strongly Connected Components (Kosaraju) ===\n");
        for (i, comp) in self.result.components.iter().enumerate() {
            out.push_str(&format!("SCC #{}: {}\n", i + 1, format_names(comp)));
        }

        out
    }
}

/// `[A, B, C]`
pub fn format_names(names: &[VertexName]) -> String {
    let parts: Vec<&str> = names.iter().map(VertexName::as_str).collect();
    format!("[{}]", parts.join(", "))
}

pub async fn analyze_graph(
    graph: &DirectedGraph,
    solver: &dyn SccSolver,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(SccReport, AnalyzeStats)> {
    let mut stats = AnalyzeStats {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        self_loops: (0..graph.vertex_count())
            .filter(|&i| graph.has_self_loop(VertexId(i)))
            .count(),
        ..AnalyzeStats::default()
    };

    emit(
        &sink,
        AppEvent::GraphLoaded {
            vertices: stats.vertices,
            edges: stats.edges,
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "reverse".into(),
        },
    )
    .await;
    let reversed = graph.reverse();
    emit(
        &sink,
        AppEvent::GraphReversed {
            vertices: reversed.vertex_count(),
            edges: reversed.edge_count(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "reverse".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "finish_order".into(),
        },
    )
    .await;
    let finish_order = reversed.finish_order();
    emit(
        &sink,
        AppEvent::FinishOrderComputed {
            order: finish_order.clone(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "finish_order".into(),
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let result = solver
        .compute(graph, &finish_order)
        .context("collecting components")?;
    emit(
        &sink,
        AppEvent::SccComputed {
            vertices: stats.vertices,
            edges: stats.edges,
            components: result.len(),
            cyclic_components: result.cyclic_count(),
        },
    )
    .await;
    for (index, (members, &cyclic)) in result
        .components
        .iter()
        .zip(result.cyclic_component.iter())
        .enumerate()
    {
        emit(
            &sink,
            AppEvent::ComponentFound {
                index,
                members: members.clone(),
                cyclic,
            },
        )
        .await;
    }
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    stats.components = result.len();
    stats.cyclic_components = result.cyclic_count();
    stats.largest_component = result.largest_component();

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;

    let report = SccReport {
        original_adjacency: graph.adjacency_lines(),
        reversed_adjacency: reversed.adjacency_lines(),
        finish_order,
        result,
    };

    Ok((report, stats))
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SccError;
    use crate::infrastructure::scc_kosaraju::KosarajuSccSolver;
    use crate::usecase::sample::sample_graph;

    struct ShortOrderSolver;

    impl SccSolver for ShortOrderSolver {
        fn compute(
            &self,
            graph: &DirectedGraph,
            order: &[VertexName],
        ) -> Result<SccResult, SccError> {
            KosarajuSccSolver.compute(graph, &order[1..])
        }
    }

    #[tokio::test]
    async fn sample_report_renders_every_section() {
        let g = sample_graph();
        let (report, stats) = analyze_graph(&g, &KosarajuSccSolver, None)
            .await
            .expect("analyze");

        assert_eq!(stats.vertices, 8);
        assert_eq!(stats.edges, 10);
        assert_eq!(stats.self_loops, 0);
        assert_eq!(stats.components, 4);
        assert_eq!(stats.cyclic_components, 3);
        assert_eq!(stats.largest_component, 3);

        let text = report.render_text();
        assert!(text.starts_with("=== Original Graph (Adjacency) ===\nA -> [B]\n"));
        assert!(text.contains("C -> [A, D]\n"));
        assert!(text.contains("=== Reversed Graph (Adjacency) ===\nA -> [C]\n"));
        assert!(text.contains("[H, F, G, D, E, A, C, B]\n"));
        assert!(text.contains("SCC #1: [H]\n"));
        assert!(text.ends_with("SCC #4: [A, B, C]\n"));
    }

    #[tokio::test]
    async fn events_follow_phase_order() {
        let g = sample_graph();
        let (tx, mut rx) = mpsc::channel::<AppEvent>(64);

        analyze_graph(&g, &KosarajuSccSolver, Some(tx))
            .await
            .expect("analyze");

        let mut kinds = Vec::new();
        while let Some(ev) = rx.recv().await {
            let v = serde_json::to_value(&ev).expect("serialize");
            kinds.push(v["type"].as_str().unwrap_or_default().to_string());
        }

        assert_eq!(kinds.first().map(String::as_str), Some("GraphLoaded"));
        assert_eq!(kinds.last().map(String::as_str), Some("Finished"));
        assert_eq!(kinds.iter().filter(|k| *k == "ComponentFound").count(), 4);
        let reversed = kinds.iter().position(|k| k == "GraphReversed").unwrap();
        let finished = kinds.iter().position(|k| k == "FinishOrderComputed").unwrap();
        let scc = kinds.iter().position(|k| k == "SccComputed").unwrap();
        assert!(reversed < finished && finished < scc);
    }

    #[tokio::test]
    async fn solver_precondition_failure_propagates() {
        let g = sample_graph();
        let err = analyze_graph(&g, &ShortOrderSolver, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("collecting components"));
        assert!(err.downcast_ref::<SccError>().is_some());
    }

    #[test]
    fn format_names_matches_list_style() {
        assert_eq!(format_names(&[]), "[]");
        assert_eq!(
            format_names(&[VertexName::from("A"), VertexName::from("B")]),
            "[A, B]"
        );
    }
}
