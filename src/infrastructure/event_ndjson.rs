use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphLoaded { vertices, edges } => {
            json!({"type":"graph_loaded","vertices":vertices,"edges":edges})
        }
        AppEvent::GraphReversed { vertices, edges } => {
            json!({"type":"graph_reversed","vertices":vertices,"edges":edges})
        }
        AppEvent::FinishOrderComputed { order } => {
            json!({"type":"finish_order_computed","order":order})
        }
        AppEvent::SccComputed {
            vertices,
            edges,
            components,
            cyclic_components,
        } => {
            json!({"type":"scc_computed","vertices":vertices,"edges":edges,"components":components,"cyclic_components":cyclic_components})
        }
        AppEvent::ComponentFound {
            index,
            members,
            cyclic,
        } => {
            json!({"type":"component_found","index":index,"members":members,"cyclic":cyclic})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vertex::VertexName;
    use crate::usecase::stats::AnalyzeStats;

    #[test]
    fn app_event_to_json_covers_all_variants() {
        let v = app_event_to_json(&AppEvent::PhaseStarted {
            name: "x".to_string(),
        });
        assert_eq!(v["type"], "phase_started");

        let v = app_event_to_json(&AppEvent::PhaseFinished {
            name: "x".to_string(),
        });
        assert_eq!(v["type"], "phase_finished");

        let v = app_event_to_json(&AppEvent::GraphLoaded {
            vertices: 3,
            edges: 2,
        });
        assert_eq!(v["type"], "graph_loaded");
        assert_eq!(v["vertices"], 3);

        let v = app_event_to_json(&AppEvent::GraphReversed {
            vertices: 3,
            edges: 2,
        });
        assert_eq!(v["type"], "graph_reversed");

        let v = app_event_to_json(&AppEvent::FinishOrderComputed {
            order: vec![VertexName::from("b"), VertexName::from("a")],
        });
        assert_eq!(v["type"], "finish_order_computed");
        assert_eq!(v["order"][0], "b");

        let v = app_event_to_json(&AppEvent::SccComputed {
            vertices: 1,
            edges: 2,
            components: 3,
            cyclic_components: 4,
        });
        assert_eq!(v["type"], "scc_computed");
        assert_eq!(v["cyclic_components"], 4);

        let v = app_event_to_json(&AppEvent::ComponentFound {
            index: 0,
            members: vec![VertexName::from("a")],
            cyclic: false,
        });
        assert_eq!(v["type"], "component_found");
        assert_eq!(v["members"][0], "a");

        let v = app_event_to_json(&AppEvent::Finished {
            stats: AnalyzeStats::default(),
        });
        assert_eq!(v["type"], "finished");
        assert_eq!(v["stats"]["components"], 0);
    }

    #[tokio::test]
    async fn spawn_ndjson_printer_drains_and_exits() {
        let (tx, rx) = mpsc::channel::<AppEvent>(8);
        let handle = spawn_ndjson_printer(rx);

        tx.send(AppEvent::PhaseStarted {
            name: "x".to_string(),
        })
        .await
        .expect("send");
        drop(tx);

        handle.await.expect("join");
    }
}
