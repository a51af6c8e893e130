use crate::domain::vertex::VertexName;
use crate::usecase::stats::AnalyzeStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        vertices: usize,
        edges: usize,
    },

    GraphReversed {
        vertices: usize,
        edges: usize,
    },

    FinishOrderComputed {
        order: Vec<VertexName>,
    },

    SccComputed {
        vertices: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
    },

    ComponentFound {
        index: usize,
        members: Vec<VertexName>,
        cyclic: bool,
    },

    Finished {
        stats: AnalyzeStats,
    },
}
