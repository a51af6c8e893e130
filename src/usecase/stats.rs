use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeStats {
    pub vertices: usize,
    pub edges: usize,
    pub self_loops: usize,
    pub components: usize,
    pub cyclic_components: usize,
    pub largest_component: usize,
}
