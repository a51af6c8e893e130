use crate::domain::vertex::VertexName;
use crate::usecase::analyze::SccReport;
use crate::usecase::stats::AnalyzeStats;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// On-disk graph description.
///
/// Listed vertices are registered first, in order, then edges are added in
/// order; that sequence fixes the graph's insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GraphFileDto {
    #[serde(default)]
    pub vertices: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EdgeDto {
    pub from: String,
    pub to: String,
}

impl EdgeDto {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentDto {
    pub members: Vec<VertexName>,
    pub cyclic: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SccReportDto {
    pub original: Vec<String>,
    pub reversed: Vec<String>,
    pub finish_order: Vec<VertexName>,
    pub components: Vec<ComponentDto>,
    pub stats: AnalyzeStats,
}

impl SccReportDto {
    pub fn from_report(report: &SccReport, stats: &AnalyzeStats) -> Self {
        let components = report
            .result
            .components
            .iter()
            .zip(report.result.cyclic_component.iter())
            .map(|(members, &cyclic)| ComponentDto {
                members: members.clone(),
                cyclic,
            })
            .collect();

        Self {
            original: report.original_adjacency.clone(),
            reversed: report.reversed_adjacency.clone(),
            finish_order: report.finish_order.clone(),
            components,
            stats: stats.clone(),
        }
    }
}

pub async fn read_graph_file(path: &str) -> Result<GraphFileDto> {
    let raw = fs::read_to_string(path).await?;
    let dto: GraphFileDto = serde_json::from_str(&raw)?;
    Ok(dto)
}

pub async fn write_graph_file(path: &str, dto: &GraphFileDto) -> Result<()> {
    let pretty = serde_json::to_string_pretty(dto)?;
    fs::write(path, pretty).await?;
    Ok(())
}

pub async fn write_report_file(path: &str, dto: &SccReportDto) -> Result<()> {
    let pretty = serde_json::to_string_pretty(dto)?;
    fs::write(path, pretty).await?;
    Ok(())
}
