use crate::infrastructure::schema_validator::{validate_all_edges, validate_graph_document};
use crate::infrastructure::serde_json_adapter::GraphFileDto;
use anyhow::{anyhow, Result};
use std::collections::BTreeMap;

pub fn validate_graph_file(dto: &GraphFileDto) -> Result<()> {
    // First, validate against JSON schemas
    let value = serde_json::to_value(dto)?;
    validate_graph_document(&value)?;
    validate_all_edges(&value)?;

    // Explicit vertex list: no blanks, no repeats.
    let mut first_seen: BTreeMap<&str, usize> = BTreeMap::new();
    for (i, name) in dto.vertices.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(anyhow!("blank vertex name at vertices[{i}]"));
        }
        if let Some(prev) = first_seen.insert(name.as_str(), i) {
            return Err(anyhow!(
                "vertex listed twice: {name} (at vertices[{prev}] and vertices[{i}])"
            ));
        }
    }

    for (i, edge) in dto.edges.iter().enumerate() {
        if edge.from.trim().is_empty() || edge.to.trim().is_empty() {
            return Err(anyhow!("blank endpoint at edges[{i}]"));
        }
    }

    Ok(())
}
