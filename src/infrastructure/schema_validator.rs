use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static GRAPH_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/graph_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid graph schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile graph schema")
});

static EDGE_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/edge_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid edge schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile edge schema")
});

/// Validate a whole graph document against the graph schema
pub fn validate_graph_document(graph: &Value) -> Result<()> {
    match GRAPH_SCHEMA.validate(graph) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Graph file validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

/// Validate a single edge object
pub fn validate_edge_item(edge: &Value) -> Result<()> {
    match EDGE_SCHEMA.validate(edge) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Edge item validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

/// Validate every entry of the `edges` array, reporting the first bad index
pub fn validate_all_edges(graph: &Value) -> Result<()> {
    if let Some(edges) = graph.get("edges").and_then(|e| e.as_array()) {
        for (i, edge) in edges.iter().enumerate() {
            validate_edge_item(edge).map_err(|e| anyhow!("edges[{i}]: {e}"))?;
        }
    }
    Ok(())
}
