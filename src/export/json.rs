//! JSON export implementation.
//!
//! Exports connectivity analysis results in JSON format for machine-readable
//! output. The document is an array with one entry per analyzed graph.

use super::{ExportData, Exporter};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Graph facts for JSON output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonGraph {
    name: String,
    vertex_count: usize,
    edge_count: usize,
    components: usize,
}

/// One graph's entry in the exported array.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport {
    graph: JsonGraph,
    bridges: Vec<String>,
    articulation_points: Vec<usize>,
}

impl From<&ExportData> for JsonReport {
    fn from(data: &ExportData) -> Self {
        Self {
            graph: JsonGraph {
                name: data.name.clone(),
                vertex_count: data.vertex_count,
                edge_count: data.edge_count,
                components: data.component_count,
            },
            bridges: data.bridge_labels(),
            articulation_points: data.articulation_points.clone(),
        }
    }
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, reports: &[ExportData], writer: &mut W) -> io::Result<()> {
        let export: Vec<JsonReport> = reports.iter().map(JsonReport::from).collect();

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
