//! Export functionality for connectivity analysis results.
//!
//! This module provides exporters for outputting analysis results in
//! various formats: JSON, CSV, and Markdown. Every exporter writes one
//! document covering all analyzed graphs, so a directory run yields a
//! single parseable file. Bridges are always rendered as `"u-v"` strings in
//! the order the analysis produced them; articulation points as ascending
//! vertex indices.

pub mod csv;
pub mod json;
pub mod markdown;

use crate::analysis::ConnectivityReport;
use crate::graph::{Edge, UndirectedGraph};
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - spreadsheet-friendly
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Data container for export operations.
///
/// Holds one graph's analysis results together with basic graph facts.
#[derive(Debug, Clone)]
pub struct ExportData {
    /// Graph name, usually the input file name
    pub name: String,
    /// Number of vertices
    pub vertex_count: usize,
    /// Number of edges
    pub edge_count: usize,
    /// Number of connected components
    pub component_count: usize,
    /// Bridges in the order found
    pub bridges: Vec<Edge>,
    /// Articulation points in ascending order
    pub articulation_points: Vec<usize>,
}

impl ExportData {
    /// Create new export data from analysis results.
    pub fn new(name: impl Into<String>, graph: &UndirectedGraph, report: ConnectivityReport) -> Self {
        Self {
            name: name.into(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            component_count: report.component_count,
            bridges: report.bridges,
            articulation_points: report.articulation_points,
        }
    }

    /// Bridges rendered as `"u-v"` identifiers.
    pub fn bridge_labels(&self) -> Vec<String> {
        self.bridges.iter().map(Edge::to_string).collect()
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the reports of one run, in order, as a single document.
    fn export<W: Write>(&self, reports: &[ExportData], writer: &mut W) -> io::Result<()>;
}

/// Export reports in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    reports: &[ExportData],
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(reports, writer),
        ExportFormat::Csv => csv::CsvExporter.export(reports, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(reports, writer),
    }
}

/// Export reports to a string.
pub fn export_to_string(format: ExportFormat, reports: &[ExportData]) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, reports, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
pub(crate) fn reference_data() -> ExportData {
    let graph =
        UndirectedGraph::new(5, vec![(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)]).expect("valid graph");
    let report = crate::analysis::analyze(&graph).expect("analysis succeeds");
    ExportData::new("reference", &graph, report)
}

#[cfg(test)]
pub(crate) fn path_data() -> ExportData {
    let graph = UndirectedGraph::new(3, vec![(0, 1), (1, 2)]).expect("valid graph");
    let report = crate::analysis::analyze(&graph).expect("analysis succeeds");
    ExportData::new("path", &graph, report)
}
