//! CSV export implementation.
//!
//! Exports connectivity analysis results in CSV format for spreadsheet use.
//! A single header is followed by one row per finding, tagged with the graph
//! it belongs to: `name,bridge,u-v` or `name,articulation_point,v`.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, reports: &[ExportData], writer: &mut W) -> io::Result<()> {
        // Write header
        writeln!(writer, "graph,kind,value")?;

        for data in reports {
            let name = Self::escape_field(&data.name);

            for label in data.bridge_labels() {
                writeln!(writer, "{},bridge,{}", name, label)?;
            }

            for vertex in &data.articulation_points {
                writeln!(writer, "{},articulation_point,{}", name, vertex)?;
            }
        }

        Ok(())
    }
}
