//! Markdown export implementation.
//!
//! Exports connectivity analysis results in Markdown format for documentation and reporting.
//! One report title is followed by a section per analyzed graph.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl MarkdownExporter {
    fn write_graph<W: Write>(data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "## {}", data.name)?;
        writeln!(writer)?;

        // Summary table
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Vertices | {} |", data.vertex_count)?;
        writeln!(writer, "| Edges | {} |", data.edge_count)?;
        writeln!(writer, "| Connected Components | {} |", data.component_count)?;
        writeln!(writer, "| Bridges | {} |", data.bridges.len())?;
        writeln!(
            writer,
            "| Articulation Points | {} |",
            data.articulation_points.len()
        )?;
        writeln!(writer)?;

        // Bridges
        writeln!(writer, "### Bridges")?;
        writeln!(writer)?;
        if data.bridges.is_empty() {
            writeln!(writer, "_No bridges: every edge lies on a cycle._")?;
        } else {
            for label in data.bridge_labels() {
                writeln!(writer, "- `{}`", label)?;
            }
        }
        writeln!(writer)?;

        // Articulation points
        writeln!(writer, "### Articulation Points")?;
        writeln!(writer)?;
        if data.articulation_points.is_empty() {
            writeln!(writer, "_No articulation points._")?;
        } else {
            let points: Vec<String> = data
                .articulation_points
                .iter()
                .map(|v| format!("`{}`", v))
                .collect();
            writeln!(writer, "{}", points.join(", "))?;
        }

        Ok(())
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, reports: &[ExportData], writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# Connectivity Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Graphs analyzed:** {}", reports.len())?;

        for data in reports {
            writeln!(writer)?;
            Self::write_graph(data, writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{path_data, reference_data};

    fn export_string(reports: &[ExportData]) -> String {
        let mut output = Vec::new();
        MarkdownExporter.export(reports, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_markdown_export_header() {
        let md = export_string(&[reference_data()]);

        assert!(md.starts_with("# Connectivity Report"));
        assert!(md.contains("**Graphs analyzed:** 1"));
        assert!(md.contains("## reference"));
        assert!(md.contains("| Vertices | 5 |"));
        assert!(md.contains("| Connected Components | 1 |"));
    }

    #[test]
    fn test_markdown_export_results() {
        let md = export_string(&[reference_data()]);

        assert!(md.contains("- `3-4`"));
        assert!(md.contains("- `1-3`"));
        assert!(md.contains("`1`, `3`"));
    }

    #[test]
    fn test_markdown_export_several_graphs_one_title() {
        let md = export_string(&[reference_data(), path_data()]);

        assert_eq!(md.matches("# Connectivity Report").count(), 1);
        assert!(md.contains("**Graphs analyzed:** 2"));
        let first = md.find("## reference").unwrap();
        let second = md.find("## path").unwrap();
        assert!(first < second);
        assert!(md[second..].contains("- `0-1`"));
    }

    #[test]
    fn test_markdown_export_empty_results() {
        let mut data = reference_data();
        data.bridges.clear();
        data.articulation_points.clear();

        let md = export_string(&[data]);
        assert!(md.contains("_No bridges"));
        assert!(md.contains("_No articulation points._"));
    }
}
