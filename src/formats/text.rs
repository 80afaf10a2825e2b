//! Text (table) output formatter for the findings exporter
use crate::error::ExportError;
use crate::formats::traits::OutputFormatter;
use crate::models::Finding;
use prettytable::{Cell, Row, Table};

/// Text formatter that outputs findings in a human-readable table format
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_findings(&self, findings: &[Finding]) -> Result<String, ExportError> {
        let mut table = Table::new();
        table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        // Header
        table.add_row(Row::new(vec![
            Cell::new("CHECK_ID").style_spec("c"),
            Cell::new("SEVERITY").style_spec("c"),
            Cell::new("STATUS").style_spec("c"),
            Cell::new("REGION").style_spec("c"),
            Cell::new("RESOURCE_UID").style_spec("c"),
            Cell::new("CHECK_TITLE").style_spec("c"),
        ]));

        // Data rows
        for finding in findings {
            // Findings without a metadata block still show their result columns.
            let (check_id, severity, check_title) = match &finding.metadata {
                Some(metadata) => (
                    metadata.check_id.as_str(),
                    metadata.severity.as_str(),
                    metadata.check_title.as_str(),
                ),
                None => ("", "", ""),
            };

            table.add_row(Row::new(vec![
                Cell::new(check_id),
                Cell::new(severity),
                Cell::new(finding.status.as_str()),
                Cell::new(&finding.region),
                Cell::new(&finding.resource_uid),
                Cell::new(check_title),
            ]));
        }

        Ok(table.to_string())
    }
}
