//! JSONL (JSON Lines) output formatter for the findings exporter
use crate::error::ExportError;
use crate::formats::traits::OutputFormatter;
use crate::models::Finding;
use serde_json;

/// JSONL formatter that outputs findings as JSON objects, one per line
pub struct JsonlFormatter;

impl OutputFormatter for JsonlFormatter {
    fn format_findings(&self, findings: &[Finding]) -> Result<String, ExportError> {
        let mut output = String::new();

        for finding in findings {
            let line = serde_json::to_string(finding)?;
            output.push_str(&line);
            output.push('\n');
        }

        Ok(output)
    }
}
