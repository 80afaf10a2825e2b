//! JSON output formatter for the findings exporter
use crate::error::ExportError;
use crate::formats::traits::OutputFormatter;
use crate::models::Finding;
use serde_json;

#[derive(serde::Serialize)]
struct OutputWrapper {
    tool: String,
    timestamp: String,
    count: usize,
    findings: Vec<Finding>,
}

/// JSON formatter that outputs findings in JSON format with run metadata
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_findings(&self, findings: &[Finding]) -> Result<String, ExportError> {
        let wrapper = OutputWrapper {
            tool: "cloudaudit".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            count: findings.len(),
            findings: findings.to_vec(),
        };

        let json = serde_json::to_string_pretty(&wrapper)?;
        Ok(json)
    }
}
