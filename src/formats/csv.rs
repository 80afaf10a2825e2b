//! CSV output formatter for the findings exporter
use crate::error::ExportError;
use crate::formats::traits::OutputFormatter;
use crate::formats::utils::{unroll_dict, unroll_dict_list, unroll_list};
use crate::models::Finding;
use csv::WriterBuilder;
use log::error;
use std::collections::BTreeMap;
use std::io::{Cursor, Seek, Write};

/// Column names, in output order.
pub const CSV_COLUMNS: [&str; 42] = [
    "AUTH_METHOD",
    "TIMESTAMP",
    "ACCOUNT_UID",
    "ACCOUNT_NAME",
    "ACCOUNT_EMAIL",
    "ACCOUNT_ORGANIZATION_UID",
    "ACCOUNT_ORGANIZATION_NAME",
    "ACCOUNT_TAGS",
    "FINDING_UID",
    "PROVIDER",
    "CHECK_ID",
    "CHECK_TITLE",
    "CHECK_TYPE",
    "STATUS",
    "STATUS_EXTENDED",
    "MUTED",
    "SERVICE_NAME",
    "SUBSERVICE_NAME",
    "SEVERITY",
    "RESOURCE_TYPE",
    "RESOURCE_UID",
    "RESOURCE_NAME",
    "RESOURCE_DETAILS",
    "RESOURCE_TAGS",
    "PARTITION",
    "REGION",
    "DESCRIPTION",
    "RISK",
    "RELATED_URL",
    "REMEDIATION_RECOMMENDATION_TEXT",
    "REMEDIATION_RECOMMENDATION_URL",
    "REMEDIATION_CODE_NATIVEIAC",
    "REMEDIATION_CODE_TERRAFORM",
    "REMEDIATION_CODE_CLI",
    "REMEDIATION_CODE_OTHER",
    "COMPLIANCE",
    "CATEGORIES",
    "DEPENDS_ON",
    "RELATED_TO",
    "NOTES",
    "SCANNER_VERSION",
    "ADDITIONAL_URLS",
];

/// A finding field value on its way into a CSV cell.
#[derive(Debug, Clone)]
pub enum CsvValue {
    Absent,
    Text(String),
    Bool(bool),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl From<&str> for CsvValue {
    fn from(value: &str) -> Self {
        CsvValue::Text(value.to_string())
    }
}

impl From<String> for CsvValue {
    fn from(value: String) -> Self {
        CsvValue::Text(value)
    }
}

impl From<&String> for CsvValue {
    fn from(value: &String) -> Self {
        CsvValue::Text(value.clone())
    }
}

impl From<bool> for CsvValue {
    fn from(value: bool) -> Self {
        CsvValue::Bool(value)
    }
}

impl From<Vec<String>> for CsvValue {
    fn from(value: Vec<String>) -> Self {
        CsvValue::List(value)
    }
}

impl From<&BTreeMap<String, String>> for CsvValue {
    fn from(value: &BTreeMap<String, String>) -> Self {
        CsvValue::Map(value.clone())
    }
}

impl<T: Into<CsvValue>> From<Option<T>> for CsvValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => CsvValue::Absent,
        }
    }
}

/// Normalize any field value into a single-line printable string.
///
/// Absent values become the empty string. Lists and maps go through
/// their debug representation rather than a structured re-encoding.
/// Line breaks and tabs are replaced with spaces, then the result is
/// trimmed.
pub fn sanitize_csv_value(value: impl Into<CsvValue>) -> String {
    let text = match value.into() {
        CsvValue::Absent => return String::new(),
        CsvValue::Text(text) => text,
        CsvValue::Bool(flag) => flag.to_string(),
        CsvValue::List(items) => format!("{:?}", items),
        CsvValue::Map(map) => format!("{:?}", map),
    };
    text.replace("\r\n", " ")
        .replace('\n', " ")
        .replace('\r', " ")
        .replace('\t', " ")
        .trim()
        .to_string()
}

/// The flattened, sanitized representation of one finding.
#[derive(Debug, Clone)]
pub struct CsvRow {
    values: Vec<String>,
}

impl CsvRow {
    /// Column names backing this row, in value order.
    pub fn columns(&self) -> &'static [&'static str] {
        &CSV_COLUMNS
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Look up a cell by column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        CSV_COLUMNS
            .iter()
            .position(|name| *name == column)
            .map(|index| self.values[index].as_str())
    }

    fn from_finding(finding: &Finding) -> Result<CsvRow, ExportError> {
        let metadata = finding
            .metadata
            .as_ref()
            .ok_or_else(|| ExportError::MissingMetadata(finding.uid.clone()))?;
        let remediation = &metadata.remediation;

        // Values are pushed in CSV_COLUMNS order.
        let values = vec![
            sanitize_csv_value(&finding.auth_method),
            sanitize_csv_value(finding.timestamp.to_rfc3339()),
            sanitize_csv_value(&finding.account_uid),
            sanitize_csv_value(&finding.account_name),
            sanitize_csv_value(finding.account_email.as_deref()),
            sanitize_csv_value(finding.account_organization_uid.as_deref()),
            sanitize_csv_value(finding.account_organization_name.as_deref()),
            sanitize_csv_value(unroll_dict(&finding.account_tags, ":")),
            sanitize_csv_value(&finding.uid),
            sanitize_csv_value(&metadata.provider),
            sanitize_csv_value(&metadata.check_id),
            sanitize_csv_value(&metadata.check_title),
            sanitize_csv_value(unroll_list(&metadata.check_type)),
            sanitize_csv_value(finding.status.as_str()),
            sanitize_csv_value(&finding.status_extended),
            sanitize_csv_value(finding.muted),
            sanitize_csv_value(&metadata.service_name),
            sanitize_csv_value(&metadata.sub_service_name),
            sanitize_csv_value(metadata.severity.as_str()),
            sanitize_csv_value(&metadata.resource_type),
            sanitize_csv_value(&finding.resource_uid),
            sanitize_csv_value(&finding.resource_name),
            sanitize_csv_value(&finding.resource_details),
            sanitize_csv_value(unroll_dict(&finding.resource_tags, "=")),
            sanitize_csv_value(&finding.partition),
            sanitize_csv_value(&finding.region),
            sanitize_csv_value(&metadata.description),
            sanitize_csv_value(&metadata.risk),
            sanitize_csv_value(&metadata.related_url),
            sanitize_csv_value(&remediation.recommendation.text),
            sanitize_csv_value(&remediation.recommendation.url),
            sanitize_csv_value(&remediation.code.native_iac),
            sanitize_csv_value(&remediation.code.terraform),
            sanitize_csv_value(&remediation.code.cli),
            sanitize_csv_value(&remediation.code.other),
            sanitize_csv_value(unroll_dict_list(&finding.compliance, ": ")),
            sanitize_csv_value(unroll_list(&metadata.categories)),
            sanitize_csv_value(unroll_list(&metadata.depends_on)),
            sanitize_csv_value(unroll_list(&metadata.related_to)),
            sanitize_csv_value(&metadata.notes),
            sanitize_csv_value(&finding.scanner_version),
            sanitize_csv_value(unroll_list(&metadata.additional_urls)),
        ];

        Ok(CsvRow { values })
    }
}

/// Outcome of one transform call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStatus {
    /// Every finding in the batch produced a row.
    Completed { appended: usize },
    /// A fault was logged and the remaining batch skipped; rows appended
    /// before the fault stay in the buffer.
    Aborted { appended: usize },
}

/// Outcome of one write call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written { rows: usize, header: bool },
    /// Nothing to do: handle absent or buffer empty.
    Skipped,
    /// A fault was logged; bytes already written stay written and the
    /// handle is left open.
    Failed,
}

/// Close-on-finish intent for `write_batch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    pub close_file: bool,
    pub from_cli: bool,
}

/// Append one row per finding, in input order, to `buffer`.
///
/// Best-effort: the first fault is logged and aborts the remaining
/// batch. Nothing propagates; the returned status carries the number of
/// rows this call appended.
pub fn transform(findings: &[Finding], buffer: &mut Vec<CsvRow>) -> TransformStatus {
    for (index, finding) in findings.iter().enumerate() {
        match CsvRow::from_finding(finding) {
            Ok(row) => buffer.push(row),
            Err(err) => {
                error!("{}", err);
                return TransformStatus::Aborted { appended: index };
            }
        }
    }
    TransformStatus::Completed {
        appended: findings.len(),
    }
}

/// Write every buffered row to `output` as semicolon-delimited CSV.
///
/// A header row is emitted only when the handle's stream position is
/// exactly zero, so repeated appends to a growing file emit it once.
/// The buffer is not cleared; clearing between flushes is the caller's
/// job. With `close_file` or `from_cli` set, a successful write drops
/// the handle.
pub fn write_batch<W: Write + Seek>(
    output: &mut Option<W>,
    buffer: &[CsvRow],
    options: WriteOptions,
) -> WriteStatus {
    let handle = match output.as_mut() {
        Some(handle) => handle,
        None => return WriteStatus::Skipped,
    };
    if buffer.is_empty() {
        return WriteStatus::Skipped;
    }
    match write_rows(handle, buffer) {
        Ok(header) => {
            if options.close_file || options.from_cli {
                *output = None;
            }
            WriteStatus::Written {
                rows: buffer.len(),
                header,
            }
        }
        Err(err) => {
            error!("{}", err);
            WriteStatus::Failed
        }
    }
}

fn write_rows<W: Write + Seek>(handle: &mut W, buffer: &[CsvRow]) -> Result<bool, ExportError> {
    let position = handle.stream_position()?;
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(handle);

    // Write header
    let header = position == 0;
    if header {
        writer.write_record(buffer[0].columns())?;
    }

    // Write data rows
    for row in buffer {
        writer.write_record(row.values())?;
    }

    writer.flush()?;
    Ok(header)
}

/// CSV formatter that renders buffered rows with a leading header.
pub struct CsvFormatter;

impl OutputFormatter for CsvFormatter {
    fn format_findings(&self, findings: &[Finding]) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        transform(findings, &mut buffer);
        if buffer.is_empty() {
            return Ok(String::new());
        }

        let mut cursor = Cursor::new(Vec::new());
        write_rows(&mut cursor, &buffer)?;
        let data = cursor.into_inner();
        Ok(String::from_utf8(data)?)
    }
}
