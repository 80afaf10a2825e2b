//! Output format traits for the findings exporter
use crate::error::ExportError;
use crate::formats::csv::{transform, write_batch, WriteOptions};
use crate::models::Finding;
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    fn format_findings(&self, findings: &[Finding]) -> Result<String, ExportError>;
}

/// Enum for output format types
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Csv,
    Json,
    Jsonl,
    Text,
}

/// Enum for output destination
#[derive(Debug, Clone)]
pub enum OutputDestination {
    Stdout,
    File(std::path::PathBuf),
}

/// Output writer that combines format and destination
pub struct OutputWriter {
    format: OutputFormat,
    formatter: Box<dyn OutputFormatter>,
    destination: OutputDestination,
    from_cli: bool,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, destination: OutputDestination, from_cli: bool) -> Self {
        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Csv => Box::new(crate::formats::csv::CsvFormatter),
            OutputFormat::Json => Box::new(crate::formats::json::JsonFormatter),
            OutputFormat::Jsonl => Box::new(crate::formats::jsonl::JsonlFormatter),
            OutputFormat::Text => Box::new(crate::formats::text::TextFormatter),
        };

        Self {
            format,
            formatter,
            destination,
            from_cli,
        }
    }

    /// Write findings to the configured destination
    pub fn write_findings(&self, findings: &[Finding]) -> Result<(), ExportError> {
        // CSV files grow across runs; route them through the append
        // pipeline instead of whole-file rendering.
        if let (OutputFormat::Csv, OutputDestination::File(path)) =
            (&self.format, &self.destination)
        {
            return self.append_csv(findings, path);
        }

        let content = self.formatter.format_findings(findings)?;

        match &self.destination {
            OutputDestination::Stdout => {
                println!("{}", content);
            }
            OutputDestination::File(path) => {
                std::fs::write(path, content)?;
            }
        }

        Ok(())
    }

    /// Append findings to a CSV file, keeping a single header per file.
    fn append_csv(&self, findings: &[Finding], path: &Path) -> Result<(), ExportError> {
        let mut handle = Some(open_for_append(path)?);
        let mut buffer = Vec::new();

        let transformed = transform(findings, &mut buffer);
        debug!("csv transform: {:?}", transformed);

        let written = write_batch(
            &mut handle,
            &buffer,
            WriteOptions {
                close_file: false,
                from_cli: self.from_cli,
            },
        );
        debug!("csv write: {:?}", written);

        Ok(())
    }
}

/// Open an output file for appending, positioned at its end.
///
/// The explicit seek keeps the stream position equal to the file length,
/// which the CSV writer relies on for its header decision.
pub fn open_for_append(path: &Path) -> Result<File, ExportError> {
    let mut file = OpenOptions::new().create(true).write(true).open(path)?;
    file.seek(SeekFrom::End(0))?;
    Ok(file)
}
