//! Main entry point for the findings exporter
use clap::Parser;

mod cli;
mod error;
mod formats;
mod models;

use cli::args::{Cli, OutputFormatArg, SeverityArg, StatusArg};
use error::ExportError;
use formats::traits::{OutputDestination, OutputFormat, OutputWriter};
use models::{load_findings, Severity, Status};

fn main() -> Result<(), ExportError> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG still wins over the flags.
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Handle --list-formats
    if cli.list_formats {
        println!("Available output formats:");
        println!("  csv - Semicolon-delimited rows, appended to the output file");
        println!("  json - Findings wrapped in a run envelope");
        println!("  jsonl - One finding object per line");
        println!("  text - Human-readable summary table");
        return Ok(());
    }

    let open_msg = format!("Loading findings file: {}", cli.findings_file.display());
    println!("{}", open_msg);

    let mut findings = load_findings(&cli.findings_file)?;
    println!("Loaded {} findings", findings.len());

    // Apply filters if provided
    if let Some(pattern) = &cli.check {
        use regex::Regex;
        let re = Regex::new(pattern).map_err(ExportError::RegexError)?;
        findings.retain(|finding| {
            finding
                .metadata
                .as_ref()
                .map_or(false, |metadata| re.is_match(&metadata.check_id))
        });
    }
    if let Some(status) = cli.status {
        let wanted = match status {
            StatusArg::Pass => Status::Pass,
            StatusArg::Fail => Status::Fail,
            StatusArg::Manual => Status::Manual,
        };
        findings.retain(|finding| finding.status == wanted);
    }
    if let Some(severity) = cli.severity {
        let wanted = match severity {
            SeverityArg::Critical => Severity::Critical,
            SeverityArg::High => Severity::High,
            SeverityArg::Medium => Severity::Medium,
            SeverityArg::Low => Severity::Low,
            SeverityArg::Informational => Severity::Informational,
        };
        findings.retain(|finding| {
            finding
                .metadata
                .as_ref()
                .map_or(false, |metadata| metadata.severity == wanted)
        });
    }

    if findings.is_empty() {
        println!("No findings found matching the specified criteria.");
        return Ok(());
    }

    // Determine output format and destination
    let output_format = match cli.format {
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Json => OutputFormat::Json,
        OutputFormatArg::Jsonl => OutputFormat::Jsonl,
        OutputFormatArg::Text => OutputFormat::Text,
    };

    let output_dest = if let Some(output_path) = &cli.output {
        OutputDestination::File(output_path.clone())
    } else {
        OutputDestination::Stdout
    };

    let output_writer = OutputWriter::new(output_format, output_dest, true);
    output_writer.write_findings(&findings)?;

    if let Some(output_path) = &cli.output {
        println!(
            "Exported {} findings to {}",
            findings.len(),
            output_path.display()
        );
    }

    Ok(())
}
