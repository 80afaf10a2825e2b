//! Command-line argument parsing for the findings exporter
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "cloudaudit")]
#[command(about = "Cloud Security Findings Exporter", long_about = None)]
pub struct Cli {
    /// Path to findings file (JSON array produced by a scan run)
    #[arg(value_name = "FINDINGS_FILE")]
    pub findings_file: std::path::PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<std::path::PathBuf>,

    /// Filter by check id (regex)
    #[arg(long)]
    pub check: Option<String>,

    /// Filter by finding status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Filter by severity
    #[arg(long, value_enum)]
    pub severity: Option<SeverityArg>,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Enable verbose output (warnings, status messages)
    #[arg(short, long)]
    pub verbose: bool,

    /// List available output formats
    #[arg(short, long)]
    pub list_formats: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
    Jsonl,
    Text,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Pass,
    Fail,
    Manual,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    Critical,
    High,
    Medium,
    Low,
    Informational,
}
