//! Finding data model consumed by the output formatters
use crate::error::ExportError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Result of one evaluated check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
    Manual,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
            Status::Manual => "MANUAL",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity assigned by the check definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Informational,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Informational => "informational",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Remediation guidance text attached to a check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub url: String,
}

/// Remediation code snippets, one per tooling flavour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemediationCode {
    #[serde(default)]
    pub native_iac: String,
    #[serde(default)]
    pub terraform: String,
    #[serde(default)]
    pub cli: String,
    #[serde(default)]
    pub other: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Remediation {
    #[serde(default)]
    pub recommendation: Recommendation,
    #[serde(default)]
    pub code: RemediationCode,
}

/// Static metadata describing the check that produced a finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckMetadata {
    pub provider: String,
    pub check_id: String,
    pub check_title: String,
    #[serde(default)]
    pub check_type: Vec<String>,
    pub service_name: String,
    #[serde(default)]
    pub sub_service_name: String,
    pub severity: Severity,
    pub resource_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub risk: String,
    #[serde(default)]
    pub related_url: String,
    #[serde(default)]
    pub remediation: Remediation,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub related_to: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub additional_urls: Vec<String>,
}

/// One evaluated security check result for one resource.
///
/// Produced upstream by a scan run and consumed read-only here. The
/// metadata block is optional at the type level because findings files
/// are external input; a validated finding always carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub auth_method: String,
    pub timestamp: DateTime<Utc>,
    pub account_uid: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub account_email: Option<String>,
    #[serde(default)]
    pub account_organization_uid: Option<String>,
    #[serde(default)]
    pub account_organization_name: Option<String>,
    #[serde(default)]
    pub account_tags: BTreeMap<String, String>,
    pub uid: String,
    pub status: Status,
    #[serde(default)]
    pub status_extended: String,
    #[serde(default)]
    pub muted: bool,
    pub region: String,
    #[serde(default)]
    pub partition: String,
    pub resource_uid: String,
    #[serde(default)]
    pub resource_name: String,
    #[serde(default)]
    pub resource_details: String,
    #[serde(default)]
    pub resource_tags: BTreeMap<String, String>,
    // Keyed by framework name, values are requirement ids.
    #[serde(default)]
    pub compliance: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub scanner_version: String,
    #[serde(default)]
    pub metadata: Option<CheckMetadata>,
}

/// Load a findings file (JSON array) produced by a scan run.
pub fn load_findings(path: &Path) -> Result<Vec<Finding>, ExportError> {
    let content = std::fs::read_to_string(path)?;
    let findings: Vec<Finding> = serde_json::from_str(&content)?;
    Ok(findings)
}
