use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;

/// Export targets offered on the compliance dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
    Excel,
}

impl ExportFormat {
    pub fn parse_format(s: &str) -> Result<Self, AppError> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            "excel" => Ok(ExportFormat::Excel),
            other => Err(AppError::bad_request(format!("Unsupported export format: {other}"))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

/// A requested export of the current compliance view. Nothing is written;
/// the job only names what would be exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportJob {
    pub format: ExportFormat,
    pub record_ids: Vec<String>,
}

impl ExportJob {
    pub fn summary(&self) -> String {
        format!("Exporting {} logs as {}.", self.record_ids.len(), self.format)
    }
}

/// Outcome of running a compliance search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub matched: usize,
    pub total: usize,
}

impl SearchSummary {
    pub fn message(&self) -> String {
        format!("Found {} logs matching your criteria.", self.matched)
    }
}
