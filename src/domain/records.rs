use crate::domain::divisor::DimDivisor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One manifest row, exactly as read. Nothing here has been validated yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub id: String,
    pub width: i64,
    pub height: i64,
    pub length: i64,
    pub weight: i64,
    #[serde(default)]
    pub carrier: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillableWeight {
    pub actual_weight: u32,
    pub dimensional_weight: u64,
    pub billable_weight: u64,
}

impl BillableWeight {
    /// True when the carrier bills on volume rather than scale weight.
    pub fn is_dimensional(&self) -> bool {
        self.dimensional_weight > u64::from(self.actual_weight)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingLine {
    pub id: String,
    pub carrier: DimDivisor,
    pub divisor: u32,
    pub actual_weight: u32,
    pub dimensional_weight: u64,
    pub billable_weight: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    pub id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingReport {
    pub lines: Vec<BillingLine>,
    pub rejected: Vec<RejectedRow>,
    pub total_billable_weight: u64,
}

impl BillingReport {
    pub fn push_line(&mut self, line: BillingLine) {
        self.total_billable_weight += line.billable_weight;
        self.lines.push(line);
    }

    pub fn push_rejected(&mut self, id: impl Into<String>, reason: impl Into<String>) {
        self.rejected.push(RejectedRow {
            id: id.into(),
            reason: reason.into(),
        });
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// What a batch run does with a row that fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidRowPolicy {
    #[default]
    Skip,
    Fail,
}
