use crate::domain::ports::ReportSink;
use crate::domain::{BillingReport, ReportFormat};
use crate::utils::error::{BillingError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const REPORT_FILE_STEM: &str = "billing_report";
pub const REJECTED_FILE_NAME: &str = "billing_rejected.csv";

const REPORT_HEADER: [&str; 6] = [
    "id",
    "carrier",
    "divisor",
    "actual_weight",
    "dimensional_weight",
    "billable_weight",
];
const REJECTED_HEADER: [&str; 2] = ["id", "reason"];

/// Writes reports into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    base_path: PathBuf,
}

impl FileReportSink {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = Path::new(&self.base_path).join(name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path)
    }
}

/// Always starts with the header row, even for a report with no lines.
pub fn report_to_csv(report: &BillingReport) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(REPORT_HEADER)?;
    for line in &report.lines {
        writer.serialize(line)?;
    }
    into_bytes(writer)
}

pub fn rejected_to_csv(report: &BillingReport) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(REJECTED_HEADER)?;
    for rejected in &report.rejected {
        writer.serialize(rejected)?;
    }
    into_bytes(writer)
}

fn into_bytes(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| BillingError::IoError(e.into_error()))
}

impl ReportSink for FileReportSink {
    fn write_report(&self, report: &BillingReport, format: ReportFormat) -> Result<String> {
        let name = format!("{}.{}", REPORT_FILE_STEM, format.extension());

        let path = match format {
            ReportFormat::Csv => {
                // rewritten on every run so a previous run's rejections never linger
                self.write_file(REJECTED_FILE_NAME, &rejected_to_csv(report)?)?;
                self.write_file(&name, &report_to_csv(report)?)?
            }
            ReportFormat::Json => {
                let json = serde_json::to_string_pretty(report)?;
                self.write_file(&name, json.as_bytes())?
            }
        };

        Ok(path.display().to_string())
    }
}
