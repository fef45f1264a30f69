use crate::domain::records::{BillingReport, PackageRecord, ReportFormat};
use crate::utils::error::Result;

/// Where batch input comes from.
pub trait ManifestSource {
    fn read_packages(&self) -> Result<Vec<PackageRecord>>;
}

/// Where a finished report goes. Returns a description of the destination, usually a path.
pub trait ReportSink {
    fn write_report(&self, report: &BillingReport, format: ReportFormat) -> Result<String>;
}
