pub mod batch;
pub mod calculator;

pub use crate::domain::ports::{ManifestSource, ReportSink};
pub use crate::utils::error::Result;
pub use batch::{BatchBilling, BatchSettings};
pub use calculator::BillableWeightCalculator;
