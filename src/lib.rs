pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{BillingConfig, OutputFormat};

pub use adapters::{CsvManifest, FileReportSink};
pub use core::{BatchBilling, BatchSettings, BillableWeightCalculator};
pub use domain::{DimDivisor, PackageDimensions, PackageLimits, Weight};
pub use utils::error::{BillingError, Result};
