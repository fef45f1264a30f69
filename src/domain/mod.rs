// Domain layer: value objects, carrier divisors, batch records and ports. No I/O here.

pub mod divisor;
pub mod model;
pub mod ports;
pub mod records;

pub use divisor::DimDivisor;
pub use model::{PackageDimensions, PackageLimits, Weight};
pub use records::{
    BillableWeight, BillingLine, BillingReport, InvalidRowPolicy, PackageRecord, RejectedRow,
    ReportFormat,
};
