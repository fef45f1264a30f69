// Adapters layer: file-backed implementations of the domain ports.

pub mod manifest;
pub mod report;

pub use manifest::CsvManifest;
pub use report::FileReportSink;
