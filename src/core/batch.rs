use crate::core::calculator::BillableWeightCalculator;
use crate::domain::ports::{ManifestSource, ReportSink};
use crate::domain::{
    BillingLine, BillingReport, DimDivisor, InvalidRowPolicy, PackageDimensions, PackageLimits,
    PackageRecord, ReportFormat, Weight,
};
use crate::utils::error::{BillingError, Result};

/// Settings a batch run needs, independent of where they came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSettings {
    pub limits: PackageLimits,
    pub default_carrier: DimDivisor,
    pub on_invalid: InvalidRowPolicy,
    pub format: ReportFormat,
}

pub struct BatchBilling<M: ManifestSource, R: ReportSink> {
    source: M,
    sink: R,
    settings: BatchSettings,
    calculator: BillableWeightCalculator,
}

impl<M: ManifestSource, R: ReportSink> BatchBilling<M, R> {
    pub fn new(source: M, sink: R, settings: BatchSettings) -> Self {
        Self {
            source,
            sink,
            settings,
            calculator: BillableWeightCalculator::new(),
        }
    }

    /// Bills every manifest row and writes the report. Returns the report and where it went.
    pub fn run(&self) -> Result<(BillingReport, String)> {
        tracing::info!("Reading package manifest");
        let records = self.source.read_packages()?;
        tracing::info!("Read {} packages", records.len());

        let report = self.bill(&records)?;
        tracing::info!(
            "Billed {} packages, rejected {}, total billable weight {} lb",
            report.lines.len(),
            report.rejected.len(),
            report.total_billable_weight
        );

        let destination = self.sink.write_report(&report, self.settings.format)?;
        tracing::info!("Report written to: {}", destination);

        Ok((report, destination))
    }

    pub fn bill(&self, records: &[PackageRecord]) -> Result<BillingReport> {
        let mut report = BillingReport::default();

        for record in records {
            match self.bill_record(record) {
                Ok(line) => report.push_line(line),
                Err(e) => match self.settings.on_invalid {
                    InvalidRowPolicy::Skip => {
                        tracing::warn!("Skipping package {}: {}", record.id, e);
                        report.push_rejected(record.id.clone(), e.to_string());
                    }
                    InvalidRowPolicy::Fail => {
                        return Err(BillingError::RowRejected {
                            id: record.id.clone(),
                            source: Box::new(e),
                        });
                    }
                },
            }
        }

        Ok(report)
    }

    pub fn bill_record(&self, record: &PackageRecord) -> Result<BillingLine> {
        let carrier = match record.carrier.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.parse::<DimDivisor>()?,
            _ => self.settings.default_carrier,
        };

        let limits = &self.settings.limits;
        let dimensions =
            PackageDimensions::with_limits(record.width, record.height, record.length, limits)?;
        let weight = Weight::with_limits(record.weight, limits)?;
        let quote = self.calculator.quote(&dimensions, &weight, carrier);

        Ok(BillingLine {
            id: record.id.clone(),
            carrier,
            divisor: carrier.value(),
            actual_weight: quote.actual_weight,
            dimensional_weight: quote.dimensional_weight,
            billable_weight: quote.billable_weight,
        })
    }
}
