use crate::domain::ports::ManifestSource;
use crate::domain::PackageRecord;
use crate::utils::error::Result;
use std::io::Read;
use std::path::PathBuf;

/// Headered CSV manifest: `id,width,height,length,weight[,carrier]`.
#[derive(Debug, Clone)]
pub struct CsvManifest {
    path: PathBuf,
}

impl CsvManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn parse<R: Read>(reader: R) -> Result<Vec<PackageRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize() {
            let record: PackageRecord = row?;
            records.push(record);
        }
        Ok(records)
    }
}

impl ManifestSource for CsvManifest {
    fn read_packages(&self) -> Result<Vec<PackageRecord>> {
        tracing::debug!("Opening manifest: {}", self.path.display());
        let file = std::fs::File::open(&self.path)?;
        Self::parse(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BillingError;

    #[test]
    fn test_parse_with_and_without_carrier() {
        let data = "id,width,height,length,weight,carrier\n\
                    PKG-1, 9, 7, 15, 6, fedex\n\
                    PKG-2,1,1,1,150,\n";

        let records = CsvManifest::parse(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "PKG-1");
        assert_eq!(records[0].width, 9);
        assert_eq!(records[0].carrier.as_deref(), Some("fedex"));
        assert_eq!(records[1].carrier, None);
    }

    #[test]
    fn test_parse_without_carrier_column() {
        let data = "id,width,height,length,weight\nA,5,1,83,1\n";
        let records = CsvManifest::parse(data.as_bytes()).unwrap();
        assert_eq!(records[0].length, 83);
        assert_eq!(records[0].carrier, None);
    }

    #[test]
    fn test_negative_values_are_read_not_rejected() {
        let data = "id,width,height,length,weight\nA,-1,7,15,6\n";
        let records = CsvManifest::parse(data.as_bytes()).unwrap();
        assert_eq!(records[0].width, -1);
    }

    #[test]
    fn test_non_numeric_dimension_is_csv_error() {
        let data = "id,width,height,length,weight\nA,wide,7,15,6\n";
        let err = CsvManifest::parse(data.as_bytes()).unwrap_err();
        assert!(matches!(err, BillingError::CsvError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let manifest = CsvManifest::new("/nonexistent/manifest.csv");
        assert!(matches!(manifest.read_packages(), Err(BillingError::IoError(_))));
    }
}
