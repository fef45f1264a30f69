use std::fmt;
use thiserror::Error;

/// Field of a package that a bound applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageField {
    Width,
    Height,
    Length,
    Weight,
}

impl PackageField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageField::Width => "width",
            PackageField::Height => "height",
            PackageField::Length => "length",
            PackageField::Weight => "weight",
        }
    }
}

impl fmt::Display for PackageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("invalid package {field}: {value} is outside 1..={max}")]
    InvalidArgument {
        field: PackageField,
        value: i64,
        max: u32,
    },

    #[error("Unknown carrier: {name}")]
    UnknownCarrier { name: String },

    #[error("Row {id} rejected: {source}")]
    RowRejected {
        id: String,
        #[source]
        source: Box<BillingError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failure of this severity.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl BillingError {
    pub fn invalid_argument(field: PackageField, value: i64, max: u32) -> Self {
        BillingError::InvalidArgument { field, value, max }
    }

    /// The package field a validation failure refers to, if any.
    pub fn field(&self) -> Option<PackageField> {
        match self {
            BillingError::InvalidArgument { field, .. } => Some(*field),
            BillingError::RowRejected { source, .. } => source.field(),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            BillingError::InvalidArgument { .. }
            | BillingError::UnknownCarrier { .. }
            | BillingError::RowRejected { .. } => ErrorCategory::Validation,
            BillingError::ConfigError { .. }
            | BillingError::InvalidConfigValueError { .. }
            | BillingError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BillingError::IoError(_) => ErrorCategory::Io,
            BillingError::CsvError(_) | BillingError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Data => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BillingError::InvalidArgument { field, max, .. } => {
                format!("Measure the package {} again; it must be between 1 and {}", field, max)
            }
            BillingError::UnknownCarrier { .. } => {
                "Use one of the supported carriers: fedex, ups, usps".to_string()
            }
            BillingError::RowRejected { .. } => {
                "Fix the manifest row or set billing.on_invalid = \"skip\"".to_string()
            }
            BillingError::IoError(_) => "Check that the file exists and is readable".to_string(),
            BillingError::CsvError(_) => {
                "Check the manifest header: id,width,height,length,weight[,carrier]".to_string()
            }
            BillingError::SerializationError(_) => "Check the report output format".to_string(),
            BillingError::ConfigError { .. }
            | BillingError::InvalidConfigValueError { .. }
            | BillingError::MissingConfigError { .. } => {
                "Review the TOML configuration file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("Package rejected: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Data => format!("Could not process data: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BillingError>;
