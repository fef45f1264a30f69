use crate::core::BatchSettings;
use crate::domain::{DimDivisor, InvalidRowPolicy, PackageLimits, ReportFormat};
use crate::utils::error::{BillingError, Result};
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    pub billing: BillingSection,
    pub limits: PackageLimits,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingSection {
    pub default_carrier: String,
    pub on_invalid: InvalidRowPolicy,
}

impl Default for BillingSection {
    fn default() -> Self {
        Self {
            default_carrier: DimDivisor::default().name().to_string(),
            on_invalid: InvalidRowPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub manifest: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub format: ReportFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./output".to_string(),
            format: ReportFormat::default(),
        }
    }
}

impl BillingConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BillingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BillingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BillingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn default_carrier(&self) -> Result<DimDivisor> {
        self.billing.default_carrier.parse()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("billing.default_carrier", &self.billing.default_carrier)?;
        self.default_carrier()
            .map_err(|_| BillingError::InvalidConfigValueError {
                field: "billing.default_carrier".to_string(),
                value: self.billing.default_carrier.clone(),
                reason: "Unknown carrier. Valid carriers: FEDEX, UPS, USPS".to_string(),
            })?;

        self.limits.validate()?;

        if let Some(manifest) = &self.input.manifest {
            validate_path("input.manifest", manifest)?;
            validate_file_extensions("input.manifest", std::slice::from_ref(manifest), &["csv"])?;
        }

        validate_path("output.path", &self.output.path)?;

        Ok(())
    }

    pub fn batch_settings(&self) -> Result<BatchSettings> {
        Ok(BatchSettings {
            limits: self.limits,
            default_carrier: self.default_carrier()?,
            on_invalid: self.billing.on_invalid,
            format: self.output.format,
        })
    }
}

impl Validate for BillingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[billing]
default_carrier = "usps"
on_invalid = "fail"

[limits]
max_width = 100
max_weight = 70

[input]
manifest = "packages.csv"

[output]
path = "./reports"
format = "json"
"#;

        let config = BillingConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.default_carrier().unwrap(), DimDivisor::Usps);
        assert_eq!(config.limits.max_width, 100);
        assert_eq!(config.limits.max_height, 70);
        assert_eq!(config.limits.max_weight, 70);
        assert_eq!(config.input.manifest.as_deref(), Some("packages.csv"));

        let settings = config.batch_settings().unwrap();
        assert_eq!(settings.on_invalid, InvalidRowPolicy::Fail);
        assert_eq!(settings.format, ReportFormat::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = BillingConfig::from_toml_str("").unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.limits, PackageLimits::default());
        assert_eq!(config.default_carrier().unwrap(), DimDivisor::Fedex);
        assert_eq!(config.output.path, "./output");
        assert_eq!(config.batch_settings().unwrap(), BatchSettings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BILLING_TEST_OUTPUT_DIR", "/tmp/billing-reports");

        let toml_content = r#"
[output]
path = "${BILLING_TEST_OUTPUT_DIR}"
"#;

        let config = BillingConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.path, "/tmp/billing-reports");

        std::env::remove_var("BILLING_TEST_OUTPUT_DIR");
    }

    #[test]
    fn test_rejects_unknown_carrier() {
        let config = BillingConfig::from_toml_str("[billing]\ndefault_carrier = \"dhl\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, BillingError::InvalidConfigValueError { ref field, .. } if field == "billing.default_carrier"));
    }

    #[test]
    fn test_rejects_zero_limit() {
        let config = BillingConfig::from_toml_str("[limits]\nmax_length = 0").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, BillingError::InvalidConfigValueError { ref field, .. } if field == "limits.max_length"));
    }

    #[test]
    fn test_rejects_non_csv_manifest() {
        let config = BillingConfig::from_toml_str("[input]\nmanifest = \"packages.xlsx\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = BillingConfig::from_toml_str("[limits\nmax_width = 1").unwrap_err();
        assert!(matches!(err, BillingError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[billing]\ndefault_carrier = \"UPS\"\n")
            .unwrap();

        let config = BillingConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.default_carrier().unwrap(), DimDivisor::Ups);
    }
}
