pub mod toml_config;

pub use toml_config::BillingConfig;

#[cfg(feature = "cli")]
use crate::domain::{DimDivisor, PackageLimits};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "billable-weight")]
#[command(about = "Compute the billable weight of a single package")]
pub struct CliConfig {
    /// Package width
    #[arg(long, allow_hyphen_values = true)]
    pub width: i64,

    /// Package height
    #[arg(long, allow_hyphen_values = true)]
    pub height: i64,

    /// Package length
    #[arg(long, allow_hyphen_values = true)]
    pub length: i64,

    /// Actual (scale) weight
    #[arg(long, allow_hyphen_values = true)]
    pub weight: i64,

    /// Carrier whose divisor to use; defaults to the config file, then FEDEX
    #[arg(long, value_enum)]
    pub carrier: Option<DimDivisor>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Optional TOML file providing limits and a default carrier
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Limits and carrier after folding in the optional config file.
    pub fn resolve(&self) -> Result<(PackageLimits, DimDivisor)> {
        let file_config = match &self.config {
            Some(path) => {
                let config = BillingConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };

        let limits = file_config
            .as_ref()
            .map(|c| c.limits)
            .unwrap_or_default();
        let carrier = match (self.carrier, &file_config) {
            (Some(carrier), _) => carrier,
            (None, Some(config)) => config.default_carrier()?,
            (None, None) => DimDivisor::default(),
        };

        Ok((limits, carrier))
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
