use crate::utils::error::BillingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Carrier divisors for dimensional weight.
///
/// The set is closed: a divisor only enters a calculation through one of these
/// variants, never as a bare number. All values assume inches and pounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "UPPERCASE")]
pub enum DimDivisor {
    #[default]
    Fedex,
    Ups,
    Usps,
}

impl DimDivisor {
    pub fn value(&self) -> u32 {
        match self {
            DimDivisor::Fedex => 139,
            DimDivisor::Ups => 139,
            DimDivisor::Usps => 166,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DimDivisor::Fedex => "FEDEX",
            DimDivisor::Ups => "UPS",
            DimDivisor::Usps => "USPS",
        }
    }

    pub fn all() -> &'static [DimDivisor] {
        &[DimDivisor::Fedex, DimDivisor::Ups, DimDivisor::Usps]
    }
}

impl fmt::Display for DimDivisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DimDivisor {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DimDivisor::all()
            .iter()
            .copied()
            .find(|divisor| divisor.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BillingError::UnknownCarrier {
                name: s.to_string(),
            })
    }
}
