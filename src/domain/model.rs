use crate::utils::error::{PackageField, Result};
use crate::utils::validation::{validate_package_bound, validate_range};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_WIDTH: u32 = 80;
pub const DEFAULT_MAX_HEIGHT: u32 = 70;
pub const DEFAULT_MAX_LENGTH: u32 = 120;
pub const DEFAULT_MAX_WEIGHT: u32 = 150;

/// Ceiling on every limit. Keeps `volume()` and the dimensional weight within `u64`.
pub const MAX_LIMIT: u32 = 10_000;

/// Upper bounds accepted for a package. Lower bounds are always exclusive zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageLimits {
    pub max_width: u32,
    pub max_height: u32,
    pub max_length: u32,
    pub max_weight: u32,
}

impl Default for PackageLimits {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            max_length: DEFAULT_MAX_LENGTH,
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }
}

impl PackageLimits {
    pub fn new(max_width: u32, max_height: u32, max_length: u32, max_weight: u32) -> Result<Self> {
        let limits = Self {
            max_width,
            max_height,
            max_length,
            max_weight,
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Every limit must lie in `1..=MAX_LIMIT`.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("limits.max_width", self.max_width),
            ("limits.max_height", self.max_height),
            ("limits.max_length", self.max_length),
            ("limits.max_weight", self.max_weight),
        ] {
            validate_range(field, value, 1, MAX_LIMIT)?;
        }
        Ok(())
    }
}

/// Width, height and length of a package.
///
/// Always within the [`PackageLimits`] it was built against. There are no setters:
/// [`increase_width`](Self::increase_width) hands back a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PackageDimensions {
    width: u32,
    height: u32,
    length: u32,
}

impl PackageDimensions {
    pub fn new(width: i64, height: i64, length: i64) -> Result<Self> {
        Self::with_limits(width, height, length, &PackageLimits::default())
    }

    /// Validates width, then height, then length; only the first violation is reported.
    pub fn with_limits(width: i64, height: i64, length: i64, limits: &PackageLimits) -> Result<Self> {
        // limits built by hand may skip validate(), so the ceiling is applied here too
        let width = validate_package_bound(PackageField::Width, width, limits.max_width.min(MAX_LIMIT))?;
        let height = validate_package_bound(PackageField::Height, height, limits.max_height.min(MAX_LIMIT))?;
        let length = validate_package_bound(PackageField::Length, length, limits.max_length.min(MAX_LIMIT))?;
        Ok(Self {
            width,
            height,
            length,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn volume(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height) * u64::from(self.length)
    }

    pub fn increase_width(&self, delta: i64) -> Result<Self> {
        self.increase_width_within(delta, &PackageLimits::default())
    }

    pub fn increase_width_within(&self, delta: i64, limits: &PackageLimits) -> Result<Self> {
        Self::with_limits(
            i64::from(self.width).saturating_add(delta),
            i64::from(self.height),
            i64::from(self.length),
            limits,
        )
    }

    pub fn equals(&self, other: &PackageDimensions) -> bool {
        self == other
    }
}

/// Actual (scale) weight of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Weight {
    value: u32,
}

impl Weight {
    pub fn new(value: i64) -> Result<Self> {
        Self::with_limits(value, &PackageLimits::default())
    }

    pub fn with_limits(value: i64, limits: &PackageLimits) -> Result<Self> {
        let value = validate_package_bound(PackageField::Weight, value, limits.max_weight.min(MAX_LIMIT))?;
        Ok(Self { value })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn equals(&self, other: &Weight) -> bool {
        self == other
    }
}
