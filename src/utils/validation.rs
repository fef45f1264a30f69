use crate::utils::error::{BillingError, PackageField, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks `0 < value <= max` for a package field and returns the value narrowed to `u32`.
pub fn validate_package_bound(field: PackageField, value: i64, max: u32) -> Result<u32> {
    if value <= 0 || value > i64::from(max) {
        return Err(BillingError::invalid_argument(field, value, max));
    }
    // in range 1..=max, so it fits
    Ok(value as u32)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BillingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BillingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(field_name: &str, files: &[String], allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        if let Some(extension) = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            if !allowed_set.contains(extension) {
                return Err(BillingError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
        } else {
            return Err(BillingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "File has no extension or invalid filename".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| BillingError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BillingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BillingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_package_bound() {
        assert_eq!(validate_package_bound(PackageField::Width, 1, 80).unwrap(), 1);
        assert_eq!(validate_package_bound(PackageField::Width, 80, 80).unwrap(), 80);

        for bad in [0, -1, 81, i64::MAX, i64::MIN] {
            let err = validate_package_bound(PackageField::Width, bad, 80).unwrap_err();
            assert_eq!(err.field(), Some(PackageField::Width));
        }
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["manifest.csv".to_string()];
        assert!(validate_file_extensions("input.manifest", &files, &["csv"]).is_ok());

        let invalid_files = vec!["manifest.xlsx".to_string()];
        assert!(validate_file_extensions("input.manifest", &invalid_files, &["csv"]).is_err());

        let no_extension = vec!["manifest".to_string()];
        assert!(validate_file_extensions("input.manifest", &no_extension, &["csv"]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("limits.max_weight", 150u32, 1, 10_000).is_ok());
        assert!(validate_range("limits.max_weight", 0u32, 1, 10_000).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("manifest.csv".to_string());
        let missing: Option<String> = None;
        assert!(validate_required_field("input.manifest", &present).is_ok());
        assert!(matches!(
            validate_required_field("input.manifest", &missing),
            Err(BillingError::MissingConfigError { .. })
        ));
    }
}
