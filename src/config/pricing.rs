//! Pricing data configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where plan prices and default tier schedules are read from.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// YAML catalog with base prices and tier schedules
    pub catalog_path: PathBuf,
}

impl PricingConfig {
    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("pricing.catalog_path"));
        }
        match self.catalog_path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(()),
            _ => Err(ValidationError::InvalidCatalogPath(
                self.catalog_path.display().to_string(),
            )),
        }
    }
}
