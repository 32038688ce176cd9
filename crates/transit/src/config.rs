//! Resolver settings: lookup policy and map region padding.

use serde::Deserialize;
use std::path::Path;

use crate::models::types::CatalogError;

/// How lookups of absent data are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupPolicy {
    /// Missing coordinates and unknown station references are errors
    #[default]
    Strict,
    /// Missing coordinates and unknown stations fall back to 0.0
    Lenient,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Applied to station coordinates at load time and to run entries at
    /// resolve time. Defaults to strict.
    #[serde(default)]
    pub lookup: LookupPolicy,
    /// Fraction of the geometry's extent added around it when fitting the
    /// initial map region (default: 0.1)
    #[serde(default = "ResolverConfig::default_region_padding")]
    pub region_padding: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            lookup: LookupPolicy::default(),
            region_padding: Self::default_region_padding(),
        }
    }
}

impl ResolverConfig {
    fn default_region_padding() -> f64 {
        0.1
    }

    pub fn lenient() -> Self {
        Self {
            lookup: LookupPolicy::Lenient,
            ..Self::default()
        }
    }

    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| CatalogError::Malformed {
            document: path.display().to_string(),
            source,
        })
    }
}
