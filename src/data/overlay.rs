//! Configuration catalog with an optional YAML overlay.
//!
//! Overlay file format (`selector: config`):
//!
//! ```yaml
//! "Marine de la RII":
//!   kind: branche
//!   budget_base: 2.4
//!   personnel_base: 18
//!   priorities: [asymetrique]
//!   descriptors:
//!     operating_zones: ["Golfe Persique"]
//! ```
//!
//! Overlay entries shadow the built-in catalog for the same exact selector.
//! Unknown keys are rejected, and every seed must be finite and non-negative.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::data::config::{self, EntityConfig};
use crate::error::{IndicatorError, Result};

pub const OVERLAY_ENV_VAR: &str = "DEFENSE_INDICATORS_OVERLAY";

#[derive(Debug, Clone, Default)]
pub struct ConfigCatalog {
    overrides: BTreeMap<String, EntityConfig>,
}

impl ConfigCatalog {
    /// Built-in configurations only.
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: BTreeMap<String, EntityConfig>) -> Self {
        Self { overrides }
    }

    /// Parse and validate an overlay from YAML text.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let overrides: BTreeMap<String, EntityConfig> = serde_yaml::from_str(raw)?;
        for (selector, config) in &overrides {
            config.validate(selector)?;
        }
        Ok(Self::with_overrides(overrides))
    }

    /// Load an overlay file on top of the built-in catalog.
    pub fn load_overlay(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| IndicatorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            entries = catalog.overrides.len(),
            "loaded configuration overlay"
        );
        Ok(catalog)
    }

    /// Overlay from the path named by [`OVERLAY_ENV_VAR`], or the built-in catalog when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(OVERLAY_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load_overlay(path),
            _ => Ok(Self::builtin()),
        }
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Total resolution: overlay, then built-in catalog, then the fallback configuration.
    pub fn resolve(&self, selector: &str) -> EntityConfig {
        if let Some(config) = self.overrides.get(selector) {
            tracing::debug!(selector, "resolved from overlay");
            return config.clone();
        }
        config::resolve(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::config::EntityKind;

    const OVERLAY: &str = r#"
"Marine de la RII":
  kind: branche
  budget_base: 2.4
  personnel_base: 18
  priorities: [asymetrique, asymetrique]
  descriptors:
    operating_zones: ["Golfe Persique"]
"#;

    #[test]
    fn overlay_entry_shadows_builtin() {
        let catalog = ConfigCatalog::from_yaml_str(OVERLAY).unwrap();
        let navy = catalog.resolve("Marine de la RII");
        assert_eq!(navy.kind, EntityKind::Branche);
        assert_eq!(navy.budget_base, Some(2.4));
        assert_eq!(navy.personnel_base(), 18.0);
        assert_eq!(navy.exercises_base, None);
        assert_eq!(navy.priorities.len(), 1);
        assert_eq!(navy.descriptors.operating_zones, vec!["Golfe Persique".to_string()]);
    }

    #[test]
    fn selectors_missing_from_overlay_use_builtin() {
        let catalog = ConfigCatalog::from_yaml_str(OVERLAY).unwrap();
        assert_eq!(
            catalog.resolve("Programme Missilistique"),
            config::resolve("Programme Missilistique")
        );
        assert_eq!(catalog.resolve("Unknown Unit"), EntityConfig::fallback());
    }

    #[test]
    fn malformed_overlay_is_an_error() {
        let err = ConfigCatalog::from_yaml_str("\"X\": { kind: nope }").unwrap_err();
        assert!(matches!(err, IndicatorError::Yaml(_)));
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        let raw = r#"
"Marine de la RII":
  kind: branche
  personel_base: 18
  prioritys: [missiles]
"#;
        let err = ConfigCatalog::from_yaml_str(raw).unwrap_err();
        assert!(matches!(err, IndicatorError::Yaml(_)));
        assert!(err.to_string().contains("personel_base"));

        let nested = "\"X\":\n  kind: branche\n  descriptors:\n    doctrine: [a]\n";
        assert!(matches!(
            ConfigCatalog::from_yaml_str(nested),
            Err(IndicatorError::Yaml(_))
        ));
    }

    #[test]
    fn negative_seed_is_rejected() {
        let raw = r#"
"Marine de la RII":
  kind: branche
  personnel_base: -40
"#;
        let err = ConfigCatalog::from_yaml_str(raw).unwrap_err();
        assert!(matches!(
            err,
            IndicatorError::InvalidConfig { ref selector, field: "personnel_base", .. }
                if selector == "Marine de la RII"
        ));
    }

    #[test]
    fn nan_seed_is_rejected() {
        let raw = "\"Marine de la RII\":\n  kind: branche\n  budget_base: .nan\n";
        assert!(matches!(
            ConfigCatalog::from_yaml_str(raw),
            Err(IndicatorError::InvalidConfig { field: "budget_base", .. })
        ));
    }

    #[test]
    fn zero_seed_is_accepted() {
        let raw = "\"X\":\n  kind: branche\n  budget_base: 0\n";
        let catalog = ConfigCatalog::from_yaml_str(raw).unwrap();
        assert_eq!(catalog.resolve("X").budget_base(), 0.0);
    }

    #[test]
    fn missing_overlay_file_reports_path() {
        let err = ConfigCatalog::load_overlay("/nonexistent/overlay.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/overlay.yaml"));
    }
}
