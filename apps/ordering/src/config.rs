//! # Configuration
//!
//! Settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BISTRO_*`)
//! 2. Defaults (this file)
//!
//! Unparseable or inconsistent values are logged and the default is kept.

use std::path::PathBuf;

use bistro_core::{Catalog, QuantitySettings};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

/// Catalog shipped with the app, used when no data path is configured.
pub const DEMO_MENU: &str = include_str!("../data/menu.json");

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Catalog JSON file; `None` uses [`DEMO_MENU`].
    pub data_path: Option<PathBuf>,

    /// Amount widget bounds for every product.
    pub quantity: QuantitySettings,
}

impl AppConfig {
    /// Reads overrides from the process environment.
    ///
    /// ## Environment Variables
    /// - `BISTRO_DATA_PATH`: catalog JSON file
    /// - `BISTRO_AMOUNT_DEFAULT`: starting quantity
    /// - `BISTRO_AMOUNT_MIN`: lowest quantity
    /// - `BISTRO_AMOUNT_MAX`: highest quantity
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("BISTRO_DATA_PATH").filter(|p| !p.trim().is_empty()) {
            config.data_path = Some(PathBuf::from(path));
        }

        let mut quantity = config.quantity;
        read_i64(&lookup, "BISTRO_AMOUNT_DEFAULT", &mut quantity.default_value);
        read_i64(&lookup, "BISTRO_AMOUNT_MIN", &mut quantity.min);
        read_i64(&lookup, "BISTRO_AMOUNT_MAX", &mut quantity.max);

        match quantity.validate() {
            Ok(()) => config.quantity = quantity,
            Err(err) => warn!(%err, "Ignoring quantity overrides"),
        }

        debug!(?config, "Configuration loaded");
        config
    }

    /// Loads the configured catalog.
    pub fn load_catalog(&self) -> AppResult<Catalog> {
        match &self.data_path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
                    path: path.clone(),
                    source,
                })?;
                Ok(Catalog::from_json(&text)?)
            }
            None => Ok(Catalog::from_json(DEMO_MENU)?),
        }
    }
}

fn read_i64<F>(lookup: &F, key: &str, slot: &mut i64)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse::<i64>() {
            Ok(value) => *slot = value,
            Err(_) => warn!(key, value = %raw, "Ignoring non-numeric setting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.quantity, QuantitySettings::default());
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BISTRO_DATA_PATH", "/srv/menu.json"),
            ("BISTRO_AMOUNT_DEFAULT", "2"),
            ("BISTRO_AMOUNT_MIN", "1"),
            ("BISTRO_AMOUNT_MAX", " 20 "),
        ]);
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/menu.json")));
        assert_eq!(config.quantity, QuantitySettings::new(2, 1, 20).unwrap());
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[("BISTRO_AMOUNT_MAX", "lots")]);
        assert_eq!(config.quantity.max, 10);

        // Default above max: the whole override set is dropped.
        let config = config_from(&[("BISTRO_AMOUNT_DEFAULT", "5"), ("BISTRO_AMOUNT_MAX", "3")]);
        assert_eq!(config.quantity, QuantitySettings::default());
    }

    #[test]
    fn test_demo_menu_loads() {
        let catalog = AppConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 4);
        assert!(bistro_core::validation::validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let config = AppConfig {
            data_path: Some(PathBuf::from("/definitely/not/here/menu.json")),
            ..AppConfig::default()
        };
        assert!(matches!(config.load_catalog(), Err(AppError::CatalogRead { .. })));
    }
}
