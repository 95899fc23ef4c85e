//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};

const DEFAULT_PARK_NAME: &str = "Dinopark";
const DEFAULT_LOG_FILTER: &str = "dinopark_engine=debug";

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Park display name, used in startup logging
    pub park_name: String,
    /// Optional JSON seed file with places, enclosures and dinosaurs
    pub seed_path: Option<PathBuf>,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let park_name = lookup("DINOPARK_NAME").unwrap_or_else(|| DEFAULT_PARK_NAME.to_string());
        if park_name.trim().is_empty() {
            bail!("DINOPARK_NAME must not be empty");
        }

        Ok(Self {
            park_name: park_name.trim().to_string(),
            seed_path: lookup("DINOPARK_SEED_PATH")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            log_filter: lookup("DINOPARK_LOG")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.park_name, "Dinopark");
        assert_eq!(config.seed_path, None);
        assert_eq!(config.log_filter, "dinopark_engine=debug");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DINOPARK_NAME", " Isla Nublar "),
            ("DINOPARK_SEED_PATH", "./data/seed.json"),
            ("DINOPARK_LOG", "dinopark_engine=trace"),
        ])
        .unwrap();
        assert_eq!(config.park_name, "Isla Nublar");
        assert_eq!(config.seed_path, Some(PathBuf::from("./data/seed.json")));
        assert_eq!(config.log_filter, "dinopark_engine=trace");
    }

    #[test]
    fn blank_seed_path_is_ignored() {
        let config = config_from(&[("DINOPARK_SEED_PATH", "  ")]).unwrap();
        assert_eq!(config.seed_path, None);
    }

    #[test]
    fn blank_park_name_is_rejected() {
        assert!(config_from(&[("DINOPARK_NAME", "   ")]).is_err());
    }
}
