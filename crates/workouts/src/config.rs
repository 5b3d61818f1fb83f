//! Tracker settings read from the environment.

use std::env;

use crate::dispatch::{Package, default_packages};
use crate::errors::ConfigError;
use crate::report::Locale;

pub const LOCALE_VAR: &str = "TRACKER_LOCALE";
pub const OUTPUT_VAR: &str = "TRACKER_OUTPUT";
pub const PACKAGES_VAR: &str = "TRACKER_PACKAGES";
pub const FAIL_FAST_VAR: &str = "TRACKER_FAIL_FAST";

/// How accepted packages are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One summary line per package.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub locale: Locale,
    pub output: OutputFormat,
    pub packages: Vec<Package>,
    /// Abort on the first rejected package instead of skipping it.
    pub fail_fast: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            output: OutputFormat::default(),
            packages: default_packages(),
            fail_fast: false,
        }
    }
}

impl TrackerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset variables keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(LOCALE_VAR) {
            config.locale = Locale::from_tag(&value).ok_or(ConfigError::UnsupportedValue {
                var: LOCALE_VAR,
                value,
            })?;
        }

        if let Some(value) = lookup(OUTPUT_VAR) {
            config.output = match value.trim().to_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::UnsupportedValue {
                        var: OUTPUT_VAR,
                        value,
                    });
                }
            };
        }

        if let Some(value) = lookup(PACKAGES_VAR) {
            config.packages = serde_json::from_str(&value).map_err(|source| ConfigError::Json {
                var: PACKAGES_VAR,
                source,
            })?;
        }

        if let Some(value) = lookup(FAIL_FAST_VAR) {
            config.fail_fast = match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::UnsupportedValue {
                        var: FAIL_FAST_VAR,
                        value,
                    });
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.packages.len(), 3);
    }

    #[test]
    fn test_overrides() {
        let config = TrackerConfig::from_lookup(lookup(&[
            (LOCALE_VAR, "ru"),
            (OUTPUT_VAR, "JSON"),
            (PACKAGES_VAR, r#"[["RUN", [15000, 1, 75]]]"#),
            (FAIL_FAST_VAR, "true"),
        ]))
        .unwrap();

        assert_eq!(config.locale, Locale::Russian);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(
            config.packages,
            vec![Package::new("RUN", vec![15000.0, 1.0, 75.0])]
        );
        assert!(config.fail_fast);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            TrackerConfig::from_lookup(lookup(&[(LOCALE_VAR, "fr")])),
            Err(ConfigError::UnsupportedValue { var: LOCALE_VAR, .. })
        ));
        assert!(matches!(
            TrackerConfig::from_lookup(lookup(&[(PACKAGES_VAR, "not json")])),
            Err(ConfigError::Json { .. })
        ));
        assert!(TrackerConfig::from_lookup(lookup(&[(FAIL_FAST_VAR, "maybe")])).is_err());
    }
}
