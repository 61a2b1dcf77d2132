//! Date conversion configuration
//!
//! Stored as camelCase JSON alongside the other app preferences. Every field
//! has a default, so an empty object is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dates::DEFAULT_PATTERN;
use crate::error::{CoreError, Result};

/// Largest Hijri day adjustment accepted, in either direction
pub const MAX_HIJRI_ADJUSTMENT: i8 = 2;

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en_US";

/// Date formatting and Hijri conversion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateConfig {
    /// POSIX locale name used for Gregorian formatting (e.g. "en_US", "ar_SA")
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Unicode pattern used when a caller does not supply one
    #[serde(default = "default_pattern")]
    pub default_pattern: String,

    /// Days added before Hijri conversion to follow local moon sighting
    #[serde(default)]
    pub hijri_adjustment: i8,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            default_pattern: default_pattern(),
            hijri_adjustment: 0,
        }
    }
}

impl DateConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!("Loaded date config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.hijri_adjustment.unsigned_abs() > MAX_HIJRI_ADJUSTMENT.unsigned_abs() {
            return Err(CoreError::InvalidConfig(format!(
                "hijriAdjustment must be within -{max}..={max}, got {}",
                self.hijri_adjustment,
                max = MAX_HIJRI_ADJUSTMENT
            )));
        }
        if self.default_pattern.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "defaultPattern must not be empty".to_string(),
            ));
        }
        if self.locale.trim().is_empty() {
            return Err(CoreError::InvalidConfig("locale must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DateConfig::default();
        assert_eq!(config.locale, "en_US");
        assert_eq!(config.default_pattern, "dd MMMM yyyy, EE");
        assert_eq!(config.hijri_adjustment, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = DateConfig::from_json("{}").unwrap();
        assert_eq!(config, DateConfig::default());
    }

    #[test]
    fn test_camel_case_fields() {
        let config =
            DateConfig::from_json(r#"{"locale":"fr_FR","defaultPattern":"d MMM","hijriAdjustment":-1}"#)
                .unwrap();
        assert_eq!(config.locale, "fr_FR");
        assert_eq!(config.default_pattern, "d MMM");
        assert_eq!(config.hijri_adjustment, -1);
    }

    #[test]
    fn test_adjustment_out_of_range() {
        let err = DateConfig::from_json(r#"{"hijriAdjustment":3}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = DateConfig::from_json(r#"{"defaultPattern":"  "}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = DateConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"hijriAdjustment":1}}"#).unwrap();

        let config = DateConfig::load(file.path()).unwrap();
        assert_eq!(config.hijri_adjustment, 1);
        assert_eq!(config.locale, "en_US");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DateConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = DateConfig {
            hijri_adjustment: 2,
            ..DateConfig::default()
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("hijriAdjustment"));
        assert_eq!(DateConfig::from_json(&json).unwrap(), config);
    }
}
