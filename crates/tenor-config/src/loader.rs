//! Loading configurations from JSON and TOML.

use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ConfigError, ConfigResult, Validate};

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// JSON document.
    Json,
    /// TOML document.
    Toml,
}

impl ConfigFormat {
    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Deserializes `content` without validating it.
    pub fn deserialize<T: DeserializeOwned>(self, content: &str) -> ConfigResult<T> {
        match self {
            ConfigFormat::Json => Ok(serde_json::from_str(content)?),
            ConfigFormat::Toml => Ok(toml::from_str(content)?),
        }
    }

    /// Serializes `value` in this format.
    pub fn serialize<T: Serialize>(self, value: &T) -> ConfigResult<String> {
        match self {
            ConfigFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            ConfigFormat::Toml => Ok(toml::to_string_pretty(value)?),
        }
    }
}

/// A configuration that can be parsed, validated and loaded from disk.
pub trait LoadConfig: DeserializeOwned + Validate {
    /// Parses and validates `content`.
    fn parse(content: &str, format: ConfigFormat) -> ConfigResult<Self> {
        let config: Self = format.deserialize(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    fn from_json_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, ConfigFormat::Json)
    }

    /// Parses and validates a TOML document.
    fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, ConfigFormat::Toml)
    }

    /// Loads a `.json` or `.toml` file.
    fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!("Loading {:?} configuration from {}", format, path.display());
        Self::parse(&content, format)
    }
}

impl LoadConfig for crate::curve::DiscountCurveConfig {}
impl LoadConfig for crate::index::IndexConfig {}
impl LoadConfig for crate::instrument::FixedCouponConfig {}
impl LoadConfig for crate::instrument::FloatingCouponConfig {}
impl LoadConfig for crate::instrument::FixedLegConfig {}
impl LoadConfig for crate::instrument::FloatingLegConfig {}
impl LoadConfig for crate::instrument::SwapConfig {}
impl LoadConfig for crate::instrument::InstrumentConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::DiscountCurveConfig;
    use crate::instrument::SwapConfig;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("request.JSON")).unwrap(),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("dir/curve.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("curve.yaml")),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
        assert!(ConfigFormat::from_path(Path::new("curve")).is_err());
    }

    #[test]
    fn test_curve_from_toml() {
        let toml = r#"
            value_date = "2025-01-31"
            interpolation_on = "log_discount"
            pillars = [["2025-01-31", 1.0], ["2025-07-31", 0.985]]
        "#;
        let config = DiscountCurveConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.pillars.len(), 2);
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_parse_validates() {
        let json = r#"{
            "trade_date": "2025-01-29",
            "end_date": "2025-01-15",
            "notional": 1000000.0,
            "fixed_rate": 0.03,
            "fixed_frequency": "12M",
            "floating_frequency": "3M"
        }"#;
        assert!(matches!(
            SwapConfig::from_json_str(json),
            Err(ConfigError::Validation { .. } | ConfigError::MultipleValidationErrors(_))
        ));
    }

    #[test]
    fn test_serialize_and_reload_toml() {
        let config = DiscountCurveConfig::new(tenor_core::Date::from_ymd(2025, 1, 31).unwrap())
            .with_pillar(tenor_core::Date::from_ymd(2025, 1, 31).unwrap(), 1.0)
            .with_pillar(tenor_core::Date::from_ymd(2025, 7, 31).unwrap(), 0.985);
        let text = ConfigFormat::Toml.serialize(&config).unwrap();
        assert_eq!(DiscountCurveConfig::from_toml_str(&text).unwrap(), config);
    }
}
