//! Transform configuration
//!
//! Two flags select the wire layout of a word-reorder strategy. They are
//! loaded once when a driver configures its channel and then frozen inside
//! the transform.
//!
//! Sources, lowest to highest priority:
//! 1. Defaults (both flags off)
//! 2. Config file (`.toml`, `.yaml`/`.yml`, `.json`)
//! 3. Environment variables prefixed `VOLTAGE_TRANSFORM_`

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::bytes::ByteOrder;
use crate::error::{Result, TransformError};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "VOLTAGE_TRANSFORM_";

/// Word-reorder flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Reverse word order of 4-/8-byte values (i32, u32, f32, i64, u64, f64)
    pub multi_word_reverse: bool,

    /// Word-swap string buffers (never word-order reversed)
    pub string_reverse: bool,
}

impl TransformConfig {
    pub const fn new(multi_word_reverse: bool, string_reverse: bool) -> Self {
        Self {
            multi_word_reverse,
            string_reverse,
        }
    }

    /// Build from the wire byte order a device manual names
    ///
    /// Only layouts with big-endian words (ABCD, CDAB) can be produced.
    pub fn from_byte_order(order: ByteOrder, string_reverse: bool) -> Result<Self> {
        if !order.word_is_big_endian() {
            return Err(TransformError::config(format!(
                "byte order {} cannot be produced by word reordering",
                order
            )));
        }
        Ok(Self::new(!order.words_reversed(), string_reverse))
    }

    /// Wire byte order of 4-/8-byte values under this configuration
    pub fn byte_order(&self) -> ByteOrder {
        if self.multi_word_reverse {
            ByteOrder::Abcd
        } else {
            ByteOrder::Cdab
        }
    }

    /// Base figment: defaults merged with `VOLTAGE_TRANSFORM_*` variables
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Extract the configuration from an existing figment
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        debug!(
            multi_word_reverse = config.multi_word_reverse,
            string_reverse = config.string_reverse,
            "Transform configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from an optional file plus environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            // figment treats a missing file as empty
            if !path.is_file() {
                return Err(TransformError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }

            let extension = path
                .extension()
                .and_then(|s| s.to_str())
                .ok_or_else(|| TransformError::config("Config file must have an extension"))?;

            debug!("Loading transform configuration from {}", path.display());
            figment = match extension {
                "toml" => figment.merge(Toml::file(path)),
                "yaml" | "yml" => figment.merge(Yaml::file(path)),
                "json" => figment.merge(Json::file(path)),
                _ => {
                    return Err(TransformError::config(format!(
                        "Unsupported config file format: {}",
                        extension
                    )))
                },
            };
        }

        Self::from_figment(&figment.merge(Env::prefixed(ENV_PREFIX)))
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_flags_off() {
        let config = TransformConfig::default();
        assert!(!config.multi_word_reverse);
        assert!(!config.string_reverse);
        assert_eq!(config.byte_order(), ByteOrder::Cdab);
    }

    #[test]
    fn test_byte_order_mapping() {
        let abcd = TransformConfig::from_byte_order(ByteOrder::Abcd, true).unwrap();
        assert_eq!(abcd, TransformConfig::new(true, true));
        assert_eq!(abcd.byte_order(), ByteOrder::Abcd);

        let cdab = TransformConfig::from_byte_order(ByteOrder::Cdab, false).unwrap();
        assert_eq!(cdab, TransformConfig::new(false, false));

        assert!(matches!(
            TransformConfig::from_byte_order(ByteOrder::Dcba, false),
            Err(TransformError::Config(_))
        ));
        assert!(TransformConfig::from_byte_order(ByteOrder::Badc, false).is_err());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let figment = Figment::from(Serialized::defaults(TransformConfig::default()))
            .merge(Yaml::string("string_reverse: true\n"));
        let config = TransformConfig::from_figment(&figment).unwrap();
        assert_eq!(config, TransformConfig::new(false, true));
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "multi_word_reverse: true").unwrap();
        writeln!(file, "string_reverse: true").unwrap();

        let config = TransformConfig::load(Some(file.path())).unwrap();
        assert_eq!(config, TransformConfig::new(true, true));
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "multi_word_reverse = true").unwrap();

        let config = TransformConfig::load(Some(file.path())).unwrap();
        assert!(config.multi_word_reverse);
        assert!(!config.string_reverse);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(
            TransformConfig::load(Some(file.path())),
            Err(TransformError::Config(_))
        ));
    }

    #[test]
    fn test_load_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("typo.toml");

        let err = TransformConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, TransformError::Config(_)));
        assert!(err.to_string().contains("typo.toml"));
    }

    #[test]
    fn test_env_overrides_defaults_and_file() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("VOLTAGE_TRANSFORM_MULTI_WORD_REVERSE", "true");

            let config = TransformConfig::load(None).unwrap();
            assert_eq!(config, TransformConfig::new(true, false));

            jail.create_file(
                "transform.toml",
                "multi_word_reverse = false\nstring_reverse = true\n",
            )?;
            let config = TransformConfig::load(Some(Path::new("transform.toml"))).unwrap();
            assert_eq!(config, TransformConfig::new(true, true));

            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_bad_value() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"multi_word_reverse": "sometimes"}}"#).unwrap();
        assert!(TransformConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = TransformConfig::new(true, false);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"multi_word_reverse":true,"string_reverse":false}"#);
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(serde_yaml::from_str::<TransformConfig>(&yaml).unwrap(), config);
    }
}
