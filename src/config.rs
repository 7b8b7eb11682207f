//! Encoding defaults that can be loaded from JSON or TOML.
use serde::de::Error;

use crate::hash::{Hash, PRECISION_MAX, validate_precision};

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Precision used by [`Config::encode`]
    #[serde(default = "Config::default_precision")]
    pub precision: u8,
}

impl Config {
    const fn default_precision() -> u8 {
        PRECISION_MAX
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        if validate_precision(precision).is_err() {
            log::warn!(
                "Precision {} is outside the supported range; encoding will fail until it is fixed",
                precision
            );
        }
        self.precision = precision;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_precision(self.precision).map_err(|e| e.to_string())
    }

    /// Encodes a coordinate at the configured precision.
    pub fn encode(&self, lat: f64, lon: f64) -> crate::Result<Hash> {
        Hash::encode_with_precision(lat, lon, self.precision)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: Self::default_precision(),
        }
    }
}
