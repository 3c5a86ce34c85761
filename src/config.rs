//! Capacity and filter parameters.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::error::{FftError, Result};
use serde::{Deserialize, Serialize};

/// Largest signal length, field width or field height accepted by default.
pub const MAX_SIZE: usize = 4096;

/// Default standard deviation of the Gaussian filter, in frequency bins.
pub const SIGMA: f64 = 10.0;

/// Parameters consumed by the transforms and the filter.
///
/// Every field may be omitted from the JSON form; missing values take the defaults.
///
/// ```rust
/// use chfourier::Config;
///
/// let config = Config::from_json(r#"{ "sigma": 4.5 }"#).unwrap();
/// assert_eq!(config.sigma, 4.5);
/// assert_eq!(config.max_size, chfourier::MAX_SIZE);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Capacity bound for lengths and field dimensions.
    #[serde(default = "default_max_size")]
    pub max_size: usize,
    /// Gaussian standard deviation.
    #[serde(default = "default_sigma")]
    pub sigma: f64,
}

fn default_max_size() -> usize {
    MAX_SIZE
}

fn default_sigma() -> f64 {
    SIGMA
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: MAX_SIZE,
            sigma: SIGMA,
        }
    }
}

impl Config {
    /// Parses and validates a JSON configuration.
    pub fn from_json(source: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(FftError::InvalidConfig(
                "max_size must be non-zero".to_string(),
            ));
        }
        let two_variance = self.sigma * self.sigma + self.sigma * self.sigma;
        if !(self.sigma > 0.0 && two_variance.is_normal()) {
            return Err(FftError::InvalidSigma(self.sigma));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.max_size, MAX_SIZE);
        assert_eq!(config.sigma, SIGMA);
        assert!(config.validate().is_ok());
        assert_eq!(Config::from_json("{}").unwrap(), config);
    }

    #[test]
    fn json_round_trip() {
        let config = Config {
            max_size: 512,
            sigma: 2.5,
        };
        let text = config.to_json().unwrap();
        assert_eq!(Config::from_json(&text).unwrap(), config);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_json(r#"{ "sigma": -1.0 }"#),
            Err(FftError::InvalidSigma(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "sigma": 1e-200 }"#),
            Err(FftError::InvalidSigma(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "sigma": 1e200 }"#),
            Err(FftError::InvalidSigma(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "max_size": 0 }"#),
            Err(FftError::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(FftError::Json(_))
        ));
    }
}
