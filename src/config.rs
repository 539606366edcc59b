use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::hex::is_valid_hex;

/// WCAG ratio thresholds. A ratio equal to a threshold meets it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WcagThresholds {
    pub normal_aaa: f64,
    pub normal_aa: f64,
    pub large_aaa: f64,
    pub large_aa: f64,
}

impl Default for WcagThresholds {
    fn default() -> Self {
        Self {
            normal_aaa: 7.0,
            normal_aa: 4.5,
            large_aaa: 4.5,
            large_aa: 3.0,
        }
    }
}

/// Minimum |Lc| for a Pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApcaThresholds {
    pub normal: f64,
    pub large: f64,
}

impl Default for ApcaThresholds {
    fn default() -> Self {
        Self {
            normal: 60.0,
            large: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContrastConfig {
    pub wcag: WcagThresholds,
    pub apca: ApcaThresholds,
    /// Backdrop used when compositing translucent backgrounds.
    pub page_background: String,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            wcag: WcagThresholds::default(),
            apca: ApcaThresholds::default(),
            page_background: "#ffffff".to_string(),
        }
    }
}

impl ContrastConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ContrastConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.wcag;
        for (name, value) in [
            ("wcag.normalAaa", w.normal_aaa),
            ("wcag.normalAa", w.normal_aa),
            ("wcag.largeAaa", w.large_aaa),
            ("wcag.largeAa", w.large_aa),
            ("apca.normal", self.apca.normal),
            ("apca.large", self.apca.large),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidThreshold {
                    name,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        if w.normal_aaa < w.normal_aa {
            return Err(ConfigError::InvalidThreshold {
                name: "wcag.normalAaa",
                reason: format!("{} is below normalAa {}", w.normal_aaa, w.normal_aa),
            });
        }
        if w.large_aaa < w.large_aa {
            return Err(ConfigError::InvalidThreshold {
                name: "wcag.largeAaa",
                reason: format!("{} is below largeAa {}", w.large_aaa, w.large_aa),
            });
        }
        if !is_valid_hex(&self.page_background) {
            return Err(ConfigError::InvalidPageBackground(self.page_background.clone()));
        }
        Ok(())
    }
}
