//! Node-API surface for the editor UI. Levels cross the boundary as strings.

use napi_derive::napi;

use crate::types::{ApcaResult, WcagResult};

#[napi(object)]
#[derive(Debug, Clone)]
pub struct WcagResultJs {
    pub ratio: f64,
    /// "AAA" | "AA" | "Fail"
    pub normal: String,
    pub large: String,
}

impl From<WcagResult> for WcagResultJs {
    fn from(result: WcagResult) -> Self {
        Self {
            ratio: result.ratio,
            normal: result.level.normal.as_str().to_string(),
            large: result.level.large.as_str().to_string(),
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ApcaResultJs {
    pub lc: f64,
    /// "Pass" | "Fail"
    pub normal: String,
    pub large: String,
    pub polarity: String,
}

impl From<ApcaResult> for ApcaResultJs {
    fn from(result: ApcaResult) -> Self {
        Self {
            lc: result.lc,
            normal: result.level.normal.as_str().to_string(),
            large: result.level.large.as_str().to_string(),
            polarity: result.polarity().label().to_string(),
        }
    }
}

#[napi]
pub fn health_check() -> String {
    "design-contrast ok".to_string()
}

#[napi]
pub fn normalize_hex(input: String) -> String {
    crate::math::hex::normalize_hex(&input)
}

#[napi]
pub fn is_valid_hex(input: String) -> bool {
    crate::math::hex::is_valid_hex(&input)
}

#[napi(js_name = "calculateWCAGContrast")]
pub fn calculate_wcag_contrast(fg: String, bg: String) -> WcagResultJs {
    crate::math::wcag::calculate_wcag_contrast(&fg, &bg).into()
}

#[napi(js_name = "calculateAPCAContrast")]
pub fn calculate_apca_contrast(fg: String, bg: String) -> ApcaResultJs {
    crate::math::apca::calculate_apca_contrast(&fg, &bg).into()
}

#[napi]
pub fn format_ratio(ratio: f64) -> String {
    crate::format::format_ratio(ratio)
}

#[napi]
pub fn format_lc(lc: f64) -> String {
    crate::format::format_lc(lc)
}
