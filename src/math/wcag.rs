use crate::config::WcagThresholds;
use crate::error::ColorError;
use crate::types::{LevelPair, WcagLevel, WcagResult};

use super::hex::{hex_to_rgb, Rgb};

/// Convert sRGB channel (0-255) to linear light value.
/// WCAG 2.x curve: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * srgb_to_linear(rgb.r) + 0.7152 * srgb_to_linear(rgb.g) + 0.0722 * srgb_to_linear(rgb.b)
}

/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2. Order of arguments is irrelevant.
pub fn ratio_from_luminance(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG contrast ratio between two hex colors, or why it couldn't be computed.
pub fn contrast_ratio(hex1: &str, hex2: &str) -> Result<f64, ColorError> {
    let l1 = relative_luminance(hex_to_rgb(hex1)?);
    let l2 = relative_luminance(hex_to_rgb(hex2)?);
    let ratio = ratio_from_luminance(l1, l2);
    if !ratio.is_finite() {
        return Err(ColorError::NonFinite { stage: "wcag ratio" });
    }
    Ok(ratio)
}

fn level_for(ratio: f64, aaa: f64, aa: f64) -> WcagLevel {
    if ratio >= aaa {
        WcagLevel::Aaa
    } else if ratio >= aa {
        WcagLevel::Aa
    } else {
        WcagLevel::Fail
    }
}

/// Classify a ratio for normal and large text. Thresholds are inclusive.
pub fn classify(ratio: f64, thresholds: &WcagThresholds) -> LevelPair<WcagLevel> {
    LevelPair {
        normal: level_for(ratio, thresholds.normal_aaa, thresholds.normal_aa),
        large: level_for(ratio, thresholds.large_aaa, thresholds.large_aa),
    }
}

/// Ratio plus classification, or the fallback result if either color can't be parsed.
pub fn evaluate(fg: &str, bg: &str, thresholds: &WcagThresholds) -> Result<WcagResult, ColorError> {
    let ratio = contrast_ratio(fg, bg)?;
    Ok(WcagResult {
        ratio,
        level: classify(ratio, thresholds),
    })
}

/// WCAG contrast with the published thresholds. Never fails: malformed
/// input yields ratio 0 with Fail/Fail.
pub fn calculate_wcag_contrast(fg: &str, bg: &str) -> WcagResult {
    evaluate(fg, bg, &WcagThresholds::default()).unwrap_or(WcagResult::FALLBACK)
}
