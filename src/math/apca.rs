use crate::config::ApcaThresholds;
use crate::error::ColorError;
use crate::types::{ApcaLevel, ApcaResult, LevelPair};

use super::hex::{hex_to_rgb, Rgb};

// Constants from APCA 0.1.0G-4g (SA98G)
const MAIN_TRC: f64 = 2.4;
const S_RCO: f64 = 0.2126729;
const S_GCO: f64 = 0.7151522;
const S_BCO: f64 = 0.0721750;

const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_BG: f64 = 0.65;
const REV_TXT: f64 = 0.62;

const BLK_THRS: f64 = 0.022;
const BLK_CLMP: f64 = 1.414;

const SCALE_BOW: f64 = 1.14;
const SCALE_WOB: f64 = 1.14;
const LO_CON_THRESH: f64 = 0.1;
const LO_CON_OFFSET: f64 = 0.027;
const DELTA_Y_MIN: f64 = 0.0005;

/// What the APCA pipeline concluded about a color pair.
///
/// The two short-circuit variants both surface as `lc == 0` in [`ApcaResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApcaContrast {
    /// Signed Lc, already scaled by 100.
    Contrast(f64),
    /// Clamped luminances differ by less than 0.0005.
    BelowDeltaY,
    /// |SAPC| under the 0.1 low-contrast clip.
    BelowLowClip,
}

impl ApcaContrast {
    pub fn lc(self) -> f64 {
        match self {
            ApcaContrast::Contrast(lc) => lc,
            ApcaContrast::BelowDeltaY | ApcaContrast::BelowLowClip => 0.0,
        }
    }
}

/// sRGB channel to linear light for APCA.
/// Knee at 0.04045 (IEC 61966-2-1), unlike the WCAG 2.x 0.03928.
fn srgb_channel_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(MAIN_TRC)
    }
}

/// Screen luminance Y with the APCA coefficients, before the black clamp.
pub fn srgb_to_y(rgb: Rgb) -> f64 {
    S_RCO * srgb_channel_to_linear(rgb.r)
        + S_GCO * srgb_channel_to_linear(rgb.g)
        + S_BCO * srgb_channel_to_linear(rgb.b)
}

fn soft_clamp_black(y: f64) -> f64 {
    if y > BLK_THRS {
        y
    } else {
        y + (BLK_THRS - y).powf(BLK_CLMP)
    }
}

/// Lc from unclamped text and background luminances.
pub fn contrast_from_y(txt_y: f64, bg_y: f64) -> ApcaContrast {
    let txt_y = soft_clamp_black(txt_y);
    let bg_y = soft_clamp_black(bg_y);

    if (bg_y - txt_y).abs() < DELTA_Y_MIN {
        return ApcaContrast::BelowDeltaY;
    }

    let sapc = if bg_y > txt_y {
        // Normal polarity: dark text on light bg (BoW) -> positive Lc
        (bg_y.powf(NORM_BG) - txt_y.powf(NORM_TXT)) * SCALE_BOW
    } else {
        // Reverse polarity: light text on dark bg (WoB) -> negative Lc
        (bg_y.powf(REV_BG) - txt_y.powf(REV_TXT)) * SCALE_WOB
    };

    if sapc.abs() < LO_CON_THRESH {
        return ApcaContrast::BelowLowClip;
    }

    let lc = if sapc > 0.0 {
        sapc - LO_CON_OFFSET
    } else {
        sapc + LO_CON_OFFSET
    };
    ApcaContrast::Contrast(lc * 100.0)
}

/// APCA contrast of text on background, keeping the reason for a zero result.
pub fn apca_contrast(text_hex: &str, bg_hex: &str) -> Result<ApcaContrast, ColorError> {
    let txt = hex_to_rgb(text_hex)?;
    let bg = hex_to_rgb(bg_hex)?;
    let contrast = contrast_from_y(srgb_to_y(txt), srgb_to_y(bg));
    if !contrast.lc().is_finite() {
        return Err(ColorError::NonFinite { stage: "apca lc" });
    }
    Ok(contrast)
}

/// Pass/Fail on |Lc|; thresholds are inclusive and the sign is ignored.
pub fn classify(lc: f64, thresholds: &ApcaThresholds) -> LevelPair<ApcaLevel> {
    let magnitude = lc.abs();
    let level = |min: f64| if magnitude >= min { ApcaLevel::Pass } else { ApcaLevel::Fail };
    LevelPair {
        normal: level(thresholds.normal),
        large: level(thresholds.large),
    }
}

/// Collapse a detailed outcome into the public result shape.
pub fn to_result(contrast: ApcaContrast, thresholds: &ApcaThresholds) -> ApcaResult {
    match contrast {
        ApcaContrast::Contrast(lc) => ApcaResult {
            lc,
            level: classify(lc, thresholds),
        },
        ApcaContrast::BelowDeltaY | ApcaContrast::BelowLowClip => ApcaResult::ZERO,
    }
}

/// APCA contrast with the default Lc 60 / 45 thresholds. Never fails:
/// malformed input and sub-threshold contrast both yield `lc == 0`, Fail/Fail.
pub fn calculate_apca_contrast(text_hex: &str, bg_hex: &str) -> ApcaResult {
    match apca_contrast(text_hex, bg_hex) {
        Ok(contrast) => to_result(contrast, &ApcaThresholds::default()),
        Err(_) => ApcaResult::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lc(text: &str, bg: &str) -> f64 {
        apca_contrast(text, bg).unwrap().lc()
    }

    #[test]
    fn black_on_white() {
        let lc = lc("#000000", "#ffffff");
        assert!((lc - 106.04).abs() < 0.1, "got {lc}");
    }

    #[test]
    fn white_on_black() {
        let lc = lc("#ffffff", "#000000");
        assert!((lc - (-107.89)).abs() < 0.1, "got {lc}");
    }

    #[test]
    fn swapping_colors_is_not_a_pure_sign_flip() {
        let bow = lc("#000000", "#ffffff");
        let wob = lc("#ffffff", "#000000");
        assert!(bow > 0.0 && wob < 0.0);
        assert!((bow.abs() - wob.abs()).abs() > 1.0);
    }

    #[test]
    fn black_white_both_pass() {
        for (t, b) in [("#000000", "#FFFFFF"), ("#FFFFFF", "#000000")] {
            let r = calculate_apca_contrast(t, b);
            assert!(r.level.normal.passes() && r.level.large.passes(), "{t} on {b}");
        }
    }

    #[test]
    fn gray_777_on_white() {
        // Y = 0.18448 on the piecewise curve
        let r = calculate_apca_contrast("#777777", "#FFFFFF");
        assert!((r.lc - 67.8).abs() < 0.2, "got {}", r.lc);
        assert_eq!(r.level.normal, ApcaLevel::Pass);
        assert_eq!(r.level.large, ApcaLevel::Pass);
    }

    #[test]
    fn red_on_white() {
        let r = calculate_apca_contrast("#FF0000", "#FFFFFF");
        assert!((r.lc - 64.1).abs() < 0.2, "got {}", r.lc);
        assert_eq!(r.level.normal, ApcaLevel::Pass);
    }

    #[test]
    fn mid_gray_on_white_is_large_only() {
        // #999999: Y = 0.3185, Lc ~ 51.9
        let r = calculate_apca_contrast("#999999", "#FFFFFF");
        assert!(r.lc > 45.0 && r.lc < 60.0, "got {}", r.lc);
        assert_eq!(r.level.normal, ApcaLevel::Fail);
        assert_eq!(r.level.large, ApcaLevel::Pass);
    }

    #[test]
    fn same_color_is_below_delta_y() {
        assert_eq!(apca_contrast("#808080", "#808080"), Ok(ApcaContrast::BelowDeltaY));
    }

    #[test]
    fn near_black_pair_is_below_delta_y_after_clamp() {
        assert_eq!(apca_contrast("#010101", "#000000"), Ok(ApcaContrast::BelowDeltaY));
    }

    #[test]
    fn close_grays_are_below_low_clip() {
        assert_eq!(apca_contrast("#808080", "#888888"), Ok(ApcaContrast::BelowLowClip));
        assert_eq!(calculate_apca_contrast("#808080", "#888888"), ApcaResult::ZERO);
    }

    #[test]
    fn short_circuits_look_like_fallback() {
        let identical = calculate_apca_contrast("#336699", "#336699");
        let garbage = calculate_apca_contrast("notacolor", "#336699");
        assert_eq!(identical, garbage);
        assert_eq!(identical, ApcaResult::ZERO);
    }

    #[test]
    fn slate_on_white() {
        // apca-w3 reports 101.4 with its pure 2.4 power curve
        let lc = lc("#1e293b", "#ffffff");
        assert!((lc - 98.4).abs() < 0.5, "got {lc}");
    }

    #[test]
    fn zinc_100_on_zinc_950() {
        // apca-w3: -100.6
        let lc = lc("#f4f4f5", "#09090b");
        assert!((lc - (-100.15)).abs() < 0.5, "got {lc}");
    }

    #[test]
    fn thresholds_are_inclusive_on_magnitude() {
        let t = ApcaThresholds::default();
        assert_eq!(classify(60.0, &t).normal, ApcaLevel::Pass);
        assert_eq!(classify(59.999, &t).normal, ApcaLevel::Fail);
        assert_eq!(classify(45.0, &t).large, ApcaLevel::Pass);
        assert_eq!(classify(44.999, &t).large, ApcaLevel::Fail);
        assert_eq!(classify(-60.0, &t).normal, ApcaLevel::Pass);
        assert_eq!(classify(-44.999, &t).large, ApcaLevel::Fail);
    }

    #[test]
    fn malformed_input_falls_back() {
        for (t, b) in [("notacolor", "#ffffff"), ("", ""), ("#12", "#000000"), ("#ffffff", "#abc")] {
            assert_eq!(calculate_apca_contrast(t, b), ApcaResult::ZERO, "{t} on {b}");
        }
    }

    #[test]
    fn low_channels_use_linear_segment() {
        let y = srgb_to_y(Rgb::new(10, 10, 10));
        assert!((y - (10.0 / 255.0) / 12.92).abs() < 1e-9);
    }

    #[test]
    fn white_luminance_carries_apca_weights() {
        let y = srgb_to_y(Rgb::new(255, 255, 255));
        assert!((y - 1.0000001).abs() < 1e-12);
    }
}
