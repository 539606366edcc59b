use serde::{Deserialize, Serialize};

use crate::engine::ContrastEngine;
use crate::error::ColorError;
use crate::format::{format_lc, format_ratio};
use crate::types::{ApcaResult, WcagLevel, WcagResult};

use super::color_parse::to_hex;
use super::composite::composite_over;
use super::hex::{extract_hex_alpha, hex_to_rgb, strip_hex_alpha, Rgb};

/// A foreground/background token combination from a design system,
/// e.g. `text.muted` on `surface.card`. Colors are any CSS color value;
/// alpha (8-digit hex, `rgba()`, ...) is composited before measuring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub name: String,
    pub foreground: String,
    pub background: String,
    #[serde(default)]
    pub large_text: bool,
}

/// Level a pair must reach to count as passing an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConformanceTarget {
    #[serde(rename = "AA")]
    WcagAa,
    #[serde(rename = "AAA")]
    WcagAaa,
    #[serde(rename = "APCA")]
    Apca,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairReport {
    pub name: String,
    /// Effective (opaque, composited) foreground as `#RRGGBB`.
    pub foreground: String,
    /// Effective background as `#RRGGBB`.
    pub background: String,
    pub large_text: bool,
    pub wcag: WcagResult,
    pub apca: ApcaResult,
}

impl PairReport {
    pub fn ratio_label(&self) -> String {
        format_ratio(self.wcag.ratio)
    }

    pub fn lc_label(&self) -> String {
        format_lc(self.apca.lc)
    }

    /// Whether this pair meets `target` for its text size.
    pub fn meets(&self, target: ConformanceTarget) -> bool {
        let (wcag, apca) = if self.large_text {
            (self.wcag.level.large, self.apca.level.large)
        } else {
            (self.wcag.level.normal, self.apca.level.normal)
        };
        match target {
            ConformanceTarget::WcagAa => wcag != WcagLevel::Fail,
            ConformanceTarget::WcagAaa => wcag == WcagLevel::Aaa,
            ConformanceTarget::Apca => apca.passes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedPair {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub violations: Vec<PairReport>,
    pub passed: Vec<PairReport>,
    pub skipped: Vec<SkippedPair>,
}

fn resolve(value: &str) -> Result<(Rgb, Option<f64>), ColorError> {
    let hex = to_hex(value).ok_or_else(|| ColorError::Unrecognized {
        input: value.to_string(),
    })?;
    let alpha = extract_hex_alpha(&hex);
    Ok((hex_to_rgb(&strip_hex_alpha(&hex))?, alpha))
}

/// Check contrast for a single token pair.
/// A translucent background is composited over the configured page
/// background, then a translucent foreground over that result.
pub fn check_pair(pair: &TokenPair, engine: &ContrastEngine) -> Result<PairReport, ColorError> {
    let page = hex_to_rgb(&engine.config().page_background)?;
    let (fg, fg_alpha) = resolve(&pair.foreground)?;
    let (bg, bg_alpha) = resolve(&pair.background)?;

    let effective_bg = match bg_alpha {
        Some(a) => composite_over(bg, page, a),
        None => bg,
    };
    let effective_fg = match fg_alpha {
        Some(a) => composite_over(fg, effective_bg, a),
        None => fg,
    };

    let foreground = effective_fg.to_string();
    let background = effective_bg.to_string();
    Ok(PairReport {
        name: pair.name.clone(),
        wcag: engine.wcag(&foreground, &background),
        apca: engine.apca(&foreground, &background),
        foreground,
        background,
        large_text: pair.large_text,
    })
}

/// Check all pairs and sort them into violations / passed / skipped.
/// Pairs whose colors can't be resolved are skipped, not failed.
pub fn check_all_pairs(
    pairs: &[TokenPair],
    target: ConformanceTarget,
    engine: &ContrastEngine,
) -> AuditReport {
    let mut report = AuditReport::default();

    for pair in pairs {
        match check_pair(pair, engine) {
            Ok(result) if result.meets(target) => report.passed.push(result),
            Ok(result) => report.violations.push(result),
            Err(err) => report.skipped.push(SkippedPair {
                name: pair.name.clone(),
                reason: err.to_string(),
            }),
        }
    }

    report
}
