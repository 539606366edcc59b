use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ColorError;

/// An 8-bit-per-channel sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

/// Canonical `#RRGGBB` form.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Coerce any string into a canonical `#RRGGBB` hex color. Never fails.
///
/// Leading `#`s are stripped and non-hex characters dropped. Three remaining
/// digits expand as shorthand (`abc` -> `AABBCC`); anything else is
/// right-padded with `0` and cut to six digits, so `""` becomes `#000000`
/// and `#12` becomes `#120000`.
pub fn normalize_hex(input: &str) -> String {
    let cleaned: String = input
        .trim_start_matches('#')
        .chars()
        .filter(char::is_ascii_hexdigit)
        .collect();

    let mut digits = if cleaned.len() == 3 {
        cleaned.chars().flat_map(|c| [c, c]).collect()
    } else {
        cleaned
    };
    while digits.len() < 6 {
        digits.push('0');
    }
    digits.truncate(6);

    format!("#{}", digits.to_ascii_uppercase())
}

/// True for exactly six hex digits with at most one leading `#`.
/// Shorthand (`#abc`) is not accepted; run it through [`normalize_hex`] first.
pub fn is_valid_hex(input: &str) -> bool {
    let body = input.strip_prefix('#').unwrap_or(input);
    body.len() == 6 && body.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Strictly parse `#RRGGBB` / `RRGGBB` into channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let body = hex.strip_prefix('#').unwrap_or(hex);
    if body.len() != 6 {
        return Err(ColorError::InvalidLength {
            input: hex.to_string(),
            len: body.chars().count(),
        });
    }
    if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit {
            input: hex.to_string(),
        });
    }

    // All six bytes are ASCII hex digits, so these slices are char boundaries.
    let channel = |i: usize| {
        u8::from_str_radix(&body[i..i + 2], 16).map_err(|_| ColorError::InvalidDigit {
            input: hex.to_string(),
        })
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Parse a 6-digit hex string to RGB channels (0-255).
/// Handles 8-digit hex (extracts RGB, ignores alpha bytes).
/// Returns (0, 0, 0) on malformed input.
pub fn parse_hex_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() < 6 {
        return (0, 0, 0);
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    (channel(0..2), channel(2..4), channel(4..6))
}

/// Extract alpha from 8-digit hex (#rrggbbaa) as f64 0.0-1.0.
/// Returns None if 6-digit hex or alpha >= 0.999.
pub fn extract_hex_alpha(hex: &str) -> Option<f64> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() == 8 {
        let a = u8::from_str_radix(hex.get(6..8)?, 16).ok()?;
        let alpha = a as f64 / 255.0;
        if alpha >= 0.999 { None } else { Some(alpha) }
    } else {
        None
    }
}

/// Strip alpha channel from 8-digit hex -> 6-digit hex.
pub fn strip_hex_alpha(hex: &str) -> String {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    match raw.get(0..6) {
        Some(rgb) if raw.len() == 8 => format!("#{rgb}"),
        _ => hex.to_string(),
    }
}
