use csscolorparser::Color;

/// Convert a CSS color value from a color picker or token file to hex.
/// 6-digit output, or 8-digit when the color carries alpha.
/// Handles: oklch, hsl, rgb, hex (3/4/6/8 digits), named colors.
/// Returns None for: transparent, inherit, currentColor, unrecognized.
pub fn to_hex(value: &str) -> Option<String> {
    let trimmed = value.trim();

    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => return None,
        _ => {}
    }

    if let Some(raw) = trimmed.strip_prefix('#') {
        if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return match raw.len() {
            3 | 4 => {
                let expanded: String = raw.chars().flat_map(|c| [c, c]).collect();
                Some(format!("#{}", expanded.to_lowercase()))
            }
            6 | 8 => Some(format!("#{}", raw.to_lowercase())),
            _ => None,
        };
    }

    // Everything else (rgb, hsl, oklch, named, ...)
    match trimmed.parse::<Color>() {
        Ok(color) => {
            let [r, g, b, a] = color.to_rgba8();
            if a < 255 {
                Some(format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a))
            } else {
                Some(format!("#{:02x}{:02x}{:02x}", r, g, b))
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_passthrough() {
        assert_eq!(to_hex("#FF0000"), Some("#ff0000".to_string()));
        assert_eq!(to_hex("  #1e293b "), Some("#1e293b".to_string()));
    }

    #[test]
    fn hex_short_forms_expand() {
        assert_eq!(to_hex("#f00"), Some("#ff0000".to_string()));
        assert_eq!(to_hex("#f008"), Some("#ff000088".to_string()));
    }

    #[test]
    fn hex_8digit_preserved() {
        assert_eq!(to_hex("#ff000080"), Some("#ff000080".to_string()));
    }

    #[test]
    fn bad_hex_rejected() {
        assert_eq!(to_hex("#12"), None);
        assert_eq!(to_hex("#ggg"), None);
    }

    #[test]
    fn rgb_formats() {
        assert_eq!(to_hex("rgb(255, 0, 128)"), Some("#ff0080".to_string()));
        assert_eq!(to_hex("rgb(255 0 0)"), Some("#ff0000".to_string()));
    }

    #[test]
    fn rgba_keeps_alpha() {
        assert_eq!(to_hex("rgba(0, 0, 0, 0.5)"), Some("#00000080".to_string()));
    }

    #[test]
    fn hsl_red() {
        assert_eq!(to_hex("hsl(0, 100%, 50%)"), Some("#ff0000".to_string()));
    }

    #[test]
    fn oklch_red() {
        // oklch(0.637 0.237 25.331) is roughly #fb2c36
        let hex = to_hex("oklch(0.637 0.237 25.331)").expect("csscolorparser should handle oklch");
        let (r, _, _) = super::super::hex::parse_hex_rgb(&hex);
        assert!((248..=254).contains(&r), "red channel {r} too far from 251");
    }

    #[test]
    fn named_color() {
        assert_eq!(to_hex("rebeccapurple"), Some("#663399".to_string()));
        assert_eq!(to_hex("White"), Some("#ffffff".to_string()));
    }

    #[test]
    fn keywords_return_none() {
        assert_eq!(to_hex("transparent"), None);
        assert_eq!(to_hex("inherit"), None);
        assert_eq!(to_hex("currentColor"), None);
        assert_eq!(to_hex("definitely not a color"), None);
    }
}
