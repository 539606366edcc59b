use crate::types::Polarity;

/// `4.4780...` -> `"4.48:1"`
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}:1")
}

/// `-107.88...` -> `"Lc 107.9"`. The sign is dropped; use [`polarity_label`] for it.
pub fn format_lc(lc: f64) -> String {
    format!("Lc {:.1}", lc.abs())
}

pub fn polarity_label(lc: f64) -> &'static str {
    Polarity::from_lc(lc).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_two_decimals() {
        assert_eq!(format_ratio(21.0), "21.00:1");
        assert_eq!(format_ratio(4.478_07), "4.48:1");
        assert_eq!(format_ratio(0.0), "0.00:1");
    }

    #[test]
    fn lc_drops_sign() {
        assert_eq!(format_lc(106.04), "Lc 106.0");
        assert_eq!(format_lc(-107.88), "Lc 107.9");
        assert_eq!(format_lc(0.0), "Lc 0.0");
        assert_eq!(format_lc(-0.0), "Lc 0.0");
    }

    #[test]
    fn labels() {
        assert_eq!(polarity_label(67.8), "dark text on light background");
        assert_eq!(polarity_label(-67.8), "light text on dark background");
        assert_eq!(polarity_label(0.0), "no meaningful contrast");
    }
}
