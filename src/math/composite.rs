use super::hex::Rgb;

/// Flatten a translucent color onto an opaque backdrop.
/// Per channel: round(top * alpha + below * (1 - alpha)), alpha clamped to [0, 1].
pub fn composite_over(top: Rgb, below: Rgb, alpha: f64) -> Rgb {
    let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
    let blend = |t: u8, b: u8| -> u8 { (t as f64 * alpha + b as f64 * (1.0 - alpha)).round() as u8 };
    Rgb::new(blend(top.r, below.r), blend(top.g, below.g), blend(top.b, below.b))
}
