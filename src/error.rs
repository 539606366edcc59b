use thiserror::Error;

/// Failure to turn a color string into something the contrast math can use.
///
/// The public contrast operations never return this; they absorb it into
/// a zero/Fail result. The strict entry points (`hex_to_rgb`,
/// `wcag::contrast_ratio`, `apca::apca_contrast`) hand it to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Hex body (after an optional `#`) is not exactly 6 characters
    #[error("expected 6 hex digits in {input:?}, found {len}")]
    InvalidLength { input: String, len: usize },

    /// Hex body contains a non-hex character
    #[error("invalid hex digit in {input:?}")]
    InvalidDigit { input: String },

    /// CSS value that names no concrete color (`transparent`, `inherit`, typos)
    #[error("cannot resolve {input:?} to a color")]
    Unrecognized { input: String },

    /// Luminance or contrast math produced NaN/infinity
    #[error("non-finite value during {stage}")]
    NonFinite { stage: &'static str },
}

/// Errors from loading or validating a [`crate::config::ContrastConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid contrast config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid threshold {name}: {reason}")]
    InvalidThreshold { name: &'static str, reason: String },

    #[error("invalid page background {0:?}")]
    InvalidPageBackground(String),
}
