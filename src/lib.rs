//! Color contrast core for the design-system builder: WCAG 2.x contrast
//! ratios, APCA lightness contrast, hex normalization, and display formatting.

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod math;
pub mod types;

#[cfg(feature = "napi")]
pub mod bindings;

pub use config::{ApcaThresholds, ContrastConfig, WcagThresholds};
pub use engine::{ContrastEngine, ContrastObserver, MatrixCell, Metric};
pub use error::{ColorError, ConfigError};
pub use format::{format_lc, format_ratio, polarity_label};
pub use math::apca::{calculate_apca_contrast, ApcaContrast};
pub use math::checker::{check_all_pairs, check_pair, AuditReport, ConformanceTarget, PairReport, TokenPair};
pub use math::color_parse::to_hex;
pub use math::hex::{hex_to_rgb, is_valid_hex, normalize_hex, Rgb};
pub use math::wcag::calculate_wcag_contrast;
pub use types::{ApcaLevel, ApcaResult, LevelPair, Polarity, WcagLevel, WcagResult};
