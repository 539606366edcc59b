use std::fmt;

use serde::Serialize;

/// WCAG 2.x conformance level for one text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WcagLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    Fail,
}

impl WcagLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::Fail => "Fail",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// APCA outcome for one text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApcaLevel {
    Pass,
    Fail,
}

impl ApcaLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ApcaLevel::Pass => "Pass",
            ApcaLevel::Fail => "Fail",
        }
    }

    pub fn passes(self) -> bool {
        self == ApcaLevel::Pass
    }
}

impl fmt::Display for ApcaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification for normal and large text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelPair<L> {
    pub normal: L,
    pub large: L,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WcagResult {
    pub ratio: f64,
    pub level: LevelPair<WcagLevel>,
}

impl WcagResult {
    /// Result for unparseable input: ratio 0, Fail/Fail.
    pub const FALLBACK: WcagResult = WcagResult {
        ratio: 0.0,
        level: LevelPair {
            normal: WcagLevel::Fail,
            large: WcagLevel::Fail,
        },
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApcaResult {
    /// Signed lightness contrast. Positive = dark text on light bg.
    pub lc: f64,
    pub level: LevelPair<ApcaLevel>,
}

impl ApcaResult {
    /// Result for unparseable input and for both low-contrast short-circuits.
    pub const ZERO: ApcaResult = ApcaResult {
        lc: 0.0,
        level: LevelPair {
            normal: ApcaLevel::Fail,
            large: ApcaLevel::Fail,
        },
    };

    pub fn polarity(&self) -> Polarity {
        Polarity::from_lc(self.lc)
    }
}

/// Which of the two colors is brighter, as encoded by the sign of Lc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    DarkOnLight,
    LightOnDark,
    None,
}

impl Polarity {
    pub fn from_lc(lc: f64) -> Self {
        if lc > 0.0 {
            Polarity::DarkOnLight
        } else if lc < 0.0 {
            Polarity::LightOnDark
        } else {
            Polarity::None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Polarity::DarkOnLight => "dark text on light background",
            Polarity::LightOnDark => "light text on dark background",
            Polarity::None => "no meaningful contrast",
        }
    }
}
