use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::ContrastConfig;
use crate::error::ColorError;
use crate::math::apca::{self, ApcaContrast};
use crate::math::wcag;
use crate::types::{ApcaResult, WcagResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Wcag,
    Apca,
}

/// Hook for watching every contrast computation, e.g. to drive a debug
/// panel in the editor. All methods default to no-ops.
pub trait ContrastObserver: Send + Sync {
    fn on_wcag(&self, _fg: &str, _bg: &str, _result: &WcagResult) {}

    /// `outcome` tells apart the cases that all surface as `lc == 0`.
    fn on_apca(&self, _text: &str, _bg: &str, _outcome: ApcaContrast, _result: &ApcaResult) {}

    fn on_fallback(&self, _metric: Metric, _fg: &str, _bg: &str, _error: &ColorError) {}
}

/// Both metrics for one foreground/background combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixCell {
    pub foreground: String,
    pub background: String,
    pub wcag: WcagResult,
    pub apca: ApcaResult,
}

/// Contrast calculator with configurable thresholds and an optional observer.
///
/// The free functions `calculate_wcag_contrast` / `calculate_apca_contrast`
/// behave like `ContrastEngine::default()` without the logging.
#[derive(Clone, Default)]
pub struct ContrastEngine {
    config: ContrastConfig,
    observer: Option<Arc<dyn ContrastObserver>>,
}

impl fmt::Debug for ContrastEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContrastEngine")
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl ContrastEngine {
    pub fn new(config: ContrastConfig) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ContrastObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn config(&self) -> &ContrastConfig {
        &self.config
    }

    pub fn wcag(&self, fg: &str, bg: &str) -> WcagResult {
        match wcag::evaluate(fg, bg, &self.config.wcag) {
            Ok(result) => {
                debug!(
                    "wcag {fg} on {bg}: {:.2}:1 normal={} large={}",
                    result.ratio, result.level.normal, result.level.large
                );
                if let Some(observer) = &self.observer {
                    observer.on_wcag(fg, bg, &result);
                }
                result
            }
            Err(err) => {
                self.report_fallback(Metric::Wcag, fg, bg, &err);
                WcagResult::FALLBACK
            }
        }
    }

    pub fn apca(&self, text: &str, bg: &str) -> ApcaResult {
        match apca::apca_contrast(text, bg) {
            Ok(outcome) => {
                let result = apca::to_result(outcome, &self.config.apca);
                debug!(
                    "apca {text} on {bg}: {outcome:?} normal={} large={}",
                    result.level.normal, result.level.large
                );
                if let Some(observer) = &self.observer {
                    observer.on_apca(text, bg, outcome, &result);
                }
                result
            }
            Err(err) => {
                self.report_fallback(Metric::Apca, text, bg, &err);
                ApcaResult::ZERO
            }
        }
    }

    pub fn cell(&self, fg: &str, bg: &str) -> MatrixCell {
        MatrixCell {
            foreground: fg.to_string(),
            background: bg.to_string(),
            wcag: self.wcag(fg, bg),
            apca: self.apca(fg, bg),
        }
    }

    /// Every foreground against every background, computed in parallel.
    /// Row-major: all backgrounds for `foregrounds[0]` first.
    pub fn palette_matrix<F, B>(&self, foregrounds: &[F], backgrounds: &[B]) -> Vec<MatrixCell>
    where
        F: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        let cols = backgrounds.len();
        (0..foregrounds.len() * cols)
            .into_par_iter()
            .map(|i| self.cell(foregrounds[i / cols].as_ref(), backgrounds[i % cols].as_ref()))
            .collect()
    }

    fn report_fallback(&self, metric: Metric, fg: &str, bg: &str, err: &ColorError) {
        warn!("{metric:?} contrast for {fg:?} on {bg:?} fell back to zero: {err}");
        if let Some(observer) = &self.observer {
            observer.on_fallback(metric, fg, bg, err);
        }
    }
}
