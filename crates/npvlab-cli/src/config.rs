//! Optional TOML settings file.
//!
//! Every field has a default, so an empty file (or no file) behaves like the
//! built-in settings. Command-line flags override whatever is loaded here.
//!
//! ```toml
//! min_rate = -10.0
//! max_rate = 30.0
//! points = 100
//! format = "json"
//!
//! [root_finder]
//! scan_points = 10000
//! precision = 1e-4
//! merge_threshold = 0.01
//! cross_check = "newton"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use npvlab_analytics::roots::{
    CrossCheckMethod, RootFinderConfig, DEFAULT_MERGE_THRESHOLD, DEFAULT_PRECISION,
    DEFAULT_SCAN_POINTS,
};
use npvlab_analytics::valuation::DEFAULT_CURVE_POINTS;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Cash flows used when none are given.
pub const DEFAULT_CASH_FLOWS: &str = "-100, 30, 40, 50, 60";

/// Lower end of the default display window, in percent.
pub const DEFAULT_MIN_RATE_PCT: f64 = -10.0;

/// Upper end of the default display window, in percent.
pub const DEFAULT_MAX_RATE_PCT: f64 = 30.0;

fn default_min_rate() -> f64 {
    DEFAULT_MIN_RATE_PCT
}

fn default_max_rate() -> f64 {
    DEFAULT_MAX_RATE_PCT
}

fn default_points() -> usize {
    DEFAULT_CURVE_POINTS
}

fn default_scan_points() -> usize {
    DEFAULT_SCAN_POINTS
}

fn default_precision() -> f64 {
    DEFAULT_PRECISION
}

fn default_merge_threshold() -> f64 {
    DEFAULT_MERGE_THRESHOLD
}

/// Settings loaded from the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Lower end of the display window, in percent.
    #[serde(default = "default_min_rate")]
    pub min_rate: f64,

    /// Upper end of the display window, in percent.
    #[serde(default = "default_max_rate")]
    pub max_rate: f64,

    /// Curve samples across the display window.
    #[serde(default = "default_points")]
    pub points: usize,

    /// Output format when `--format` is not given.
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Root search parameters.
    #[serde(default)]
    pub root_finder: RootFinderSettings,
}

/// The `[root_finder]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootFinderSettings {
    /// Samples across the search domain.
    #[serde(default = "default_scan_points")]
    pub scan_points: usize,

    /// Bisection stopping width.
    #[serde(default = "default_precision")]
    pub precision: f64,

    /// Minimum separation between reported IRRs.
    #[serde(default = "default_merge_threshold")]
    pub merge_threshold: f64,

    /// Cross-check solver.
    #[serde(default)]
    pub cross_check: CrossCheckMethod,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_rate: DEFAULT_MIN_RATE_PCT,
            max_rate: DEFAULT_MAX_RATE_PCT,
            points: DEFAULT_CURVE_POINTS,
            format: None,
            root_finder: RootFinderSettings::default(),
        }
    }
}

impl Default for RootFinderSettings {
    fn default() -> Self {
        Self {
            scan_points: DEFAULT_SCAN_POINTS,
            precision: DEFAULT_PRECISION,
            merge_threshold: DEFAULT_MERGE_THRESHOLD,
            cross_check: CrossCheckMethod::default(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&text)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    pub fn from_toml(text: &str) -> CliResult<Self> {
        toml::from_str(text).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Root finder configuration; validated when the search runs.
    pub fn root_finder_config(&self) -> RootFinderConfig {
        RootFinderConfig::default()
            .with_scan_points(self.root_finder.scan_points)
            .with_precision(self.root_finder.precision)
            .with_merge_threshold(self.root_finder.merge_threshold)
    }
}
