//! CLI command implementations.

pub mod analyze;
pub mod curve;
pub mod irr;
pub mod npv;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use curve::CurveArgs;
pub use irr::IrrArgs;
pub use npv::NpvArgs;

use clap::Args;

use npvlab_analytics::roots::{find_roots_with, IrrAnalysis};
use npvlab_core::{CashFlowSeries, RateRange};

use crate::cli::OutputFormat;
use crate::config::{Settings, DEFAULT_CASH_FLOWS};
use crate::error::{CliError, CliResult};

/// Lowest display-window rate accepted on the command line, in percent.
pub const MIN_WINDOW_PCT: f64 = -99.0;

/// Highest display-window rate accepted on the command line, in percent.
pub const MAX_WINDOW_PCT: f64 = 1000.0;

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved output format.
    pub format: OutputFormat,
    /// Suppress headers and informational lines.
    pub quiet: bool,
    /// Loaded settings.
    pub settings: Settings,
}

impl Context {
    /// Runs the root search with the configured parameters and cross-check.
    pub fn find_roots(&self, series: &CashFlowSeries) -> anyhow::Result<IrrAnalysis> {
        let config = self.settings.root_finder_config();
        let solver = self.settings.root_finder.cross_check.solver();
        tracing::debug!(
            cross_check = %self.settings.root_finder.cross_check,
            scan_points = config.scan_points,
            "searching for IRRs"
        );
        Ok(find_roots_with(series, &config, solver.as_deref())?)
    }
}

/// Cash-flow input shared by every command.
#[derive(Args, Debug)]
pub struct CashFlowArgs {
    /// Cash flows per period, comma-separated, starting at period 0
    #[arg(value_name = "CASH_FLOWS", default_value = DEFAULT_CASH_FLOWS, allow_hyphen_values = true)]
    pub cash_flows: String,
}

impl CashFlowArgs {
    /// Parses the cash-flow text.
    pub fn series(&self) -> CliResult<CashFlowSeries> {
        parse_cash_flows(&self.cash_flows)
    }
}

/// Display window flags shared by the charting commands.
#[derive(Args, Debug)]
pub struct WindowArgs {
    /// Lowest rate shown, in percent (default from config, else -10)
    #[arg(long, allow_negative_numbers = true)]
    pub min_rate: Option<f64>,

    /// Highest rate shown, in percent (default from config, else 30)
    #[arg(long, allow_negative_numbers = true)]
    pub max_rate: Option<f64>,
}

impl WindowArgs {
    /// Resolves the window against the settings and validates it.
    pub fn window(&self, settings: &Settings) -> CliResult<RateRange> {
        parse_window(
            self.min_rate.unwrap_or(settings.min_rate),
            self.max_rate.unwrap_or(settings.max_rate),
        )
    }
}

/// Parses comma-separated cash flows.
///
/// Each token is trimmed and parsed as a number; the first bad token is
/// reported with its one-based position.
pub fn parse_cash_flows(text: &str) -> CliResult<CashFlowSeries> {
    if text.trim().is_empty() {
        return Err(CliError::EmptyCashFlows);
    }

    let flows = text
        .split(',')
        .enumerate()
        .map(|(i, token)| {
            let token = token.trim();
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CliError::InvalidCashFlow {
                    token: token.to_string(),
                    position: i + 1,
                })
        })
        .collect::<CliResult<Vec<f64>>>()?;

    CashFlowSeries::new(flows).map_err(|_| CliError::EmptyCashFlows)
}

/// Builds a display window from percentages.
pub fn parse_window(min_pct: f64, max_pct: f64) -> CliResult<RateRange> {
    for pct in [min_pct, max_pct] {
        if !(MIN_WINDOW_PCT..=MAX_WINDOW_PCT).contains(&pct) {
            return Err(CliError::InvalidWindow(format!(
                "{pct}% is outside {MIN_WINDOW_PCT}%..{MAX_WINDOW_PCT}%"
            )));
        }
    }
    if min_pct >= max_pct {
        return Err(CliError::InvalidWindow(format!(
            "minimum {min_pct}% must be below maximum {max_pct}%"
        )));
    }

    RateRange::from_percent(min_pct, max_pct).map_err(|e| CliError::InvalidWindow(e.to_string()))
}

/// Why an IRR set is empty, or why none of its rates are visible.
pub fn explain_irrs(
    series: &CashFlowSeries,
    analysis: &IrrAnalysis,
    window: &RateRange,
) -> Option<String> {
    if analysis.irrs.is_empty() {
        if series.is_single_signed() {
            Some(
                "No IRR: the cash flows never change sign, so NPV never crosses zero."
                    .to_string(),
            )
        } else if analysis.sign_changes == 0 {
            Some(
                "No IRR: no adjacent sign change (zero entries separate the signs), and NPV has no root in the searched range."
                    .to_string(),
            )
        } else {
            Some(format!(
                "No IRR: the cash flows change sign {} time(s), but NPV has no root in the searched range.",
                analysis.sign_changes
            ))
        }
    } else if analysis.irrs.within(window).is_empty() {
        Some(format!("IRR found, but outside the displayed range {window}."))
    } else {
        None
    }
}
