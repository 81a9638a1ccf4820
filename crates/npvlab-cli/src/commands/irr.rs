//! IRR command implementation.
//!
//! Lists every IRR of the series and marks which ones fall inside the
//! display window.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use npvlab_analytics::roots::{CrossCheckOutcome, IrrAnalysis};
use npvlab_analytics::valuation::compute_npv;
use npvlab_core::{CashFlowSeries, RateRange};

use crate::cli::OutputFormat;
use crate::commands::{explain_irrs, CashFlowArgs, Context, WindowArgs};
use crate::output::{
    format_percent, print_header, print_info, print_json, print_output, print_warning,
};

/// Arguments for the irr command.
#[derive(Args, Debug)]
pub struct IrrArgs {
    #[command(flatten)]
    pub cash_flows: CashFlowArgs,

    #[command(flatten)]
    pub window: WindowArgs,
}

/// One IRR with its diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct IrrRow {
    /// Rate as a fraction.
    pub rate: f64,
    /// NPV evaluated at the rate.
    pub npv: f64,
    /// Whether the rate lies inside the display window.
    pub in_window: bool,
}

#[derive(Serialize, Tabled)]
struct IrrTableRow {
    #[tabled(rename = "IRR")]
    irr: String,
    #[tabled(rename = "NPV at IRR")]
    npv: String,
    #[tabled(rename = "In Window")]
    in_window: &'static str,
}

#[derive(Serialize)]
struct IrrReport<'a> {
    irrs: &'a [IrrRow],
    sign_changes: usize,
    window: RateRange,
    cross_check: &'a CrossCheckOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

/// Evaluates every IRR of `analysis` against the series and window.
pub fn irr_rows(
    series: &CashFlowSeries,
    analysis: &IrrAnalysis,
    window: &RateRange,
) -> Result<Vec<IrrRow>> {
    analysis
        .irrs
        .iter()
        .map(|rate| -> Result<IrrRow> {
            Ok(IrrRow {
                rate,
                npv: compute_npv(series, rate)?,
                in_window: window.contains(rate),
            })
        })
        .collect()
}

/// Execute the irr command.
pub fn execute(args: IrrArgs, ctx: &Context) -> Result<()> {
    let series = args.cash_flows.series()?;
    let window = args.window.window(&ctx.settings)?;

    let analysis = ctx.find_roots(&series)?;
    let rows = irr_rows(&series, &analysis, &window)?;
    let note = explain_irrs(&series, &analysis, &window);

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Internal Rates of Return");
            }
            if !rows.is_empty() {
                let table: Vec<IrrTableRow> = rows
                    .iter()
                    .map(|row| IrrTableRow {
                        irr: format_percent(row.rate),
                        npv: format!("{:.2e}", row.npv),
                        in_window: if row.in_window { "yes" } else { "no" },
                    })
                    .collect();
                print_output(&table, ctx.format)?;
            }
            if let Some(note) = &note {
                print_warning(note);
            }
            if !ctx.quiet {
                print_info(&format!(
                    "{} sign change(s) in the cash flows",
                    analysis.sign_changes
                ));
            }
        }
        OutputFormat::Json => print_json(&IrrReport {
            irrs: &rows,
            sign_changes: analysis.sign_changes,
            window,
            cross_check: &analysis.cross_check,
            note,
        })?,
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in &rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            let rates: Vec<String> = rows
                .iter()
                .map(|r| format!("{:.4}", r.rate * 100.0))
                .collect();
            println!("{}", rates.join(","));
        }
    }

    Ok(())
}
