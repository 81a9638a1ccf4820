//! Analyze command implementation.
//!
//! One-screen summary of a cash-flow series: NPV at a reference rate, every
//! IRR, and what the curve looks like inside the display window.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use npvlab_analytics::roots::CrossCheckOutcome;
use npvlab_analytics::valuation::{compute_npv, sample_curve};
use npvlab_core::RateRange;

use crate::cli::OutputFormat;
use crate::commands::irr::{irr_rows, IrrRow};
use crate::commands::{explain_irrs, CashFlowArgs, Context, WindowArgs};
use crate::output::{
    format_percent, print_header, print_json, print_output, print_success, print_warning,
    KeyValue,
};

/// Reference discount rate for the summary, in percent.
const DEFAULT_REFERENCE_RATE_PCT: f64 = 10.0;

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub cash_flows: CashFlowArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Reference discount rate in percent
    #[arg(short, long, default_value_t = DEFAULT_REFERENCE_RATE_PCT, allow_negative_numbers = true)]
    pub rate: f64,

    /// Curve samples used to count visible crossings (default from config, else 100)
    #[arg(short, long)]
    pub points: Option<usize>,
}

#[derive(Serialize)]
struct Summary {
    cash_flows: Vec<f64>,
    reference_rate: f64,
    npv_at_reference: f64,
    undiscounted_total: f64,
    sign_changes: usize,
    irrs: Vec<IrrRow>,
    window: RateRange,
    visible_crossings: usize,
    cross_check: CrossCheckOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, ctx: &Context) -> Result<()> {
    let series = args.cash_flows.series()?;
    let window = args.window.window(&ctx.settings)?;
    let points = args.points.unwrap_or(ctx.settings.points);
    let reference_rate = args.rate / 100.0;

    let npv_at_reference = compute_npv(&series, reference_rate)?;
    let curve = sample_curve(&series, &window, points)?;
    let analysis = ctx.find_roots(&series)?;

    let summary = Summary {
        cash_flows: series.as_slice().to_vec(),
        reference_rate,
        npv_at_reference,
        undiscounted_total: series.iter().sum(),
        sign_changes: analysis.sign_changes,
        irrs: irr_rows(&series, &analysis, &window)?,
        window,
        visible_crossings: curve.zero_crossings().len(),
        note: explain_irrs(&series, &analysis, &window),
        cross_check: analysis.cross_check,
    };

    match ctx.format {
        OutputFormat::Table | OutputFormat::Csv => {
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Cash Flow Analysis");
            }
            print_output(&key_values(&summary), ctx.format)?;

            if ctx.format == OutputFormat::Table {
                match &summary.note {
                    Some(note) => print_warning(note),
                    None if !ctx.quiet => print_success("IRR visible in the display window"),
                    None => {}
                }
            }
        }
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Minimal => {
            let irrs: Vec<String> = summary.irrs.iter().map(|r| format_percent(r.rate)).collect();
            println!(
                "NPV: {:.2}, IRR: {}, Sign changes: {}",
                summary.npv_at_reference,
                if irrs.is_empty() { "none".to_string() } else { irrs.join(", ") },
                summary.sign_changes
            );
        }
    }

    Ok(())
}

fn key_values(summary: &Summary) -> Vec<KeyValue> {
    let mut results = vec![
        KeyValue::new("Periods", summary.cash_flows.len().to_string()),
        KeyValue::from_amount("Undiscounted Total", summary.undiscounted_total),
        KeyValue::from_amount(
            format!("NPV @ {}", format_percent(summary.reference_rate)),
            summary.npv_at_reference,
        ),
        KeyValue::new("Sign Changes", summary.sign_changes.to_string()),
    ];

    if summary.irrs.is_empty() {
        results.push(KeyValue::new("IRR", "none"));
    }
    for (i, row) in summary.irrs.iter().enumerate() {
        let label = if summary.irrs.len() == 1 {
            "IRR".to_string()
        } else {
            format!("IRR #{}", i + 1)
        };
        let marker = if row.in_window { "" } else { " (outside window)" };
        results.push(KeyValue::new(label, format!("{}{marker}", format_percent(row.rate))));
    }

    results.push(KeyValue::new("Window", summary.window.to_string()));
    results.push(KeyValue::new(
        "Visible Crossings",
        summary.visible_crossings.to_string(),
    ));
    results
}
