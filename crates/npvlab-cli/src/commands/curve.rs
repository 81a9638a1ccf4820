//! Curve command implementation.
//!
//! Samples NPV across the display window.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use npvlab_analytics::valuation::sample_curve;
use npvlab_core::CurvePoint;

use crate::cli::OutputFormat;
use crate::commands::{CashFlowArgs, Context, WindowArgs};
use crate::output::{format_amount, print_header, print_info, print_json, print_output};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(flatten)]
    pub cash_flows: CashFlowArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Number of samples, endpoints included (default from config, else 100)
    #[arg(short, long)]
    pub points: Option<usize>,
}

/// One row of the curve table; rates in percent.
#[derive(Debug, Serialize, Tabled)]
struct CurveRow {
    #[tabled(rename = "Rate (%)")]
    rate_pct: String,
    #[tabled(rename = "NPV")]
    npv: String,
}

impl From<&CurvePoint> for CurveRow {
    fn from(point: &CurvePoint) -> Self {
        Self {
            rate_pct: format!("{:.4}", point.rate * 100.0),
            npv: format_amount(point.npv),
        }
    }
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, ctx: &Context) -> Result<()> {
    let series = args.cash_flows.series()?;
    let window = args.window.window(&ctx.settings)?;
    let points = args.points.unwrap_or(ctx.settings.points);

    let curve = sample_curve(&series, &window, points)?;
    tracing::debug!(points = curve.len(), %window, "sampled NPV curve");

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!("NPV Curve {window}"));
            }
            let rows: Vec<CurveRow> = curve.points().iter().map(CurveRow::from).collect();
            print_output(&rows, ctx.format)?;
            if !ctx.quiet {
                let crossings = curve.zero_crossings().len();
                print_info(&format!("{crossings} zero crossing(s) in the window"));
            }
        }
        OutputFormat::Json => print_json(&curve)?,
        OutputFormat::Csv => {
            // Raw fractions, so the file round-trips into other tools
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for point in curve.points() {
                wtr.serialize(point)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            for point in curve.points() {
                println!("{} {}", point.rate, point.npv);
            }
        }
    }

    Ok(())
}
