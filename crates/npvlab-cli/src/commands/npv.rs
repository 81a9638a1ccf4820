//! NPV command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use npvlab_analytics::valuation::compute_npv;

use crate::cli::OutputFormat;
use crate::commands::{CashFlowArgs, Context};
use crate::output::{print_header, print_json, print_output, KeyValue};

/// Arguments for the npv command.
#[derive(Args, Debug)]
pub struct NpvArgs {
    #[command(flatten)]
    pub cash_flows: CashFlowArgs,

    /// Discount rate in percent, e.g. 10 for 10%
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,
}

#[derive(Serialize)]
struct NpvResult {
    rate: f64,
    npv: f64,
    periods: usize,
}

/// Execute the npv command.
pub fn execute(args: NpvArgs, ctx: &Context) -> Result<()> {
    let series = args.cash_flows.series()?;
    let rate = args.rate / 100.0;

    let npv = compute_npv(&series, rate)?;

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Net Present Value");
            }
            let results = vec![
                KeyValue::new("Cash Flows", series.to_string()),
                KeyValue::from_percent("Discount Rate", rate),
                KeyValue::from_amount("NPV", npv),
            ];
            print_output(&results, ctx.format)?;
        }
        OutputFormat::Json => print_json(&NpvResult {
            rate,
            npv,
            periods: series.len(),
        })?,
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.serialize(NpvResult {
                rate,
                npv,
                periods: series.len(),
            })?;
            wtr.flush()?;
        }
        OutputFormat::Minimal => println!("{npv}"),
    }

    Ok(())
}
