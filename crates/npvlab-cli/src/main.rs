//! NPV Lab CLI - NPV curves and every IRR of a cash-flow series.
//!
//! # Usage
//!
//! ```bash
//! # Sample the NPV curve between -10% and 30%
//! npvlab curve "-100, 30, 40, 50, 60"
//!
//! # Every IRR of a non-conventional project
//! npvlab irr "-100, 230, -132"
//!
//! # NPV at 8%
//! npvlab npv "-100, 30, 40, 50, 60" --rate 8
//!
//! # Full summary as JSON
//! npvlab --format json analyze "-100, 230, -132" --max-rate 50
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;
    let ctx = Context {
        format: cli.format.or(settings.format).unwrap_or_default(),
        quiet: cli.quiet,
        settings,
    };
    tracing::debug!(format = ?ctx.format, "starting npvlab");

    // Execute command
    match cli.command {
        Commands::Curve(args) => commands::curve::execute(args, &ctx)?,
        Commands::Irr(args) => commands::irr::execute(args, &ctx)?,
        Commands::Npv(args) => commands::npv::execute(args, &ctx)?,
        Commands::Analyze(args) => commands::analyze::execute(args, &ctx)?,
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
