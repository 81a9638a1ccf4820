//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{AnalyzeArgs, CurveArgs, IrrArgs, NpvArgs};

/// NPV Lab - NPV curves and every IRR of a cash-flow series
#[derive(Parser)]
#[command(name = "npvlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TOML file with default settings
    #[arg(short, long, global = true, env = "NPVLAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Sample the NPV curve across a rate window
    Curve(CurveArgs),

    /// Find every internal rate of return
    Irr(IrrArgs),

    /// Evaluate NPV at a single rate
    Npv(NpvArgs),

    /// Summarize NPV, IRRs and the curve in one report
    Analyze(AnalyzeArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
