use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "primelens",
    about = "primelens — factorization, factorial, digit sum and square test for one integer",
    version,
    propagate_version = true,
    disable_help_subcommand = true,
    args_conflicts_with_subcommands = true
)]
pub struct PrimelensCli {
    /// Global: verbose diagnostics on stderr (PRIMELENS_LOG overrides)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    /// Global: disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    /// Global: path to config (TOML); default: ~/.primelens/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Shorthand for `primelens analyze NUMBER`
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub number_pos: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze one positive integer
    ///
    /// Examples:
    ///   primelens analyze 360
    ///   primelens analyze 120 --exact
    ///   primelens analyze 97 --json --out report.json
    Analyze {
        /// Integer to analyze (text is validated, so blanks and fractions are reported)
        #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
        number: String,

        /// Show the exact value of an abbreviated factorial
        #[arg(long = "exact", action = ArgAction::SetTrue)]
        exact: bool,

        /// Print the report as JSON
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,

        /// Also write the JSON report to FILE
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Override the scientific-notation threshold for this run
        #[arg(long = "threshold", value_name = "X", allow_negative_numbers = true)]
        threshold: Option<f64>,
    },

    /// Greatest common divisor of two non-negative integers
    Gcd {
        #[arg(value_name = "A")]
        a: u64,
        #[arg(value_name = "B")]
        b: u64,
    },

    /// Interactive shell (default when no arguments are given)
    Shell,

    /// Print the effective configuration as TOML
    Config,
}
