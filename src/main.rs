//! primelens main — subcommands + positional shorthand + shell by default.
use clap::Parser; // trait import enables PrimelensCli::parse()
use colored::Colorize;
use std::io::IsTerminal;

use primelens::cli::{Command, PrimelensCli};
use primelens::commands;
use primelens::commands::analyze::AnalyzeOpts;
use primelens::config::Settings;
use primelens::core::NumberError;
use primelens::{logging, shell};

fn main() -> anyhow::Result<()> {
    let args = PrimelensCli::parse();
    logging::init(args.debug);

    if args.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match dispatch(args) {
        // Number errors get the same prefix the shell uses.
        Err(e) => match e.downcast_ref::<NumberError>() {
            Some(ne) => {
                eprintln!("{} {}", "err:".red().bold(), ne);
                std::process::exit(1);
            }
            None => Err(e),
        },
        ok => ok,
    }
}

fn dispatch(args: PrimelensCli) -> anyhow::Result<()> {
    let settings = Settings::load(&args.config)?;

    match (args.cmd, args.number_pos) {
        // No subcommand and no number: interactive shell.
        (None, None) | (Some(Command::Shell), _) => shell::start(settings),
        (None, Some(number)) => commands::analyze::main_with_opts(
            settings,
            AnalyzeOpts { number, exact: false, json: false, out: None, threshold: None },
        ),
        (Some(Command::Analyze { number, exact, json, out, threshold }), _) => {
            commands::analyze::main_with_opts(
                settings,
                AnalyzeOpts { number, exact, json, out, threshold },
            )
        }
        (Some(Command::Gcd { a, b }), _) => commands::gcd::main_with_opts(a, b),
        (Some(Command::Config), _) => commands::show_config::main_with_opts(&settings),
    }
}
