use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};

use tracing::debug;

use crate::config::Settings;
use crate::core::analysis::{Analyzer, Report};
use crate::core::disclosure::Disclosure;
use crate::core::numbers::gcd;
use crate::render;

/// The report currently on screen plus its disclosure state. Replaced as a
/// whole on every calculation, which resets the disclosure to hidden.
#[derive(Debug)]
pub struct Session {
    pub report: Report,
    pub disclosure: Disclosure,
}

impl Session {
    pub fn new(report: Report) -> Self {
        Self { report, disclosure: Disclosure::Hidden }
    }
}

pub fn start(settings: Settings) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        banner();
    }
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_session(stdin.lock(), &mut stdout.lock(), &mut stderr.lock(), settings, interactive)
}

/// Read-eval loop over any line source. `prompt` is off for scripted input.
pub fn run_session<R, W, E>(
    input: R,
    out: &mut W,
    err: &mut E,
    settings: Settings,
    prompt: bool,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let analyzer = Analyzer::new(settings);
    let mut current: Option<Session> = None;
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(
                out,
                "{} {} ",
                "⟦PRIMELENS⟧".bold().truecolor(225, 0, 180),
                "›".truecolor(255, 240, 0)
            )?;
            out.flush().ok();
        }

        let Some(line) = lines.next() else {
            if prompt {
                writeln!(out)?;
            }
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();
        debug!(cmd, ?args, "shell command");

        match cmd {
            "help" | "?" => print_help(out)?,
            "exit" | "quit" => break,

            "calc" => match args.as_slice() {
                [n] => calculate(&analyzer, n, &mut current, out, err)?,
                _ => usage(err, "calc <number>")?,
            },

            "exact" => match current.as_mut() {
                Some(session) if session.report.factorial.has_disclosure() => {
                    session.disclosure.toggle();
                    write_report(out, session)?;
                }
                _ => writeln!(
                    err,
                    "{} no abbreviated factorial to show; calculate a larger number first",
                    "warn:".yellow().bold()
                )?,
            },

            "gcd" => match args.as_slice() {
                [a, b] => match (a.parse::<u64>(), b.parse::<u64>()) {
                    (Ok(a), Ok(b)) => writeln!(out, "{}", gcd(a, b))?,
                    _ => writeln!(err, "{} gcd needs two non-negative integers", "err:".red().bold())?,
                },
                _ => usage(err, "gcd <a> <b>")?,
            },

            "config" => write!(out, "{}", analyzer.settings().to_toml()?)?,

            // Anything else is taken as the number to analyze.
            other if args.is_empty() => calculate(&analyzer, other, &mut current, out, err)?,
            other => writeln!(err, "{} unknown command: {other}", "err:".red().bold())?,
        }
    }

    Ok(())
}

fn calculate<W: Write, E: Write>(
    analyzer: &Analyzer,
    raw: &str,
    current: &mut Option<Session>,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    match analyzer.analyze(raw) {
        Ok(report) => {
            let session = current.insert(Session::new(report));
            write_report(out, session)?;
            if session.report.factorial.has_disclosure() {
                writeln!(out, "{}", "(type 'exact' to toggle the exact factorial)".truecolor(130, 0, 200))?;
            }
        }
        // The previous report stays on screen, untouched.
        Err(e) => writeln!(err, "{} {}", "err:".red().bold(), e)?,
    }
    Ok(())
}

fn write_report<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    write!(out, "{}", render::to_colored(&render::lines(&session.report, session.disclosure)))
}

fn banner() {
    println!(
        "\n{}  \n{}  \n",
        "╔══════════════════════════════════════════════════╗".truecolor(225, 0, 180),
        "║              p r i m e l e n s                   ║"
            .truecolor(255, 240, 0)
            .bold(),
    );
    println!(
        "{}  {}",
        "╚══════════════════════════════════════════════════╝".truecolor(225, 0, 180),
        "type 'help' for commands".truecolor(130, 0, 200)
    );
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}\n\
         {}\n  <number>            # analyze a positive integer\n  calc <number>       # same, explicit\n  exact               # show/hide the exact factorial\n\
         {}\n  gcd <a> <b>         # greatest common divisor\n  config              # print effective settings\n\
         {}\n  help                # show this help\n  exit                # quit shell\n",
        "primelens — number properties shell".bold().truecolor(0, 255, 180),
        "Analyze:".truecolor(130, 0, 200),
        "Extras:".truecolor(130, 0, 200),
        "Shell:".truecolor(130, 0, 200),
    )
}

fn usage<E: Write>(err: &mut E, s: &str) -> io::Result<()> {
    writeln!(err, "{} {}", "usage:".yellow().bold(), s)
}
