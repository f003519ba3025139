//! Binds a `Report` to the five output regions plus the disclosure control.

use colored::Colorize;

use crate::core::analysis::{FactorialOutcome, Report};
use crate::core::disclosure::Disclosure;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    PrimeFactors,
    Lcm,
    Factorial,
    Disclosure,
    DigitSum,
    PerfectSquare,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub region: Region,
    pub label: &'static str,
    pub value: String,
}

impl Line {
    fn new(region: Region, label: &'static str, value: impl Into<String>) -> Self {
        Self { region, label, value: value.into() }
    }

    pub fn plain(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }

    pub fn colored(&self) -> String {
        let label = match self.region {
            Region::Disclosure => self.label.truecolor(255, 240, 0),
            _ => self.label.truecolor(130, 0, 200).bold(),
        };
        format!("{}: {}", label, self.value)
    }
}

pub fn lines(report: &Report, disclosure: Disclosure) -> Vec<Line> {
    let mut out = vec![
        Line::new(Region::PrimeFactors, "Prime Factorization", report.prime_factors.to_string()),
        Line::new(Region::Lcm, "LCM", report.lcm.to_string()),
    ];
    match &report.factorial {
        FactorialOutcome::Plain { value } => {
            out.push(Line::new(Region::Factorial, "Factorial", value.clone()));
        }
        FactorialOutcome::Abbreviated { scientific, exact } => {
            out.push(Line::new(Region::Factorial, "Factorial (Approx)", scientific.to_string()));
            if let Some(exact) = exact {
                out.push(match disclosure {
                    Disclosure::Shown => Line::new(Region::Disclosure, "Exact", exact.clone()),
                    Disclosure::Hidden => {
                        Line::new(Region::Disclosure, "Exact", "[hidden; toggle to show]")
                    }
                });
            }
        }
        FactorialOutcome::Failed { message } => {
            out.push(Line::new(Region::Factorial, "Factorial", message.clone()));
        }
    }
    out.push(Line::new(Region::DigitSum, "Sum of Digits", report.digit_sum.to_string()));
    out.push(Line::new(Region::PerfectSquare, "Is Perfect Square", report.perfect_square.to_string()));
    out
}

pub fn to_plain(lines: &[Line]) -> String {
    lines.iter().map(|l| l.plain() + "\n").collect()
}

pub fn to_colored(lines: &[Line]) -> String {
    lines.iter().map(|l| l.colored() + "\n").collect()
}
