//! One computation pass: raw input text in, a complete `Report` out.

use serde::Serialize;
use tracing::debug;

use crate::config::{Settings, SquareTest};
use crate::core::error::NumberError;
use crate::core::numbers::{
    calculate_lcm, factorial, factorial_exact, factorial_log10, is_perfect_square,
    is_perfect_square_exact, prime_factorization, sum_of_digits, FactorMap, Scientific,
    MAX_FINITE_FACTORIAL,
};

const INVALID_INPUT: &str = "Please enter a valid positive integer.";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FactorialOutcome {
    /// At or below the threshold: the literal value.
    Plain { value: String },
    /// Above the threshold. `exact` is present only when the disclosure is enabled.
    Abbreviated {
        scientific: Scientific,
        #[serde(skip_serializing_if = "Option::is_none")]
        exact: Option<String>,
    },
    /// The factorial could not be produced; the message goes in its output region.
    Failed { message: String },
}

impl FactorialOutcome {
    pub fn has_disclosure(&self) -> bool {
        matches!(self, FactorialOutcome::Abbreviated { exact: Some(_), .. })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub input: u64,
    pub prime_factors: FactorMap,
    pub lcm: u64,
    pub factorial: FactorialOutcome,
    pub digit_sum: u64,
    pub perfect_square: bool,
}

/// Accepts integral text such as `42`, `+42`, `42.0` or `1e3`; rejects blank,
/// non-numeric, fractional, non-positive and out-of-range entries.
pub fn parse_input(raw: &str, max_input: u64) -> Result<u64, NumberError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(NumberError::invalid_input(INVALID_INPUT));
    }
    let n = match s.parse::<u64>() {
        Ok(n) => n,
        Err(_) => {
            let v: f64 = s.parse().map_err(|_| NumberError::invalid_input(INVALID_INPUT))?;
            if !v.is_finite() || v <= 0.0 || v.fract() != 0.0 || v > max_input as f64 {
                return Err(NumberError::invalid_input(INVALID_INPUT));
            }
            v as u64
        }
    };
    if n == 0 {
        return Err(NumberError::invalid_input(INVALID_INPUT));
    }
    if n > max_input {
        return Err(NumberError::InvalidInput(format!(
            "{n} is larger than the supported maximum {max_input}."
        )));
    }
    Ok(n)
}

#[derive(Clone, Debug, Default)]
pub struct Analyzer {
    settings: Settings,
}

impl Analyzer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn analyze(&self, raw: &str) -> Result<Report, NumberError> {
        let n = parse_input(raw, self.settings.max_input)?;
        self.analyze_number(n)
    }

    pub fn analyze_number(&self, n: u64) -> Result<Report, NumberError> {
        let prime_factors = prime_factorization(n)?;
        let lcm = calculate_lcm(&prime_factors)?;
        let factorial = self.factorial_outcome(n);
        let digit_sum = sum_of_digits(n);
        let perfect_square = match self.settings.square_test {
            SquareTest::Float => is_perfect_square(n as f64),
            SquareTest::Exact => is_perfect_square_exact(n),
        };
        debug!(n, factors = prime_factors.len(), lcm, digit_sum, perfect_square, "analyzed");

        Ok(Report { input: n, prime_factors, lcm, factorial, digit_sum, perfect_square })
    }

    fn factorial_outcome(&self, n: u64) -> FactorialOutcome {
        match self.try_factorial(n) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(n, error = %e, "factorial not produced");
                FactorialOutcome::Failed { message: e.to_string() }
            }
        }
    }

    fn try_factorial(&self, n: u64) -> Result<FactorialOutcome, NumberError> {
        if n > self.settings.factorial_limit {
            return Err(NumberError::limit_exceeded(&format!(
                "factorial argument {n} is above the configured limit {}",
                self.settings.factorial_limit
            )));
        }
        let signed = i64::try_from(n).map_err(|_| {
            NumberError::limit_exceeded(&format!("factorial argument {n} does not fit in 64-bit signed range"))
        })?;
        let approx = factorial(signed)?;
        if approx > self.settings.threshold {
            let scientific = if signed <= MAX_FINITE_FACTORIAL {
                Scientific::from_value(approx)?
            } else {
                Scientific::from_log10(factorial_log10(signed)?)?
            };
            let exact = self.settings.exact_toggle.then(|| factorial_exact(n).to_string());
            Ok(FactorialOutcome::Abbreviated { scientific, exact })
        } else {
            Ok(FactorialOutcome::Plain { value: factorial_exact(n).to_string() })
        }
    }
}
