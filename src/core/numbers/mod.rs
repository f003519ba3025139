//! Number-theory routines behind every report.

pub mod discrete_math;
pub mod factorial;
pub mod scientific;

pub use discrete_math::{
    calculate_lcm, gcd, is_perfect_square, is_perfect_square_exact, prime_factorization,
    sum_of_digits, FactorMap,
};
pub use factorial::{factorial, factorial_exact, factorial_log10, MAX_FINITE_FACTORIAL};
pub use scientific::{format_scientific, Scientific, DEFAULT_THRESHOLD};
