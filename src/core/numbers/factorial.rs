// src/core/numbers/factorial.rs

use num_bigint::BigUint;

use crate::core::error::NumberError;

/// Largest n whose factorial is finite in f64.
pub const MAX_FINITE_FACTORIAL: i64 = 170;

/// n! as f64: 0! = 1, n! = n * (n-1)!. Exact up to 22!, approximate after
/// that and +inf past 170!.
pub fn factorial(n: i64) -> Result<f64, NumberError> {
    if n < 0 {
        return Err(NumberError::domain("Factorial is not defined for negative numbers."));
    }
    let mut acc = 1.0f64;
    for k in 2..=n {
        acc *= k as f64;
        if acc.is_infinite() {
            break;
        }
    }
    Ok(acc)
}

/// log10(n!) as a sum of logarithms; finite for every n.
pub fn factorial_log10(n: i64) -> Result<f64, NumberError> {
    if n < 0 {
        return Err(NumberError::domain("Factorial is not defined for negative numbers."));
    }
    Ok((2..=n).map(|k| (k as f64).log10()).sum())
}

pub fn factorial_exact(n: u64) -> BigUint {
    (2..=n).fold(BigUint::from(1u32), |acc, k| acc * k)
}
