// src/core/numbers/discrete_math.rs

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::core::error::NumberError;

/// Prime factor -> exponent, iterated in increasing prime order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FactorMap(BTreeMap<u64, u32>);

impl FactorMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Bump the exponent of `prime` by one.
    pub fn push(&mut self, prime: u64) {
        *self.0.entry(prime).or_insert(0) += 1;
    }

    pub fn exponent(&self, prime: u64) -> Option<u32> {
        self.0.get(&prime).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.0.iter().map(|(&p, &e)| (p, e))
    }
}

impl FromIterator<(u64, u32)> for FactorMap {
    fn from_iter<I: IntoIterator<Item = (u64, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Map literal, e.g. `{2: 1, 3: 1}`.
impl fmt::Display for FactorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (p, e)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}: {e}")?;
        }
        write!(f, "}}")
    }
}

/// Trial division, divisor advancing by one. Composite divisors never hit
/// because their prime parts are already divided out.
pub fn prime_factorization(n: u64) -> Result<FactorMap, NumberError> {
    if n < 1 {
        return Err(NumberError::invalid_input("Input must be a positive integer."));
    }

    let mut factors = FactorMap::new();
    let mut rest = n;
    let mut divisor: u64 = 2;

    while rest > 1 {
        // Nothing at or below sqrt(rest) divides it, so rest is prime.
        if divisor.saturating_mul(divisor) > rest {
            factors.push(rest);
            break;
        }
        while rest % divisor == 0 {
            factors.push(divisor);
            rest /= divisor;
        }
        divisor += 1;
    }

    Ok(factors)
}

/// Product of prime^exponent over the map; reconstructs the factored number.
/// The empty map gives 1.
pub fn calculate_lcm(factors: &FactorMap) -> Result<u64, NumberError> {
    factors.iter().try_fold(1u64, |acc, (p, e)| {
        p.checked_pow(e)
            .and_then(|pe| acc.checked_mul(pe))
            .ok_or_else(|| NumberError::overflow("product of prime powers does not fit in 64 bits"))
    })
}

pub fn gcd(a: u64, b: u64) -> u64 {
    // Euclid, iterative: gcd(a, 0) = a, gcd(a, b) = gcd(b, a mod b)
    let mut x = a;
    let mut y = b;
    while y != 0 {
        let temp = y;
        y = x % y;
        x = temp;
    }
    x
}

/// Sum of the decimal digits in `n`'s printed form; a sign or any other
/// non-digit is skipped.
pub fn sum_of_digits<T: fmt::Display>(n: T) -> u64 {
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .sum()
}

/// Float test: `sqrt(n) == floor(sqrt(n))`, no tolerance. Above 2^52 some
/// non-squares pass (94906265^2 + 1 does); see [`is_perfect_square_exact`].
pub fn is_perfect_square(n: f64) -> bool {
    let root = n.sqrt();
    root == root.floor()
}

pub fn is_perfect_square_exact(n: u64) -> bool {
    let r = isqrt(n);
    r * r == n
}

/// floor(sqrt(n)), corrected from the f64 estimate.
pub fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    r
}
