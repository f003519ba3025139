//! Mantissa/exponent display for values too large to print literally.

use std::fmt;

use serde::Serialize;

use crate::core::error::NumberError;

/// Default cut-over: values strictly above this are shown in scientific form.
pub const DEFAULT_THRESHOLD: f64 = 1e100;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Scientific {
    pub mantissa: f64,
    pub exponent: i64,
}

impl Scientific {
    /// exponent = floor(log10(value)), mantissa = value / 10^exponent.
    pub fn from_value(value: f64) -> Result<Self, NumberError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(NumberError::domain("scientific notation needs a positive finite value"));
        }
        let exponent = value.log10().floor();
        let mantissa = value / 10f64.powf(exponent);
        Ok(Self { mantissa, exponent: exponent as i64 })
    }

    /// Same split from a base-10 logarithm, for values past f64 range.
    pub fn from_log10(log10: f64) -> Result<Self, NumberError> {
        if !log10.is_finite() {
            return Err(NumberError::domain("logarithm must be finite"));
        }
        let exponent = log10.floor();
        Ok(Self { mantissa: 10f64.powf(log10 - exponent), exponent: exponent as i64 })
    }
}

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} × 10^{}", self.mantissa, self.exponent)
    }
}

pub fn format_scientific(value: f64) -> Result<String, NumberError> {
    Scientific::from_value(value).map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_powers_of_ten() {
        assert!(format_scientific(1e150).unwrap().starts_with("1.00 × 10^150"));
        assert_eq!(format_scientific(1.0).unwrap(), "1.00 × 10^0");
    }

    #[test]
    fn rounds_mantissa_to_two_places() {
        assert_eq!(format_scientific(123_456.0).unwrap(), "1.23 × 10^5");
        assert_eq!(format_scientific(0.05).unwrap(), "5.00 × 10^-2");
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        assert!(format_scientific(0.0).is_err());
        assert!(format_scientific(-4.0).is_err());
        assert!(format_scientific(f64::INFINITY).is_err());
        assert!(format_scientific(f64::NAN).is_err());
    }

    #[test]
    fn from_log10_matches_from_value() {
        let a = Scientific::from_value(7.25e306).unwrap();
        let b = Scientific::from_log10(7.25e306f64.log10()).unwrap();
        assert_eq!(a.exponent, b.exponent);
        assert_eq!(a.to_string(), b.to_string());
    }
}
