//! Numeric normalization for table columns
//!
//! Significant-figure rounding, order-of-magnitude computation and the
//! precision policies used by the column formatter.

use crate::data::constants::{DECIMAL_TOLERANCE, MAX_DECIMALS, MAX_DEFAULT_DECIMALS};
use crate::utils::error::{TableError, TableResult};

/// Decimal order of magnitude of a value
///
/// Returns the integer `k` such that `|value|` lies in `[10^k, 10^(k+1))`.
/// Zero (and any non-finite value) has order `0`.
///
/// ```
/// use tabtex::order_of_magnitude;
///
/// assert_eq!(order_of_magnitude(1000.0), 3);
/// assert_eq!(order_of_magnitude(999.9), 2);
/// assert_eq!(order_of_magnitude(-0.05), -2);
/// assert_eq!(order_of_magnitude(0.0), 0);
/// ```
pub fn order_of_magnitude(value: f64) -> i32 {
    let magnitude = value.abs();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return 0;
    }

    let mut order = magnitude.log10().floor() as i32;
    // log10 can land one off next to exact powers of ten
    if 10f64.powi(order) > magnitude {
        order -= 1;
    } else if 10f64.powi(order + 1) <= magnitude {
        order += 1;
    }
    order
}

/// Round every value to `n` significant figures
///
/// Each value is scaled by `10^(n - 1 - order)`, rounded to the nearest
/// integer (ties away from zero) and scaled back. The magnitude drives the
/// order, so the sign survives untouched. A value whose rounded form would
/// leave the `f64` range (`f64::MAX` at 3 figures) is kept as it is.
///
/// # Errors
///
/// Returns [`TableError::InvalidArgument`] when `n <= 0`.
///
/// ```
/// use tabtex::round_to_significant_figures;
///
/// let rounded = round_to_significant_figures(&[123456.0, -0.0012345, 0.0], 3).unwrap();
/// assert_eq!(rounded, vec![123000.0, -0.00123, 0.0]);
/// assert!(round_to_significant_figures(&[1.0], 0).is_err());
/// ```
pub fn round_to_significant_figures(values: &[f64], n: i32) -> TableResult<Vec<f64>> {
    check_significant(n)?;
    Ok(values.iter().map(|&v| round_significant(v, n)).collect())
}

/// Round a single value to `n` significant figures
pub fn round_value_to_significant_figures(value: f64, n: i32) -> TableResult<f64> {
    check_significant(n)?;
    Ok(round_significant(value, n))
}

fn check_significant(n: i32) -> TableResult<()> {
    if n <= 0 {
        return Err(TableError::invalid(format!(
            "number of significant figures must be positive, got {}",
            n
        )));
    }
    Ok(())
}

fn round_significant(value: f64, n: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exponent = n - 1 - order_of_magnitude(value);
    // Always apply an exact power of ten on the way back
    let rounded = if exponent >= 0 {
        let scale = 10f64.powi(exponent);
        if !scale.is_finite() {
            return value;
        }
        (value * scale).round() / scale
    } else {
        let scale = 10f64.powi(-exponent);
        if !scale.is_finite() {
            return value;
        }
        (value / scale).round() * scale
    };

    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Whether every value has a zero fractional part
///
/// An empty slice counts as integral.
pub fn is_integral(values: &[f64]) -> bool {
    values.iter().all(|v| v.fract() == 0.0)
}

/// Default decimal digit count for a column without an explicit one
///
/// Picks the smallest count in `1..=MAX_DEFAULT_DECIMALS` at which every
/// value is reproduced exactly by its fixed-point rendering, so distinct
/// values never collapse onto the same text.
///
/// When no such count exists the cap is used, widened until the smallest
/// nonzero magnitude keeps its leading digit (never past
/// [`MAX_DECIMALS`]). Tiny values therefore never render as `0.000000`.
///
/// ```
/// use tabtex::default_decimals;
///
/// assert_eq!(default_decimals(&[0.114, 0.206, 0.317]), 3);
/// assert_eq!(default_decimals(&[1.5, 2.0, 10.25]), 2);
/// assert_eq!(default_decimals(&[1.0 / 3.0]), 6);
/// assert_eq!(default_decimals(&[2e-11, 3e-11]), 11);
/// ```
pub fn default_decimals(values: &[f64]) -> usize {
    (1..=MAX_DEFAULT_DECIMALS)
        .find(|&decimals| values.iter().all(|&v| is_exact_at(v, decimals)))
        .unwrap_or_else(|| MAX_DEFAULT_DECIMALS.max(leading_digit_decimals(values)))
}

/// Decimals needed to show the leading digit of the smallest nonzero value
fn leading_digit_decimals(values: &[f64]) -> usize {
    values
        .iter()
        .filter(|v| **v != 0.0)
        .map(|&v| order_of_magnitude(v))
        .min()
        .filter(|&order| order < 0)
        .map_or(0, |order| (order.unsigned_abs() as usize).min(MAX_DECIMALS))
}

fn is_exact_at(value: f64, decimals: usize) -> bool {
    let scaled = value * 10f64.powi(decimals as i32);
    let nearest = scaled.round();
    // A nonzero value rendered as zero is never exact
    if nearest == 0.0 && value != 0.0 {
        return false;
    }
    (scaled - nearest).abs() <= DECIMAL_TOLERANCE * scaled.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_of_magnitude_basic() {
        assert_eq!(order_of_magnitude(1.0), 0);
        assert_eq!(order_of_magnitude(9.99), 0);
        assert_eq!(order_of_magnitude(10.0), 1);
        assert_eq!(order_of_magnitude(123456.0), 5);
        assert_eq!(order_of_magnitude(0.114), -1);
        assert_eq!(order_of_magnitude(0.0012345), -3);
    }

    #[test]
    fn test_order_of_magnitude_powers_of_ten() {
        for k in -8..=15 {
            let v = 10f64.powi(k);
            assert_eq!(order_of_magnitude(v), k, "order of 1e{}", k);
            assert_eq!(order_of_magnitude(-v), k, "order of -1e{}", k);
        }
    }

    #[test]
    fn test_order_of_magnitude_degenerate() {
        assert_eq!(order_of_magnitude(0.0), 0);
        assert_eq!(order_of_magnitude(-0.0), 0);
        assert_eq!(order_of_magnitude(f64::NAN), 0);
        assert_eq!(order_of_magnitude(f64::INFINITY), 0);
    }

    #[test]
    fn test_round_keeps_leading_digits() {
        let rounded = round_to_significant_figures(&[123456.0, 0.0012345], 3).unwrap();
        assert_eq!(rounded, vec![123000.0, 0.00123]);

        let rounded = round_to_significant_figures(&[9.87654], 2).unwrap();
        assert_eq!(rounded, vec![9.9]);
    }

    #[test]
    fn test_round_carries_into_next_order() {
        assert_eq!(round_value_to_significant_figures(9.96, 2).unwrap(), 10.0);
        assert_eq!(round_value_to_significant_figures(999.7, 3).unwrap(), 1000.0);
    }

    #[test]
    fn test_round_preserves_sign() {
        let rounded = round_to_significant_figures(&[-123456.0, -0.0012345], 3).unwrap();
        assert_eq!(rounded, vec![-123000.0, -0.00123]);
    }

    #[test]
    fn test_round_zero_and_non_finite() {
        let rounded = round_to_significant_figures(&[0.0, f64::INFINITY], 4).unwrap();
        assert_eq!(rounded[0], 0.0);
        assert!(rounded[1].is_infinite());
    }

    #[test]
    fn test_round_never_overflows() {
        assert_eq!(round_value_to_significant_figures(f64::MAX, 3).unwrap(), f64::MAX);
        assert_eq!(round_value_to_significant_figures(-f64::MAX, 1).unwrap(), -f64::MAX);

        let rounded = round_to_significant_figures(&[f64::MAX, 1.234e300], 3).unwrap();
        assert!(rounded.iter().all(|v| v.is_finite()));
        assert_eq!(rounded[0], f64::MAX);
    }

    #[test]
    fn test_round_is_idempotent() {
        let values = [123456.0, 0.0012345, -47.123, 3.14159, 2.5e-7, 6.02e20];
        for n in 1..=6 {
            let once = round_to_significant_figures(&values, n).unwrap();
            let twice = round_to_significant_figures(&once, n).unwrap();
            assert_eq!(once, twice, "n = {}", n);
        }
    }

    #[test]
    fn test_round_rejects_non_positive() {
        for n in [0, -1, -10] {
            let err = round_to_significant_figures(&[1.0, 2.0], n).unwrap_err();
            assert!(matches!(err, TableError::InvalidArgument { .. }));
        }
        assert!(round_value_to_significant_figures(1.0, 0).is_err());
    }

    #[test]
    fn test_round_empty() {
        assert!(round_to_significant_figures(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn test_is_integral() {
        assert!(is_integral(&[10.0, 20.0, 30.0]));
        assert!(is_integral(&[-4.0, 0.0, 1e6]));
        assert!(is_integral(&[]));
        assert!(!is_integral(&[10.0, 20.5]));
        assert!(!is_integral(&[f64::NAN]));
    }

    #[test]
    fn test_default_decimals() {
        assert_eq!(default_decimals(&[0.114, 0.206, 0.317]), 3);
        assert_eq!(default_decimals(&[0.5, 3.0]), 1);
        assert_eq!(default_decimals(&[0.00123]), 5);
        assert_eq!(default_decimals(&[std::f64::consts::PI]), MAX_DEFAULT_DECIMALS);
    }

    #[test]
    fn test_default_decimals_tiny_values() {
        // Below the cap nothing is exact, so the leading digit decides
        assert_eq!(default_decimals(&[2e-11, 3e-11]), 11);
        assert_eq!(default_decimals(&[0.5, 4e-9]), 9);
        assert_eq!(default_decimals(&[0.0, 7e-8]), 8);
        assert_eq!(default_decimals(&[1e-300]), MAX_DECIMALS);

        assert!(!is_exact_at(2e-11, 6));
        assert!(is_exact_at(0.0, 1));
    }
}
