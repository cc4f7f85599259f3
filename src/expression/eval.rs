use log::{debug, trace};

use crate::expression::ast::{Node, NodeKind, Operator};

impl Operator {
    /// Combine two operand values
    ///
    /// Division is plain IEEE division: a zero divisor yields infinity or NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
            Operator::Pow => truncated_power(left, right),
        }
    }
}

impl Node {
    /// Value of this subtree, computed on first call and cached afterwards
    ///
    /// Only caches inside this subtree are filled; each is written at most once.
    pub fn value(&self) -> f64 {
        *self.value.get_or_init(|| {
            let result = match self.kind() {
                NodeKind::Literal(digit) => f64::from(*digit),
                NodeKind::Grouped(inner) => inner.value(),
                NodeKind::Binary { op, left, right } => {
                    let left = left.value();
                    let right = right.value();
                    let result = op.apply(left, right);
                    trace!("{} {} {} = {}", left, op.symbol(), right, result);
                    result
                }
            };
            debug!("Node '{}' evaluated to {}", self, result);
            result
        })
    }
}

/// Raise `base` to `exponent` truncated toward zero, by repeated multiplication
///
/// A negative exponent yields the reciprocal of the positive power. Once the
/// running product is zero, infinite or NaN, or `|base| == 1`, further
/// multiplications can only change its sign, so the loop stops and applies the
/// parity of what is left.
pub(crate) fn truncated_power(base: f64, exponent: f64) -> f64 {
    // `as` saturates out-of-range values and maps NaN to 0
    let exponent = exponent.trunc() as i64;
    let mut remaining = exponent.unsigned_abs();
    let mut product = 1.0_f64;

    while remaining > 0 {
        if product == 0.0 || !product.is_finite() || base.abs() == 1.0 {
            if base.is_sign_negative() && remaining % 2 == 1 {
                product = -product;
            }
            break;
        }
        product *= base;
        remaining -= 1;
    }

    if exponent < 0 { 1.0 / product } else { product }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_power_basic() {
        assert_eq!(truncated_power(2.0, 3.0), 8.0);
        assert_eq!(truncated_power(3.0, 2.0), 9.0);
        assert_eq!(truncated_power(5.0, 1.0), 5.0);
    }

    #[test]
    fn test_truncated_power_zero_exponent() {
        assert_eq!(truncated_power(2.0, 0.0), 1.0);
        assert_eq!(truncated_power(0.0, 0.0), 1.0);
        assert_eq!(truncated_power(2.0, -0.0), 1.0);
    }

    #[test]
    fn test_truncated_power_truncates_fraction() {
        assert_eq!(truncated_power(2.0, 2.9), 4.0);
        assert_eq!(truncated_power(2.0, 0.5), 1.0);
        assert_eq!(truncated_power(2.0, -1.5), 0.5);
    }

    #[test]
    fn test_truncated_power_negative_exponent() {
        assert_eq!(truncated_power(2.0, -2.0), 0.25);
        assert_eq!(truncated_power(0.0, -1.0), f64::INFINITY);
    }

    #[test]
    fn test_truncated_power_matches_full_loop_after_saturation() {
        fn full_loop(base: f64, exponent: i64) -> f64 {
            let mut product = 1.0_f64;
            for _ in 0..exponent.unsigned_abs() {
                product *= base;
            }
            if exponent < 0 { 1.0 / product } else { product }
        }

        for &base in &[-3.0, -2.0, -1.0, -0.5, 0.0, -0.0, 0.5, 1.0, 2.0, 9.0] {
            for &exponent in &[-1500_i64, -1101, -3, -1, 0, 1, 2, 3, 1100, 1101, 2500] {
                let expected = full_loop(base, exponent);
                let actual = truncated_power(base, exponent as f64);
                assert!(
                    expected.to_bits() == actual.to_bits()
                        || (expected.is_nan() && actual.is_nan()),
                    "{}^{}: expected {}, got {}",
                    base,
                    exponent,
                    expected,
                    actual
                );
            }
        }
    }

    #[test]
    fn test_truncated_power_huge_exponent_terminates() {
        assert_eq!(truncated_power(9.0, 1e300), f64::INFINITY);
        assert_eq!(truncated_power(1.0, f64::INFINITY), 1.0);
        assert_eq!(truncated_power(-1.0, 3e18 + 1.0).abs(), 1.0);
    }

    #[test]
    fn test_operator_apply_division_by_zero() {
        assert_eq!(Operator::Div.apply(3.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Div.apply(-3.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Div.apply(0.0, 0.0).is_nan());
    }
}
