//! Conversions between [`Ordering`] and signed-integer three-way results, where only the sign of
//! the integer carries meaning.

use std::cmp::Ordering;

/// Classifies a signed three-way result by its sign. The magnitude is ignored.
#[inline]
pub fn from_sign(value: impl Into<i64>) -> Ordering {
    value.into().cmp(&0)
}

/// Returns `-1`, `0` or `1`.
#[inline]
pub fn to_sign(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Compares two numbers with relational checks only.
///
/// Deriving the result as `a - b` overflows for operands of opposite sign near the ends of the
/// range, e.g. `i32::MIN - 1` wraps to a positive value and inverts the result.
///
/// Incomparable values, such as NaN, are reported as `Equal`, which is not a consistent ordering.
/// Use `total_cmp` for floats that may contain NaN.
#[inline]
pub fn compare_numeric<N>(a: N, b: N) -> Ordering
where
    N: PartialOrd,
{
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_only() {
        assert_eq!(from_sign(-7), Ordering::Less);
        assert_eq!(from_sign(0), Ordering::Equal);
        assert_eq!(from_sign(i64::MAX), Ordering::Greater);
        assert_eq!(from_sign(i32::MIN), Ordering::Less);
    }

    #[test]
    fn sign_of_ordering() {
        for ord in [Ordering::Less, Ordering::Equal, Ordering::Greater] {
            assert_eq!(from_sign(to_sign(ord)), ord);
        }
    }

    #[test]
    fn numeric_extremes() {
        assert_eq!(compare_numeric(i32::MIN, i32::MAX), Ordering::Less);
        assert_eq!(compare_numeric(i32::MAX, -1), Ordering::Greater);
        assert_eq!(compare_numeric(u64::MAX, u64::MAX), Ordering::Equal);

        // The subtraction based comparison gets this wrong.
        assert!(i32::MIN.wrapping_sub(1) > 0);
        assert_eq!(compare_numeric(i32::MIN, 1), Ordering::Less);
    }

    #[test]
    fn numeric_floats() {
        assert_eq!(compare_numeric(-0.0f64, 0.0), Ordering::Equal);
        assert_eq!(compare_numeric(f64::NEG_INFINITY, f64::MIN), Ordering::Less);
        assert_eq!(compare_numeric(f64::NAN, 1.0), Ordering::Equal);
    }
}
