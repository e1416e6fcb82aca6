//! Arithmetic builtins: `+ - * /`
//!
//! All arithmetic is checked 64-bit integer arithmetic. Division rounds
//! toward negative infinity.

use crate::error::RuntimeError;
use std::io::Write;

pub fn vm_add(_out: &mut dyn Write, args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    args[0]
        .checked_add(args[1])
        .map(Some)
        .ok_or(RuntimeError::IntegerOverflow("+"))
}

pub fn vm_sub(_out: &mut dyn Write, args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    args[0]
        .checked_sub(args[1])
        .map(Some)
        .ok_or(RuntimeError::IntegerOverflow("-"))
}

pub fn vm_mul(_out: &mut dyn Write, args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    args[0]
        .checked_mul(args[1])
        .map(Some)
        .ok_or(RuntimeError::IntegerOverflow("*"))
}

pub fn vm_div(_out: &mut dyn Write, args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    floor_div(args[0], args[1]).map(Some)
}

/// Integer division rounding toward negative infinity
pub fn floor_div(dividend: i64, divisor: i64) -> Result<i64, RuntimeError> {
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    let quotient = dividend
        .checked_div(divisor)
        .ok_or(RuntimeError::IntegerOverflow("/"))?;
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_floor_division() {
        assert_eq!(floor_div(7, 2), Ok(3));
        assert_eq!(floor_div(-7, 2), Ok(-4));
        assert_eq!(floor_div(7, -2), Ok(-4));
        assert_eq!(floor_div(-7, -2), Ok(3));
        assert_eq!(floor_div(-6, 2), Ok(-3));
        assert_eq!(floor_div(1, 0), Err(RuntimeError::DivisionByZero));
        assert_eq!(floor_div(i64::MIN, -1), Err(RuntimeError::IntegerOverflow("/")));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let mut sink: Vec<u8> = Vec::new();
        assert_eq!(
            vm_add(&mut sink, &[i64::MAX, 1]),
            Err(RuntimeError::IntegerOverflow("+"))
        );
        assert_eq!(
            vm_mul(&mut sink, &[i64::MIN, 2]),
            Err(RuntimeError::IntegerOverflow("*"))
        );
        assert_eq!(vm_sub(&mut sink, &[3, 5]), Ok(Some(-2)));
    }

    proptest! {
        #[test]
        fn prop_floor_division_matches_euclid_bounds(a in -10_000i64..10_000, b in -100i64..100) {
            prop_assume!(b != 0);
            let q = floor_div(a, b).unwrap();
            let r = a - q * b;
            // remainder takes the sign of the divisor
            prop_assert!(r == 0 || (r > 0) == (b > 0));
            prop_assert!(r.abs() < b.abs());
        }
    }
}
