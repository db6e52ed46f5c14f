//! The custom power function used by both encoder and decoder.

use num_bigint::BigUint;
use num_traits::{One, Pow, Zero};

/// Raises `base` to `exp` with the scheme's special cases.
///
/// A zero base always yields zero, including for `exp == 0`; this
/// deliberately overrides the usual `0^0 = 1` convention and must be kept.
/// Otherwise a zero exponent or a base of one yields one, and everything
/// else is plain integer exponentiation with no modulus, so results grow
/// without bound. [`BigUint`] keeps that exact.
pub fn custom_pow(base: u64, exp: u64) -> BigUint {
    if base == 0 {
        BigUint::zero()
    } else if exp == 0 || base == 1 {
        BigUint::one()
    } else {
        BigUint::from(base).pow(exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_base_dominates() {
        for exp in [0, 1, 2, 17] {
            assert_eq!(custom_pow(0, exp), BigUint::zero());
        }
    }

    #[test]
    fn zero_exponent_is_one_for_nonzero_base() {
        for base in [1, 2, 5, 1000] {
            assert_eq!(custom_pow(base, 0), BigUint::one());
        }
    }

    #[test]
    fn one_base_is_one() {
        for exp in [0, 1, 9, 64] {
            assert_eq!(custom_pow(1, exp), BigUint::one());
        }
    }

    #[test]
    fn general_case_matches_plain_exponentiation() {
        assert_eq!(custom_pow(3, 2), BigUint::from(9u32));
        assert_eq!(custom_pow(3, 9), BigUint::from(19683u32));
        assert_eq!(custom_pow(2, 10), BigUint::from(1024u32));
    }

    #[test]
    fn results_exceed_machine_width() {
        // 5^100 needs well over 128 bits.
        let value = custom_pow(5, 100);
        assert!(value.bits() > 128);
        assert_eq!(value % BigUint::from(5u32), BigUint::zero());
    }
}
