//! Property tests for digit addition.
//!
//! Run with: `cargo test --test properties`

use digit_adder::{add, AdderError, DigitSequence, Operand};
use proptest::prelude::*;

fn digits(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(0..=9i32, 0..=max_len)
}

fn non_empty_digits(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(0..=9i32, 1..=max_len)
}

fn invalid_digit() -> impl Strategy<Value = i32> {
    prop_oneof![i32::MIN..0, 10..=i32::MAX]
}

fn to_u128(digits: &[i32]) -> u128 {
    digits
        .iter()
        .fold(0u128, |acc, &d| acc * 10 + u128::try_from(d).unwrap())
}

fn sum(left: &[i32], right: &[i32]) -> Vec<i32> {
    add(Some(left), Some(right)).unwrap().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: absence on either side wins, even over invalid digits.
    #[test]
    fn property_absence_propagates(x in proptest::collection::vec(any::<i32>(), 0..8)) {
        prop_assert_eq!(add(None, Some(x.as_slice())), Ok(None));
        prop_assert_eq!(add(Some(x.as_slice()), None), Ok(None));
    }

    /// PROPERTY: the empty sequence returns the other operand unchanged.
    #[test]
    fn property_empty_is_identity(x in non_empty_digits(24)) {
        prop_assert_eq!(sum(&[], &x), x.clone());
        prop_assert_eq!(sum(&x, &[]), x);
    }

    /// PROPERTY: operand order does not change the numeric result.
    #[test]
    fn property_commutative(x in digits(40), y in digits(40)) {
        let xy = DigitSequence::from(sum(&x, &y));
        let yx = DigitSequence::from(sum(&y, &x));
        prop_assert!(xy.is_numerically_equal(&yx), "{} vs {}", xy, yx);
    }

    /// PROPERTY: matches integer addition wherever u128 can hold the operands.
    #[test]
    fn property_agrees_with_integer_addition(
        x in non_empty_digits(30),
        y in non_empty_digits(30),
    ) {
        let expected = to_u128(&x) + to_u128(&y);
        prop_assert_eq!(to_u128(&sum(&x, &y)), expected);
    }

    /// PROPERTY: a result from two non-empty operands has no leading zero
    /// unless it is exactly `[0]`.
    #[test]
    fn property_result_is_normalized(x in non_empty_digits(20), y in non_empty_digits(20)) {
        let result = sum(&x, &y);
        prop_assert!(!result.is_empty(), "empty sum of {:?} and {:?}", x, y);
        prop_assert!(result == vec![0] || result[0] != 0, "{:?}", result);
        prop_assert!(result.iter().all(|d| (0..=9).contains(d)), "{:?}", result);
    }

    /// PROPERTY: an out-of-range digit anywhere on either side is rejected.
    #[test]
    fn property_invalid_digit_rejected(
        valid in non_empty_digits(10),
        mut other in non_empty_digits(10),
        bad in invalid_digit(),
        position in any::<prop::sample::Index>(),
    ) {
        let index = position.index(other.len());
        other[index] = bad;

        let left_err = add(Some(other.as_slice()), Some(valid.as_slice())).unwrap_err();
        prop_assert_eq!(left_err, AdderError::InvalidDigit {
            operand: Operand::Left,
            index,
            value: bad,
        });

        let right_err = add(Some(valid.as_slice()), Some(other.as_slice())).unwrap_err();
        prop_assert_eq!(right_err, AdderError::InvalidDigit {
            operand: Operand::Right,
            index,
            value: bad,
        });
    }
}
