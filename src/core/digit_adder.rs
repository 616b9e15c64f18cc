use crate::core::{Adder, DigitSequence, Operand, Result};
use crate::domain::model::strip_leading_zeros;
use crate::utils::validation::Validate;

const BASE: i32 = 10;

/// Stateless base-10 adder over most-significant-first digit sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitAdder;

impl DigitAdder {
    pub fn new() -> Self {
        Self
    }
}

impl Adder for DigitAdder {
    fn add(&self, left: Option<&[i32]>, right: Option<&[i32]>) -> Result<Option<DigitSequence>> {
        // Absence wins before either side is validated.
        let (left, right) = match (left, right) {
            (Some(left), Some(right)) => (left, right),
            _ => {
                tracing::debug!("Operand absent, propagating absence");
                return Ok(None);
            }
        };

        left.validate(Operand::Left)?;
        right.validate(Operand::Right)?;

        // Empty acts as zero and hands back the other operand as given.
        if left.is_empty() {
            tracing::debug!("Left operand empty, returning right operand unchanged");
            return Ok(Some(DigitSequence::from(right)));
        }
        if right.is_empty() {
            tracing::debug!("Right operand empty, returning left operand unchanged");
            return Ok(Some(DigitSequence::from(left)));
        }

        let sum = add_digits(left, right);
        tracing::trace!(
            "Added {} + {} digits into {} digits",
            left.len(),
            right.len(),
            sum.len()
        );
        Ok(Some(sum))
    }
}

/// Column-wise addition with carry; both inputs must hold valid digits.
fn add_digits(left: &[i32], right: &[i32]) -> DigitSequence {
    let width = left.len().max(right.len());
    let mut reversed = Vec::with_capacity(width + 1);
    let mut carry = 0;

    let mut lhs = left.iter().rev();
    let mut rhs = right.iter().rev();
    for _ in 0..width {
        let column = lhs.next().copied().unwrap_or(0) + rhs.next().copied().unwrap_or(0) + carry;
        reversed.push(column % BASE);
        carry = column / BASE;
    }
    if carry > 0 {
        reversed.push(carry);
    }

    reversed.reverse();
    DigitSequence::new(strip_leading_zeros(&reversed).to_vec())
}

/// Adds two digit sequences, propagating absence.
///
/// ```
/// let left = [1, 2];
/// let right = [9, 9];
/// assert_eq!(digit_adder::add(Some(&left[..]), Some(&right[..])).unwrap(), Some(vec![1, 1, 1]));
/// assert_eq!(digit_adder::add(None, Some(&right[..])).unwrap(), None);
/// ```
pub fn add(left: Option<&[i32]>, right: Option<&[i32]>) -> Result<Option<Vec<i32>>> {
    Ok(DigitAdder::new()
        .add(left, right)?
        .map(DigitSequence::into_inner))
}
