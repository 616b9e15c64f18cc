use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of an addition a sequence was passed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    Left,
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Left => write!(f, "left"),
            Operand::Right => write!(f, "right"),
        }
    }
}

/// Base-10 digits, most significant first.
///
/// Construction does not validate; out-of-range values are rejected when
/// the sequence is added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigitSequence {
    digits: Vec<i32>,
}

impl DigitSequence {
    pub fn new(digits: Vec<i32>) -> Self {
        Self { digits }
    }

    pub fn digits(&self) -> &[i32] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.digits
    }

    /// Copy without leading zeros. A non-empty sequence keeps at least one digit.
    pub fn normalized(&self) -> Self {
        Self::new(strip_leading_zeros(&self.digits).to_vec())
    }

    /// Compares by numeric value; the empty sequence counts as zero.
    pub fn is_numerically_equal(&self, other: &Self) -> bool {
        let lhs = strip_leading_zeros(&self.digits);
        let rhs = strip_leading_zeros(&other.digits);
        lhs == rhs || (is_zero(lhs) && is_zero(rhs))
    }
}

pub(crate) fn strip_leading_zeros(digits: &[i32]) -> &[i32] {
    match digits.iter().position(|&d| d != 0) {
        Some(first) => &digits[first..],
        None if digits.is_empty() => digits,
        None => &digits[digits.len() - 1..],
    }
}

fn is_zero(digits: &[i32]) -> bool {
    digits.iter().all(|&d| d == 0)
}

impl From<Vec<i32>> for DigitSequence {
    fn from(digits: Vec<i32>) -> Self {
        Self::new(digits)
    }
}

impl From<&[i32]> for DigitSequence {
    fn from(digits: &[i32]) -> Self {
        Self::new(digits.to_vec())
    }
}

impl AsRef<[i32]> for DigitSequence {
    fn as_ref(&self) -> &[i32] {
        &self.digits
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
