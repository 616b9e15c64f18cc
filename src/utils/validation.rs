use crate::domain::model::Operand;
use crate::utils::error::{AdderError, Result};

pub const MIN_DIGIT: i32 = 0;
pub const MAX_DIGIT: i32 = 9;

pub trait Validate {
    fn validate(&self, operand: Operand) -> Result<()>;
}

impl Validate for [i32] {
    fn validate(&self, operand: Operand) -> Result<()> {
        validate_digits(operand, self)
    }
}

pub fn is_valid_digit(value: i32) -> bool {
    (MIN_DIGIT..=MAX_DIGIT).contains(&value)
}

/// Rejects the first digit outside `0..=9`, reporting its position.
pub fn validate_digits(operand: Operand, digits: &[i32]) -> Result<()> {
    match digits.iter().position(|&d| !is_valid_digit(d)) {
        Some(index) => {
            let value = digits[index];
            tracing::debug!("Rejecting {} operand: digit {} at index {}", operand, value, index);
            Err(AdderError::InvalidDigit {
                operand,
                index,
                value,
            })
        }
        None => Ok(()),
    }
}
