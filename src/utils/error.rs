use crate::domain::model::Operand;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdderError {
    #[error("Invalid digit {value} at index {index} of {operand} operand")]
    InvalidDigit {
        operand: Operand,
        index: usize,
        value: i32,
    },
}

pub type Result<T> = std::result::Result<T, AdderError>;
