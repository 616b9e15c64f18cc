pub mod digit_adder;

pub use crate::domain::model::{DigitSequence, Operand};
pub use crate::domain::ports::Adder;
pub use crate::utils::error::Result;
