pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::digit_adder::{add, DigitAdder};
pub use domain::model::{DigitSequence, Operand};
pub use domain::ports::Adder;
pub use utils::error::{AdderError, Result};
