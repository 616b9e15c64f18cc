use crate::domain::model::DigitSequence;
use crate::utils::error::Result;

pub trait Adder: Send + Sync {
    /// `None` on either side yields `Ok(None)`.
    fn add(&self, left: Option<&[i32]>, right: Option<&[i32]>) -> Result<Option<DigitSequence>>;
}
