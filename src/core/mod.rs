pub mod compare;
pub mod range;

pub use crate::domain::{Week, WeekDate, WeekEntity};
pub use crate::utils::error::Result;
