pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::RangeConfig;
pub use crate::core::compare::{compare, equals, is_same_week_as};
pub use crate::core::range::{
    generate, generate_sequence, generate_week_dates, generate_weeks, Granularity, RangeIter,
    WeekSequence,
};
pub use domain::{Week, WeekDate, WeekEntity};
pub use utils::error::{Result, WeekDateError};
