// Domain layer: ISO week derivation and the week value types.

pub mod iso_week;
pub mod ports;
pub mod week;
pub mod week_date;

pub use ports::WeekEntity;
pub use week::Week;
pub use week_date::WeekDate;
