use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeekDateError {
    #[error("Invalid weekday: {value} (expected 1 = Monday .. 7 = Sunday)")]
    InvalidWeekday { value: u32 },

    #[error("Invalid ISO week: {week_year}-W{week_number:02} does not exist")]
    InvalidWeek { week_year: i32, week_number: u32 },

    #[error("Invalid ISO week string '{value}': {reason}")]
    InvalidWeekString { value: String, reason: String },

    #[error("Invalid range: {to} is before {from}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("Date arithmetic out of range: {date} {days:+} days")]
    DateOutOfRange { date: NaiveDate, days: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 日曆計算錯誤 (週、星期、日期運算)
    Calendar,
    /// 輸入格式錯誤
    Input,
    /// 配置錯誤
    Configuration,
    /// 系統錯誤
    System,
}

impl WeekDateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WeekDateError::InvalidWeekday { .. }
            | WeekDateError::InvalidWeek { .. }
            | WeekDateError::DateOutOfRange { .. } => ErrorCategory::Calendar,
            WeekDateError::InvalidWeekString { .. } | WeekDateError::InvalidRange { .. } => {
                ErrorCategory::Input
            }
            WeekDateError::ConfigValidationError { .. }
            | WeekDateError::InvalidConfigValueError { .. }
            | WeekDateError::MissingConfigError { .. } => ErrorCategory::Configuration,
            WeekDateError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 給使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Calendar => format!("Calendar computation failed: {}", self),
            ErrorCategory::Input => format!("Input rejected: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, WeekDateError>;
