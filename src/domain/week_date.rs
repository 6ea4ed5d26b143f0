use crate::domain::iso_week;
use crate::domain::ports::WeekEntity;
use crate::domain::week::{parse_week_parts, Week};
use crate::utils::error::{Result, WeekDateError};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// ISO 8601 週中的某一天，例如 "2009-W53-4"。
///
/// 保留原始日期，`start_of_week + (day_ordinal - 1)` 會得到同一天。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekDate {
    week: Week,
    day_ordinal: u32,
    date: NaiveDate,
}

impl WeekDate {
    pub fn from_date(date: NaiveDate) -> Result<Self> {
        Ok(Self {
            week: Week::from_date(date)?,
            day_ordinal: iso_week::iso_day_ordinal(date.weekday()),
            date,
        })
    }

    pub fn new(week_year: i32, week_number: u32, day_ordinal: u32) -> Result<Self> {
        iso_week::weekday_from_iso_ordinal(day_ordinal)?;
        let week = Week::new(week_year, week_number)?;
        let date = iso_week::add_days(week.start_of_week(), i64::from(day_ordinal) - 1)?;
        Self::from_date(date)
    }

    pub fn week(&self) -> &Week {
        &self.week
    }

    pub fn week_year(&self) -> i32 {
        self.week.week_year()
    }

    pub fn week_number(&self) -> u32 {
        self.week.week_number()
    }

    pub fn start_of_week(&self) -> NaiveDate {
        self.week.start_of_week()
    }

    pub fn end_of_week(&self) -> NaiveDate {
        self.week.end_of_week()
    }

    pub fn day_ordinal(&self) -> u32 {
        self.day_ordinal
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_same_week_as(&self, other: &WeekDate) -> bool {
        self.week_year() == other.week_year() && self.week_number() == other.week_number()
    }

    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeekDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.week, self.day_ordinal)
    }
}

impl PartialEq for WeekDate {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for WeekDate {}

impl PartialOrd for WeekDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeekDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl Hash for WeekDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl WeekEntity for WeekDate {
    fn from_date(date: NaiveDate) -> Result<Self> {
        WeekDate::from_date(date)
    }

    fn last_covered_date(&self) -> NaiveDate {
        self.date
    }
}

impl FromStr for WeekDate {
    type Err = WeekDateError;

    fn from_str(s: &str) -> Result<Self> {
        let (week_year, week_number, day_part) = parse_week_parts(s)?;
        let invalid_day = || WeekDateError::InvalidWeekString {
            value: s.to_string(),
            reason: "day must be a single digit".to_string(),
        };
        let day_part = day_part.ok_or_else(invalid_day)?;
        if day_part.len() != 1 {
            return Err(invalid_day());
        }
        let day_ordinal: u32 = day_part.parse().map_err(|_| invalid_day())?;
        WeekDate::new(week_year, week_number, day_ordinal)
    }
}

impl TryFrom<String> for WeekDate {
    type Error = WeekDateError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<WeekDate> for String {
    fn from(week_date: WeekDate) -> Self {
        week_date.canonical()
    }
}
