use crate::domain::iso_week;
use crate::domain::ports::WeekEntity;
use crate::utils::error::{Result, WeekDateError};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// ISO 8601 週 (週一到週日)。
///
/// 相等、排序與雜湊全部以標準字串 `YYYY-Wnn` 為準。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Week {
    start_of_week: NaiveDate,
    end_of_week: NaiveDate,
    week_year: i32,
    week_number: u32,
}

impl Week {
    pub fn from_date(date: NaiveDate) -> Result<Self> {
        Ok(Self {
            start_of_week: iso_week::start_of_week(date)?,
            end_of_week: iso_week::end_of_week(date)?,
            week_year: iso_week::week_year(date)?,
            week_number: iso_week::week_number(date)?,
        })
    }

    /// 由週年與週數建立，該年沒有這一週時回傳 `InvalidWeek`
    pub fn new(week_year: i32, week_number: u32) -> Result<Self> {
        let monday = NaiveDate::from_isoywd_opt(week_year, week_number, Weekday::Mon).ok_or(
            WeekDateError::InvalidWeek {
                week_year,
                week_number,
            },
        )?;
        Self::from_date(monday)
    }

    pub fn start_of_week(&self) -> NaiveDate {
        self.start_of_week
    }

    pub fn end_of_week(&self) -> NaiveDate {
        self.end_of_week
    }

    pub fn week_year(&self) -> i32 {
        self.week_year
    }

    pub fn week_number(&self) -> u32 {
        self.week_number
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_of_week <= date && date <= self.end_of_week
    }

    /// 週一到週日七天
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start_of_week.iter_days().take(7)
    }

    /// 可排序的週字串，例如 "2009-W53"
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.week_year, self.week_number)
    }
}

impl PartialEq for Week {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Week {}

impl PartialOrd for Week {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Week {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl Hash for Week {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl WeekEntity for Week {
    fn from_date(date: NaiveDate) -> Result<Self> {
        Week::from_date(date)
    }

    fn last_covered_date(&self) -> NaiveDate {
        self.end_of_week
    }
}

/// 拆解 "YYYY-Wnn" 或 "YYYY-Wnn-d"，回傳週年、週數與剩下的星期部分
pub(crate) fn parse_week_parts(value: &str) -> Result<(i32, u32, Option<&str>)> {
    let invalid = |reason: &str| WeekDateError::InvalidWeekString {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (year_part, rest) = value
        .split_once("-W")
        .ok_or_else(|| invalid("missing '-W' separator"))?;
    let week_year: i32 = year_part
        .parse()
        .map_err(|_| invalid("week-year is not a number"))?;

    let (week_part, day_part) = match rest.split_once('-') {
        Some((week, day)) => (week, Some(day)),
        None => (rest, None),
    };
    if week_part.len() != 2 || !week_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("week number must be two digits"));
    }
    let week_number: u32 = week_part
        .parse()
        .map_err(|_| invalid("week number is not a number"))?;

    Ok((week_year, week_number, day_part))
}

impl FromStr for Week {
    type Err = WeekDateError;

    fn from_str(s: &str) -> Result<Self> {
        match parse_week_parts(s)? {
            (week_year, week_number, None) => Week::new(week_year, week_number),
            (_, _, Some(_)) => Err(WeekDateError::InvalidWeekString {
                value: s.to_string(),
                reason: "unexpected day component".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Week {
    type Error = WeekDateError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Week> for String {
    fn from(week: Week) -> Self {
        week.canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_from_date() {
        let week = Week::from_date(date(2010, 1, 3)).unwrap();
        assert_eq!(week.week_year(), 2009);
        assert_eq!(week.week_number(), 53);
        assert_eq!(week.start_of_week(), date(2009, 12, 28));
        assert_eq!(week.end_of_week(), date(2010, 1, 3));
        assert_eq!(week.to_string(), "2009-W53");
    }

    #[test]
    fn test_week_new_rejects_missing_week_53() {
        assert!(Week::new(2009, 53).is_ok());
        assert!(matches!(
            Week::new(2013, 53),
            Err(WeekDateError::InvalidWeek {
                week_year: 2013,
                week_number: 53
            })
        ));
        assert!(Week::new(2013, 0).is_err());
    }

    #[test]
    fn test_week_days_and_contains() {
        let week = Week::new(2014, 1).unwrap();
        let days: Vec<NaiveDate> = week.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2013, 12, 30));
        assert_eq!(days[6], date(2014, 1, 5));
        assert!(week.contains(date(2014, 1, 1)));
        assert!(!week.contains(date(2014, 1, 6)));
    }

    #[test]
    fn test_parse_week() {
        let week: Week = "2004-W53".parse().unwrap();
        assert_eq!(week.start_of_week(), date(2004, 12, 27));
        assert!("2004-W5".parse::<Week>().is_err());
        assert!("2004W53".parse::<Week>().is_err());
        assert!("2004-W53-6".parse::<Week>().is_err());
        assert!("abcd-W01".parse::<Week>().is_err());
    }
}
