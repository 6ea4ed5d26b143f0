//! ISO 8601 週數推導。
//!
//! 全部以 proleptic Gregorian 的 `NaiveDate` 計算，週一為一週的第一天，
//! 第 1 週為包含該年第一個週四的那一週。

use crate::utils::error::{Result, WeekDateError};
use chrono::{Datelike, Days, NaiveDate, Weekday};

pub const MIN_WEEK: u32 = 1;
pub const MAX_WEEK: u32 = 53;
pub const FIRST_DAY_OF_WEEK: Weekday = Weekday::Mon;
pub const LAST_DAY_OF_WEEK: Weekday = Weekday::Sun;
pub const PIVOT_DAY_OF_WEEK: Weekday = Weekday::Thu;

/// 第一週在當年至少要有幾天 (first four-day week rule)
const FIRST_WEEK_MIN_DAYS: i64 = 4;

pub(crate) fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or(WeekDateError::DateOutOfRange { date, days })
}

/// 往回找到該週的週一
pub fn start_of_week(date: NaiveDate) -> Result<NaiveDate> {
    let mut current = date;
    while current.weekday() != FIRST_DAY_OF_WEEK {
        current = add_days(current, -1)?;
    }
    Ok(current)
}

/// 往後找到該週的週日
pub fn end_of_week(date: NaiveDate) -> Result<NaiveDate> {
    let mut current = date;
    while current.weekday() != LAST_DAY_OF_WEEK {
        current = add_days(current, 1)?;
    }
    Ok(current)
}

/// Monday = 1 .. Sunday = 7
pub fn iso_day_ordinal(weekday: Weekday) -> u32 {
    match weekday {
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
        Weekday::Sun => 7,
    }
}

/// `iso_day_ordinal` 的反向對應，超出 1..=7 直接回傳錯誤
pub fn weekday_from_iso_ordinal(ordinal: u32) -> Result<Weekday> {
    match ordinal {
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        7 => Ok(Weekday::Sun),
        value => Err(WeekDateError::InvalidWeekday { value }),
    }
}

/// 同一週的週四，決定這一週屬於哪個 ISO 年
pub fn pivot_day(date: NaiveDate) -> Result<NaiveDate> {
    let start = start_of_week(date)?;
    let offset = iso_day_ordinal(PIVOT_DAY_OF_WEEK) - iso_day_ordinal(FIRST_DAY_OF_WEEK);
    add_days(start, i64::from(offset))
}

/// 日曆年內的週數 (first four-day week, 週一開始)。
///
/// 只看日期本身所在的日曆年，所以十二月底可能得到 53，
/// 即使 ISO 上那一週其實是下一年的第 1 週。落在當年第 1 週之前的日期
/// 沿用前一年 12/31 的週數。
pub fn week_number_raw(date: NaiveDate) -> Result<u32> {
    let jan1 = add_days(date, -i64::from(date.ordinal0()))?;
    let jan1_offset = i64::from(jan1.weekday().num_days_from_monday());

    // 第 1 週週一相對於 1/1 的偏移
    let first_week_start = if 7 - jan1_offset >= FIRST_WEEK_MIN_DAYS {
        -jan1_offset
    } else {
        7 - jan1_offset
    };

    let days_since_first_week = i64::from(date.ordinal0()) - first_week_start;
    if days_since_first_week < 0 {
        let last_day_of_previous_year = add_days(jan1, -1)?;
        return week_number_raw(last_day_of_previous_year);
    }

    Ok((days_since_first_week / 7) as u32 + MIN_WEEK)
}

fn is_first_week_of_next_year(date: NaiveDate, raw_week: u32) -> Result<bool> {
    if raw_week < MAX_WEEK {
        return Ok(false);
    }
    let start = start_of_week(date)?;
    let pivot = pivot_day(date)?;
    Ok(pivot.year() != start.year())
}

/// ISO 週數 (1..=53)
pub fn week_number(date: NaiveDate) -> Result<u32> {
    let raw_week = week_number_raw(date)?;
    if is_first_week_of_next_year(date, raw_week)? {
        Ok(MIN_WEEK)
    } else {
        Ok(raw_week)
    }
}

/// ISO 週年，永遠以週四所在的日曆年為準
pub fn week_year(date: NaiveDate) -> Result<i32> {
    Ok(pivot_day(date)?.year())
}
