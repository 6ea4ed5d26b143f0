use crate::domain::iso_week;
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// 三向比較，缺值的一方排在前面。
///
/// 只要有一方缺值就不會回傳 `Equal`，兩邊都缺值時左邊視為較小。
pub fn compare<E: Ord>(a: Option<&E>, b: Option<&E>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, _) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// 缺值永遠不相等，包括兩邊都缺值
pub fn equals<E: PartialEq>(a: Option<&E>, b: Option<&E>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// 兩個日期是否落在同一個 ISO 週
pub fn is_same_week_as(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Result<bool> {
    let (Some(a), Some(b)) = (a, b) else {
        return Ok(false);
    };
    Ok(iso_week::week_year(a)? == iso_week::week_year(b)?
        && iso_week::week_number(a)? == iso_week::week_number(b)?)
}
