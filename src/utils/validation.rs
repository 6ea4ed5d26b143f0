use crate::utils::error::{Result, WeekDateError};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| WeekDateError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// 區間結束日不可早於開始日
pub fn validate_date_order(field_name: &str, from: NaiveDate, to: NaiveDate) -> Result<()> {
    if to < from {
        return Err(WeekDateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: to.to_string(),
            reason: format!("End date must not be before start date {}", from),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let missing: Option<i32> = None;
        assert_eq!(*validate_required_field("range.from", &present).unwrap(), 3);
        assert!(matches!(
            validate_required_field("range.from", &missing),
            Err(WeekDateError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_date_order() {
        let earlier = NaiveDate::from_ymd_opt(2014, 1, 5).unwrap();
        let later = NaiveDate::from_ymd_opt(2014, 1, 10).unwrap();
        assert!(validate_date_order("range.to", earlier, later).is_ok());
        assert!(validate_date_order("range.to", earlier, earlier).is_ok());
        assert!(validate_date_order("range.to", later, earlier).is_err());
    }
}
