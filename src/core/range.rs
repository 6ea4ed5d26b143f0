use crate::domain::{Week, WeekDate, WeekEntity};
use crate::utils::error::{Result, WeekDateError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// 區間要以週還是以日前進
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    #[default]
    Week,
    WeekDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekSequence {
    Weeks(Vec<Week>),
    WeekDates(Vec<WeekDate>),
}

impl WeekSequence {
    pub fn len(&self) -> usize {
        match self {
            WeekSequence::Weeks(weeks) => weeks.len(),
            WeekSequence::WeekDates(dates) => dates.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            WeekSequence::Weeks(_) => Granularity::Week,
            WeekSequence::WeekDates(_) => Granularity::WeekDate,
        }
    }

    /// 每個實體的標準字串，順序與序列相同
    pub fn canonical_strings(&self) -> Vec<String> {
        match self {
            WeekSequence::Weeks(weeks) => weeks.iter().map(Week::canonical).collect(),
            WeekSequence::WeekDates(dates) => dates.iter().map(WeekDate::canonical).collect(),
        }
    }
}

/// 從 `from` 開始逐一產生實體，直到最後一個實體涵蓋 `to` 為止
#[derive(Debug, Clone)]
pub struct RangeIter<E> {
    next_from: Option<NaiveDate>,
    to: NaiveDate,
    _entity: PhantomData<E>,
}

impl<E: WeekEntity> RangeIter<E> {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if to < from {
            return Err(WeekDateError::InvalidRange { from, to });
        }
        Ok(Self {
            next_from: Some(from),
            to,
            _entity: PhantomData,
        })
    }
}

impl<E: WeekEntity> Iterator for RangeIter<E> {
    type Item = Result<E>;

    fn next(&mut self) -> Option<Self::Item> {
        let from = self.next_from.take()?;
        let entity = match E::from_date(from) {
            Ok(entity) => entity,
            Err(e) => return Some(Err(e)),
        };

        let last_covered = entity.last_covered_date();
        if last_covered < self.to {
            // last_covered < to，所以隔天一定存在
            self.next_from = last_covered.succ_opt();
        }

        Some(Ok(entity))
    }
}

pub fn generate<E: WeekEntity>(from: NaiveDate, to: NaiveDate) -> Result<Vec<E>> {
    let entities = RangeIter::<E>::new(from, to)?.collect::<Result<Vec<E>>>()?;
    tracing::debug!(
        "Generated {} entries ({}): {} .. {}",
        entities.len(),
        std::any::type_name::<E>(),
        from,
        to
    );
    Ok(entities)
}

/// 每個 ISO 週一筆，頭尾不完整的週也算
pub fn generate_weeks(from: NaiveDate, to: NaiveDate) -> Result<Vec<Week>> {
    generate(from, to)
}

/// 每個日曆日一筆
pub fn generate_week_dates(from: NaiveDate, to: NaiveDate) -> Result<Vec<WeekDate>> {
    generate(from, to)
}

pub fn generate_sequence(
    from: NaiveDate,
    to: NaiveDate,
    granularity: Granularity,
) -> Result<WeekSequence> {
    match granularity {
        Granularity::Week => generate_weeks(from, to).map(WeekSequence::Weeks),
        Granularity::WeekDate => generate_week_dates(from, to).map(WeekSequence::WeekDates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weeks_are_contiguous() {
        let weeks = generate_weeks(date(2012, 1, 4), date(2012, 12, 28)).unwrap();
        assert_eq!(weeks.len(), 52);
        for pair in weeks.windows(2) {
            assert_eq!(pair[0].end_of_week().succ_opt().unwrap(), pair[1].start_of_week());
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_single_day_range() {
        let weeks = generate_weeks(date(2012, 1, 4), date(2012, 1, 4)).unwrap();
        assert_eq!(weeks.len(), 1);

        let dates = generate_week_dates(date(2012, 1, 4), date(2012, 1, 4)).unwrap();
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].to_string(), "2012-W01-3");
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let result = generate_weeks(date(2014, 1, 10), date(2014, 1, 5));
        assert!(matches!(result, Err(WeekDateError::InvalidRange { .. })));

        let result = RangeIter::<WeekDate>::new(date(2014, 1, 10), date(2014, 1, 9));
        assert!(result.is_err());
    }

    #[test]
    fn test_iterator_is_lazy() {
        let first_three: Vec<Week> = RangeIter::<Week>::new(date(2000, 1, 1), date(2100, 1, 1))
            .unwrap()
            .take(3)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(
            first_three.iter().map(Week::canonical).collect::<Vec<_>>(),
            vec!["1999-W52", "2000-W01", "2000-W02"]
        );
    }

    #[test]
    fn test_generate_sequence_granularity() {
        let weeks = generate_sequence(date(2014, 1, 5), date(2014, 1, 10), Granularity::Week).unwrap();
        assert_eq!(weeks.granularity(), Granularity::Week);
        assert_eq!(weeks.canonical_strings(), vec!["2014-W01", "2014-W02"]);

        let days =
            generate_sequence(date(2014, 1, 5), date(2014, 1, 10), Granularity::WeekDate).unwrap();
        assert_eq!(days.len(), 6);
        assert!(!days.is_empty());
    }
}
