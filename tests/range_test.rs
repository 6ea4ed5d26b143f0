use chrono::NaiveDate;
use iso_weekdates::{generate_week_dates, generate_weeks, Week, WeekDateError};

fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

#[test]
fn test_week_range_is_correct() {
    let cases = [
        ("2008-12-29", "2009-12-28", 53), // 第一週開始到最後一週開始
        ("2009-01-04", "2010-01-03", 53), // 第一週結束到最後一週結束
        ("2008-12-29", "2010-01-03", 53), // 第一週開始到最後一週結束
        ("2012-01-04", "2012-01-04", 1),
        ("2012-01-04", "2012-12-28", 52),
        ("2013-12-23", "2013-12-29", 1),
        ("2013-12-30", "2014-01-05", 1),
        ("2013-12-23", "2014-01-05", 2),
    ];

    for (from, to, expected) in cases {
        let weeks = generate_weeks(parse_date(from), parse_date(to)).unwrap();
        assert_eq!(weeks.len(), expected, "{} .. {}", from, to);
    }
}

#[test]
fn test_week_range_touches_every_week_once() {
    let from = parse_date("2013-12-23");
    let to = parse_date("2014-01-05");
    let weeks = generate_weeks(from, to).unwrap();

    let labels: Vec<String> = weeks.iter().map(Week::canonical).collect();
    assert_eq!(labels, vec!["2013-W52", "2014-W01"]);
    assert!(weeks.first().unwrap().contains(from));
    assert!(weeks.last().unwrap().contains(to));
}

#[test]
fn test_week_date_range_has_one_entry_per_day() {
    let dates = generate_week_dates(parse_date("2014-01-05"), parse_date("2014-01-10")).unwrap();
    assert_eq!(dates.len(), 6);

    let labels: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        labels,
        vec!["2014-W01-7", "2014-W02-1", "2014-W02-2", "2014-W02-3", "2014-W02-4", "2014-W02-5"]
    );
    for pair in dates.windows(2) {
        assert_eq!(pair[0].date().succ_opt().unwrap(), pair[1].date());
    }
}

#[test]
fn test_week_date_range_over_a_year() {
    let dates = generate_week_dates(parse_date("2009-01-01"), parse_date("2009-12-31")).unwrap();
    assert_eq!(dates.len(), 365);
    assert_eq!(dates.last().unwrap().to_string(), "2009-W53-4");
}

#[test]
fn test_reversed_range_fails() {
    let result = generate_week_dates(parse_date("2014-01-10"), parse_date("2014-01-05"));
    assert!(matches!(result, Err(WeekDateError::InvalidRange { .. })));
}
