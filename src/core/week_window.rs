// Week window: the Monday-to-Sunday date range containing a given date.
//
// Purpose
// - Give reconciliation and projection one shared definition of "the week".
//
// Boundaries
// - Pure and total. No input or output, no failure cases.
//
// Testing guidance
// - For any date d: start is a Monday, end is a Sunday, start <= d <= end.

use chrono::{Datelike, Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Computes the Monday–Sunday window containing `date`. Monday is weekday
/// offset zero, so `date` minus its offset lands on the week's Monday.
pub fn week_window(date: NaiveDate) -> WeekWindow {
    let offset = u64::from(date.weekday().num_days_from_monday());
    let start = date - Days::new(offset);
    WeekWindow {
        start,
        end: start + Days::new(6),
    }
}

#[cfg(test)]
mod week_window_tests {
    use super::*;
    use chrono::Weekday;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::wednesday(date(2024, 3, 6), date(2024, 3, 4), date(2024, 3, 10))]
    #[case::monday(date(2024, 3, 4), date(2024, 3, 4), date(2024, 3, 10))]
    #[case::sunday(date(2024, 3, 10), date(2024, 3, 4), date(2024, 3, 10))]
    #[case::across_month_boundary(date(2024, 4, 1), date(2024, 4, 1), date(2024, 4, 7))]
    #[case::across_year_boundary(date(2025, 1, 1), date(2024, 12, 30), date(2025, 1, 5))]
    #[case::leap_day(date(2024, 2, 29), date(2024, 2, 26), date(2024, 3, 3))]
    fn it_should_compute_the_monday_to_sunday_window(
        #[case] input: NaiveDate,
        #[case] expected_start: NaiveDate,
        #[case] expected_end: NaiveDate,
    ) {
        let window = week_window(input);
        assert_eq!(window.start, expected_start);
        assert_eq!(window.end, expected_end);
    }

    #[rstest]
    fn it_should_always_contain_the_input_date_between_a_monday_and_a_sunday() {
        let mut day = date(2023, 12, 1);
        let stop = date(2024, 2, 1);
        while day < stop {
            let window = week_window(day);
            assert_eq!(window.start.weekday(), Weekday::Mon);
            assert_eq!(window.end.weekday(), Weekday::Sun);
            assert!(window.start <= day && day <= window.end);
            assert_eq!(window.end - window.start, chrono::Duration::days(6));
            day = day.succ_opt().unwrap();
        }
    }

    #[rstest]
    fn it_should_give_every_day_of_one_week_the_same_window() {
        let monday = date(2024, 3, 4);
        let expected = week_window(monday);
        for offset in 0..7 {
            let day = monday + Days::new(offset);
            assert_eq!(week_window(day), expected);
        }
    }
}
