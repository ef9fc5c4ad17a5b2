use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Today's date according to the local clock. This is the only place the
/// directory reads the clock, and only when a caller asks for it.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Determine if a date falls on a workday (Monday through Friday).
///
/// Works on anything with a calendar date, so a `NaiveDate`, `Date` or
/// `DateTime` will all do. No timezone conversion happens here.
pub fn is_workday<D: Datelike>(day: &D) -> bool {
    match day.weekday() {
        Weekday::Sat | Weekday::Sun => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn workdays() {
        // wednesday
        assert!(is_workday(&date(2022, 12, 7)));
        // saturday, sunday
        assert!(!is_workday(&date(2022, 10, 15)));
        assert!(!is_workday(&date(2022, 10, 16)));
        // monday, friday
        assert!(is_workday(&date(2022, 10, 17)));
        assert!(is_workday(&date(2022, 10, 21)));
        // timestamps only care about their calendar date
        assert!(!is_workday(&date(2022, 10, 15).and_hms_opt(23, 59, 59).unwrap()));
    }

    #[test]
    fn today_is_a_day() {
        let day = today();
        assert_eq!(is_workday(&day), day.weekday().num_days_from_monday() < 5);
    }
}
