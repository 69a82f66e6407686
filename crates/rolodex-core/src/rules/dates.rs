use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Moves a (month, day) anniversary into `year`. 29 February lands on
/// 28 February in common years.
pub fn project_onto_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Weekend dates roll forward to the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::{congratulation_date, is_leap_year, project_onto_year};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn leap_year_logic() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn projection_keeps_month_and_day() {
        assert_eq!(project_onto_year(2024, 5, 10), Some(date(2024, 5, 10)));
    }

    #[test]
    fn projection_moves_leap_day_in_common_years() {
        assert_eq!(project_onto_year(2023, 2, 29), Some(date(2023, 2, 28)));
        assert_eq!(project_onto_year(2024, 2, 29), Some(date(2024, 2, 29)));
    }

    #[test]
    fn weekend_rolls_to_monday() {
        // 11.05.2024 is a Saturday, 12.05.2024 a Sunday
        assert_eq!(congratulation_date(date(2024, 5, 11)), date(2024, 5, 13));
        assert_eq!(congratulation_date(date(2024, 5, 12)), date(2024, 5, 13));
        assert_eq!(congratulation_date(date(2024, 5, 10)), date(2024, 5, 10));
        assert_eq!(congratulation_date(date(2024, 5, 13)), date(2024, 5, 13));
    }
}
