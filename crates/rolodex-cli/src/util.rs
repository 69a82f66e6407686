use chrono::{Local, NaiveDate};
use rolodex_core::{Birthday, CoreError};

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_reference_date(raw: &str) -> Result<NaiveDate, CoreError> {
    Birthday::parse(raw.trim()).map(|parsed| parsed.date())
}

pub fn format_date(date: NaiveDate) -> String {
    Birthday::from_date(date).to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_date, parse_reference_date};
    use chrono::NaiveDate;

    #[test]
    fn reference_date_uses_birthday_format() {
        let date = parse_reference_date(" 05.05.2024 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 5).unwrap());
        assert_eq!(format_date(date), "05.05.2024");
        assert!(parse_reference_date("2024-05-05").is_err());
    }
}
