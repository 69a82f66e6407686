use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses `DD.MM.YYYY` with exactly two, two and four digits.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if !has_fixed_shape(raw) {
            return Err(CoreError::InvalidBirthdayFormat(raw.to_string()));
        }
        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| CoreError::InvalidBirthdayFormat(raw.to_string()))?;
        Ok(Self(date))
    }

    /// Like [`Birthday::parse`], but rejects dates after `today`.
    pub fn parse_as_of(raw: &str, today: NaiveDate) -> Result<Self, CoreError> {
        let birthday = Self::parse(raw)?;
        if birthday.0 > today {
            return Err(CoreError::BirthdayInFuture(raw.to_string()));
        }
        Ok(birthday)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

// chrono accepts "1.5.2000" and "+2000" for the pattern above.
fn has_fixed_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, b)| idx == 2 || idx == 5 || b.is_ascii_digit())
}
