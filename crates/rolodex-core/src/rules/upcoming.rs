use crate::domain::{Name, Record};
use crate::error::CoreError;
use crate::rules::dates::{congratulation_date, project_onto_year};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const MAX_WINDOW_DAYS: i64 = 366;

/// Whether the last day of the window still counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowBound {
    #[default]
    Inclusive,
    Exclusive,
}

/// What happens to a birthday that already passed this year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PastBirthdayPolicy {
    #[default]
    Skip,
    RollOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub days: i64,
    pub bound: WindowBound,
    pub past: PastBirthdayPolicy,
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
            bound: WindowBound::Inclusive,
            past: PastBirthdayPolicy::Skip,
        }
    }
}

impl BirthdayWindow {
    pub fn contains(&self, days_until: i64) -> bool {
        if days_until < 0 {
            return false;
        }
        match self.bound {
            WindowBound::Inclusive => days_until <= self.days,
            WindowBound::Exclusive => days_until < self.days,
        }
    }
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(1..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    /// The anniversary being celebrated, projected onto the checked year.
    pub occurs_on: NaiveDate,
    pub days_until: i64,
    pub congratulation_date: NaiveDate,
}

pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window: BirthdayWindow,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let candidate = next_occurrence(today, birthday.month(), birthday.day(), window.past)?;
            let days_until = (candidate - today).num_days();
            if !window.contains(days_until) {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().clone(),
                occurs_on: candidate,
                days_until,
                congratulation_date: congratulation_date(candidate),
            })
        })
        .collect()
}

fn next_occurrence(
    today: NaiveDate,
    month: u32,
    day: u32,
    past: PastBirthdayPolicy,
) -> Option<NaiveDate> {
    let candidate = project_onto_year(today.year(), month, day)?;
    if candidate >= today {
        return Some(candidate);
    }
    match past {
        PastBirthdayPolicy::Skip => None,
        PastBirthdayPolicy::RollOver => project_onto_year(today.year() + 1, month, day),
    }
}
