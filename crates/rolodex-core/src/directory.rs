use crate::domain::Record;
use crate::error::CoreError;
use crate::rules::{upcoming_birthdays, BirthdayWindow, UpcomingBirthday};
use chrono::NaiveDate;
use indexmap::IndexMap;

/// Contacts keyed by name, listed in the order names were first added.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: IndexMap<String, Record>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, replacing any record stored under the same name.
    /// A replaced name keeps its listing position.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        self.records.insert(key, record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<Record, CoreError> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window: BirthdayWindow,
    ) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(self.records.values(), today, window)
    }
}
