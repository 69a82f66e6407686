use crate::domain::{Record, BIRTHDAY_FORMAT};
use crate::rules::UpcomingBirthday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDto {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

impl From<&Record> for RecordDto {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record
                .phones()
                .iter()
                .map(|phone| phone.as_str().to_string())
                .collect(),
            birthday: record.birthday().map(|birthday| birthday.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthdayDto {
    pub name: String,
    pub congratulation_date: String,
}

impl From<&UpcomingBirthday> for UpcomingBirthdayDto {
    fn from(item: &UpcomingBirthday) -> Self {
        Self {
            name: item.name.as_str().to_string(),
            congratulation_date: item
                .congratulation_date
                .format(BIRTHDAY_FORMAT)
                .to_string(),
        }
    }
}
