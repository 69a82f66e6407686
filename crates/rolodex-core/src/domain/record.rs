use crate::domain::{Birthday, Name, Phone};
use crate::error::CoreError;
use chrono::NaiveDate;
use std::fmt;

pub const BIRTHDAY_NOT_SET: &str = "not set";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Drops every entry equal to `raw` and returns how many went away.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|phone| phone.as_str() != raw);
        before - self.phones.len()
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        if self.find_phone(old).is_none() {
            return Err(CoreError::PhoneNotFound(old.to_string()));
        }
        let replacement = Phone::new(new)?;
        for phone in self.phones.iter_mut().filter(|phone| phone.as_str() == old) {
            *phone = replacement.clone();
        }
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Like [`Record::set_birthday`], but refuses dates after `today`.
    pub fn set_birthday_as_of(&mut self, raw: &str, today: NaiveDate) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::parse_as_of(raw, today)?);
        Ok(())
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str(BIRTHDAY_NOT_SET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::error::CoreError;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 5).unwrap()
    }

    #[test]
    fn record_requires_name() {
        assert_eq!(Record::new(""), Err(CoreError::EmptyName));
    }

    #[test]
    fn add_phone_keeps_order_and_duplicates() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn failed_add_phone_leaves_record_unchanged() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1111111111").unwrap();
        assert!(record.add_phone("12345").is_err());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn remove_phone_drops_all_matches() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(record.remove_phone("1111111111"), 2);
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn remove_missing_phone_is_noop() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(record.remove_phone("9999999999"), 0);
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.edit_phone("1111111111", "3333333333").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["3333333333", "2222222222"]);
    }

    #[test]
    fn edit_phone_rejects_invalid_replacement() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1234567890").unwrap();
        let err = record.edit_phone("1234567890", "abc").unwrap_err();
        assert_eq!(err, CoreError::InvalidPhone("abc".to_string()));
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn edit_phone_rejects_missing_original() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1234567890").unwrap();
        let err = record.edit_phone("0000000000", "1111111111").unwrap_err();
        assert_eq!(err, CoreError::PhoneNotFound("0000000000".to_string()));
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn find_phone_returns_match_or_none() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(
            record.find_phone("1234567890").map(|p| p.as_str()),
            Some("1234567890")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn set_birthday_replaces_and_keeps_on_failure() {
        let mut record = Record::new("Ada").unwrap();
        record.set_birthday_as_of("10.05.2000", today()).unwrap();
        record.set_birthday_as_of("11.06.2001", today()).unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "11.06.2001");

        assert!(record.set_birthday_as_of("2001-06-11", today()).is_err());
        assert!(record.set_birthday_as_of("06.05.2024", today()).is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "11.06.2001");
    }

    #[test]
    fn set_birthday_without_reference_accepts_future() {
        let mut record = Record::new("Carol").unwrap();
        record.set_birthday("12.05.2099").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "12.05.2099");
        assert!(record.set_birthday("12-05-2099").is_err());
    }

    #[test]
    fn render_lists_phones_and_birthday() {
        let mut record = Record::new("Ada").unwrap();
        assert_eq!(
            record.render(),
            "Contact name: Ada, phones: , birthday: not set"
        );
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.set_birthday_as_of("10.05.2000", today()).unwrap();
        assert_eq!(
            record.render(),
            "Contact name: Ada, phones: 1111111111; 2222222222, birthday: 10.05.2000"
        );
    }
}
