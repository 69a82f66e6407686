use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PHONE_DIGITS: usize = 10;

/// A phone number stored as exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if !is_valid_phone(raw) {
            return Err(CoreError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_phone(raw: &str) -> bool {
    raw.len() == PHONE_DIGITS && raw.bytes().all(|b| b.is_ascii_digit())
}
