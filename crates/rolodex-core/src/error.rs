use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Name must not be empty.")]
    EmptyName,
    #[error("Phone number must have 10 digits.")]
    InvalidPhone(String),
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthdayFormat(String),
    #[error("Birthday {0} is in the future.")]
    BirthdayInFuture(String),
    #[error("Phone number {0} does not exist.")]
    PhoneNotFound(String),
    #[error("Contact {0} not found.")]
    ContactNotFound(String),
    #[error("Birthday window must be between 1 and 366 days, got {0}.")]
    InvalidWindowDays(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorKind {
    Validation,
    NotFound,
}

impl CoreError {
    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::EmptyName
            | CoreError::InvalidPhone(_)
            | CoreError::InvalidBirthdayFormat(_)
            | CoreError::BirthdayInFuture(_)
            | CoreError::InvalidWindowDays(_) => CoreErrorKind::Validation,
            // editing a phone the record lacks is reported as bad input
            CoreError::PhoneNotFound(_) => CoreErrorKind::Validation,
            CoreError::ContactNotFound(_) => CoreErrorKind::NotFound,
        }
    }
}
