pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use name::Name;
pub use phone::{Phone, PHONE_DIGITS};
pub use record::Record;
