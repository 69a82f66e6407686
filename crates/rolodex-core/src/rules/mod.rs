pub mod dates;
pub mod upcoming;

pub use dates::{congratulation_date, is_leap_year, project_onto_year};
pub use upcoming::{
    upcoming_birthdays, validate_window_days, BirthdayWindow, PastBirthdayPolicy,
    UpcomingBirthday, WindowBound, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
