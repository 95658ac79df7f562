//! Resolve meetup schedules such as "the teenth Tuesday of May 2013" to a
//! day of month in the proleptic Gregorian calendar.
//!
//! ```
//! use meetup::{Meetup, meetup_day_of_month};
//!
//! assert_eq!(meetup_day_of_month(2013, 5, "first", "Tuesday"), Some(7));
//!
//! let meetup: Meetup = "last Monday of 2013-05".parse().unwrap();
//! assert_eq!(meetup.day().unwrap().get(), 27);
//! ```

mod calendar;
mod consts;
mod meetup;
mod ordinal;
mod prelude;
mod types;
mod weekday;

pub use calendar::{days_from_civil, days_in_month, is_leap_year, weekday_of};
pub use consts::*;
pub use meetup::{Meetup, MeetupError, meetup_day_of_month, try_meetup_day_of_month};
pub use ordinal::{ORDINAL_NAMES, Ordinal, resolve_ordinal};
pub use types::{Day, Month, Year};
pub use weekday::{WEEKDAY_NAMES, Weekday, resolve_weekday};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty input")]
    EmptyInput,
    #[display(fmt = "Unknown ordinal: {_0:?}")]
    UnknownOrdinal(String),
    #[display(fmt = "Unknown weekday: {_0:?}")]
    UnknownWeekday(String),
}

impl std::error::Error for ParseError {}
