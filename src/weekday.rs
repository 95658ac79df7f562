use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DAYS_PER_WEEK, ParseError, prelude::*};

/// Day of the week, numbered from Sunday = 0 to Saturday = 6.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday = 0,
    #[display(fmt = "Monday")]
    Monday = 1,
    #[display(fmt = "Tuesday")]
    Tuesday = 2,
    #[display(fmt = "Wednesday")]
    Wednesday = 3,
    #[display(fmt = "Thursday")]
    Thursday = 4,
    #[display(fmt = "Friday")]
    Friday = 5,
    #[display(fmt = "Saturday")]
    Saturday = 6,
}

/// Accepted weekday names. Matching is exact and case-sensitive.
pub const WEEKDAY_NAMES: [(&str, Weekday); 7] = [
    ("Sunday", Weekday::Sunday),
    ("Monday", Weekday::Monday),
    ("Tuesday", Weekday::Tuesday),
    ("Wednesday", Weekday::Wednesday),
    ("Thursday", Weekday::Thursday),
    ("Friday", Weekday::Friday),
    ("Saturday", Weekday::Saturday),
];

/// Looks up a weekday by its English name, `None` if the name is unknown.
pub fn resolve_weekday(text: &str) -> Option<Weekday> {
    WEEKDAY_NAMES
        .iter()
        .find(|(name, _)| *name == text)
        .map(|&(_, weekday)| weekday)
}

impl Weekday {
    /// All days in index order, Sunday first
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Sunday-based index, 0..=6
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Weekday::index`]; `None` for anything above 6.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    /// The following day, wrapping Saturday to Sunday.
    pub const fn succ(self) -> Self {
        match self {
            Self::Sunday => Self::Monday,
            Self::Monday => Self::Tuesday,
            Self::Tuesday => Self::Wednesday,
            Self::Wednesday => Self::Thursday,
            Self::Thursday => Self::Friday,
            Self::Friday => Self::Saturday,
            Self::Saturday => Self::Sunday,
        }
    }

    /// Days to move forward from `self` to reach `target`, in `0..7`.
    pub const fn days_until(self, target: Self) -> u8 {
        (target.index() + DAYS_PER_WEEK - self.index()) % DAYS_PER_WEEK
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_weekday(s).ok_or_else(|| ParseError::UnknownWeekday(s.to_owned()))
    }
}

impl TryFrom<u8> for Weekday {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or_else(|| ParseError::UnknownWeekday(value.to_string()))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}
