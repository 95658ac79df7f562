use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::days_in_month;
use crate::{DAYS_PER_WEEK, MIN_DAY, ParseError, TEENTH_FIRST_DAY, prelude::*};

/// Which occurrence of a weekday within a month is requested.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Ordinal {
    #[display(fmt = "first")]
    First,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "third")]
    Third,
    #[display(fmt = "fourth")]
    Fourth,
    #[display(fmt = "fifth")]
    Fifth,
    /// The final occurrence in the month, whether fourth or fifth
    #[display(fmt = "last")]
    Last,
    /// The single occurrence falling on the 13th through the 19th
    #[display(fmt = "teenth")]
    Teenth,
}

/// Accepted ordinal names. Matching is exact and case-sensitive.
pub const ORDINAL_NAMES: [(&str, Ordinal); 7] = [
    ("first", Ordinal::First),
    ("second", Ordinal::Second),
    ("third", Ordinal::Third),
    ("fourth", Ordinal::Fourth),
    ("fifth", Ordinal::Fifth),
    ("last", Ordinal::Last),
    ("teenth", Ordinal::Teenth),
];

/// Looks up an ordinal by name, `None` if the name is unknown.
pub fn resolve_ordinal(text: &str) -> Option<Ordinal> {
    ORDINAL_NAMES
        .iter()
        .find(|(name, _)| *name == text)
        .map(|&(_, ordinal)| ordinal)
}

impl Ordinal {
    /// 1-based occurrence number for `First..=Fifth`, `None` for `Last` and `Teenth`
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(2),
            Self::Third => Some(3),
            Self::Fourth => Some(4),
            Self::Fifth => Some(5),
            Self::Last | Self::Teenth => None,
        }
    }

    /// Reference day of the seven-day window in which this occurrence falls.
    ///
    /// The requested weekday is found by searching forward at most six days
    /// from here. For `Last` the window is the final week of `month` in
    /// `year`, which is always 28 to 31 days long. `month` must be in `1..=12`.
    pub(crate) const fn window_start(self, year: i32, month: u8) -> u8 {
        match self.rank() {
            Some(rank) => MIN_DAY + (rank - 1) * DAYS_PER_WEEK,
            None => match self {
                Self::Last => days_in_month(year, month) + 1 - DAYS_PER_WEEK,
                _ => TEENTH_FIRST_DAY,
            },
        }
    }
}

impl FromStr for Ordinal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_ordinal(s).ok_or_else(|| ParseError::UnknownOrdinal(s.to_owned()))
    }
}
