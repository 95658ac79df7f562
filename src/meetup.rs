use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::calendar::{days_in_month, weekday_of};
use crate::{
    DATE_SEPARATOR, Day, MAX_MONTH, MIN_DAY, MONTH_CONNECTIVE, Month, Ordinal, ParseError,
    Weekday, Year, prelude::*,
};

/// Error type for resolving a meetup to a concrete day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeetupError {
    /// Unknown ordinal or weekday text, or a year/month out of range.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Well-formed request with no matching day, e.g. a fifth Sunday in a
    /// month that only has four.
    #[error("No {ordinal} {weekday} in {year:04}-{month:02}")]
    NoSuchDay {
        ordinal: Ordinal,
        weekday: Weekday,
        year: u16,
        month: u8,
    },
}

/// Day of month of the meetup described by `ordinal` and `weekday`, e.g.
/// `"teenth"` and `"Tuesday"`.
///
/// Returns `None` for unknown ordinal or weekday text, for a month outside
/// `1..=12`, and for requests no day satisfies. Use
/// [`try_meetup_day_of_month`] to tell these apart.
///
/// ```
/// assert_eq!(meetup::meetup_day_of_month(2013, 5, "teenth", "Tuesday"), Some(14));
/// assert_eq!(meetup::meetup_day_of_month(2013, 8, "fifth", "Sunday"), None);
/// ```
pub fn meetup_day_of_month(year: u16, month: u8, ordinal: &str, weekday: &str) -> Option<u8> {
    try_meetup_day_of_month(year, month, ordinal, weekday).ok()
}

/// Like [`meetup_day_of_month`], reporting why a request was rejected.
///
/// Every `u16` year is accepted, including year 0.
///
/// # Errors
/// - `MeetupError::Parse` for unknown ordinal or weekday text, or a month
///   outside `1..=12`.
/// - `MeetupError::NoSuchDay` when the month has no such occurrence.
pub fn try_meetup_day_of_month(
    year: u16,
    month: u8,
    ordinal: &str,
    weekday: &str,
) -> Result<u8, MeetupError> {
    let ordinal = ordinal
        .parse::<Ordinal>()
        .inspect_err(|err| debug!(%err, "meetup request rejected"))?;
    let weekday = weekday
        .parse::<Weekday>()
        .inspect_err(|err| debug!(%err, "meetup request rejected"))?;
    if month == 0 || month > MAX_MONTH {
        debug!(month, "meetup request rejected: month out of range");
        return Err(ParseError::InvalidMonth(month).into());
    }

    find_day(i32::from(year), month, ordinal, weekday).ok_or_else(|| {
        debug!(%ordinal, %weekday, year, month, "no such meetup day");
        MeetupError::NoSuchDay {
            ordinal,
            weekday,
            year,
            month,
        }
    })
}

/// Searches the seven-day window selected by `ordinal` for `weekday`.
///
/// `month` must be in `1..=12`. The only failure is a window running past
/// the end of the month, which happens for `Fifth` alone: the `Last` window
/// ends on the final day and the `Teenth` window ends on the 19th.
fn find_day(year: i32, month: u8, ordinal: Ordinal, weekday: Weekday) -> Option<u8> {
    let length = days_in_month(year, month);
    let offset = ordinal.window_start(year, month);
    // ranked windows start on 1 + 7k, which shares its weekday with the 1st
    let reference_day = if ordinal.rank().is_some() {
        MIN_DAY
    } else {
        offset
    };
    let baseline = weekday_of(year, month, reference_day);
    let day = offset + baseline.days_until(weekday);

    trace!(year, month, %ordinal, %weekday, reference_day, %baseline, day, length, "meetup window searched");

    (day <= length).then_some(day)
}

/// A meetup schedule for one month, e.g. "third Tuesday of 2013-05".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{ordinal} {weekday} of {year}-{month}")]
pub struct Meetup {
    year: Year,
    month: Month,
    ordinal: Ordinal,
    weekday: Weekday,
}

impl Meetup {
    pub const fn new(year: Year, month: Month, ordinal: Ordinal, weekday: Weekday) -> Self {
        Self {
            year,
            month,
            ordinal,
            weekday,
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The day of month this meetup falls on.
    ///
    /// # Errors
    /// Returns `MeetupError::NoSuchDay` if the month has no such occurrence.
    pub fn day(&self) -> Result<Day, MeetupError> {
        let day = find_day(
            i32::from(self.year.get()),
            self.month.get(),
            self.ordinal,
            self.weekday,
        )
        .ok_or(MeetupError::NoSuchDay {
            ordinal: self.ordinal,
            weekday: self.weekday,
            year: self.year.get(),
            month: self.month.get(),
        })?;
        Ok(Day::new(day, self.year, self.month)?)
    }
}

impl Meetup {
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for Meetup {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // <ordinal> <Weekday> of <YYYY>-<MM>
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let [ordinal, weekday, connective, date] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 4 words, found {}: {trimmed}",
                parts.len()
            )));
        };
        if *connective != MONTH_CONNECTIVE {
            return Err(ParseError::InvalidFormat(format!(
                "Expected '{MONTH_CONNECTIVE}', found '{connective}'"
            )));
        }

        let ordinal = ordinal.parse::<Ordinal>()?;
        let weekday = weekday.parse::<Weekday>()?;

        let (year, month) = date
            .split_once(DATE_SEPARATOR)
            .ok_or_else(|| ParseError::InvalidFormat((*date).to_owned()))?;
        let year = Year::new(Self::parse_u16(year)?)?;
        let month = Month::new(Self::parse_u8(month)?)?;

        Ok(Self::new(year, month, ordinal, weekday))
    }
}

impl Serialize for Meetup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Meetup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ORDINAL_NAMES, TEENTH_FIRST_DAY, TEENTH_LAST_DAY, WEEKDAY_NAMES};

    #[test]
    fn test_scenarios() {
        struct TestCase {
            year: u16,
            month: u8,
            ordinal: &'static str,
            weekday: &'static str,
            expected: Option<u8>,
        }

        let cases = [
            TestCase {
                year: 2013,
                month: 5,
                ordinal: "teenth",
                weekday: "Tuesday",
                expected: Some(14),
            },
            TestCase {
                year: 2013,
                month: 5,
                ordinal: "first",
                weekday: "Tuesday",
                expected: Some(7),
            },
            TestCase {
                year: 2013,
                month: 5,
                ordinal: "last",
                weekday: "Monday",
                expected: Some(27),
            },
            TestCase {
                year: 2013,
                month: 2,
                ordinal: "fourth",
                weekday: "Wednesday",
                expected: Some(27),
            },
            TestCase {
                year: 2013,
                month: 8,
                ordinal: "fifth",
                weekday: "Sunday",
                expected: None,
            },
            TestCase {
                year: 2012,
                month: 2,
                ordinal: "teenth",
                weekday: "Sunday",
                expected: Some(19),
            },
            TestCase {
                year: 2013,
                month: 5,
                ordinal: "bogus",
                weekday: "Tuesday",
                expected: None,
            },
            TestCase {
                year: 2013,
                month: 5,
                ordinal: "first",
                weekday: "Funday",
                expected: None,
            },
            TestCase {
                year: 2013,
                month: 4,
                ordinal: "second",
                weekday: "Saturday",
                expected: Some(13),
            },
            TestCase {
                year: 2013,
                month: 9,
                ordinal: "third",
                weekday: "Friday",
                expected: Some(20),
            },
            TestCase {
                year: 2013,
                month: 12,
                ordinal: "last",
                weekday: "Tuesday",
                expected: Some(31),
            },
            TestCase {
                year: 2012,
                month: 2,
                ordinal: "last",
                weekday: "Wednesday",
                expected: Some(29),
            },
            TestCase {
                year: 2013,
                month: 10,
                ordinal: "fifth",
                weekday: "Thursday",
                expected: Some(31),
            },
            TestCase {
                year: 2015,
                month: 2,
                ordinal: "first",
                weekday: "Sunday",
                expected: Some(1),
            },
        ];

        for case in &cases {
            assert_eq!(
                meetup_day_of_month(case.year, case.month, case.ordinal, case.weekday),
                case.expected,
                "{} {} of {:04}-{:02}",
                case.ordinal,
                case.weekday,
                case.year,
                case.month,
            );
        }
    }

    #[test]
    fn test_error_causes() {
        assert!(matches!(
            try_meetup_day_of_month(2013, 5, "bogus", "Tuesday"),
            Err(MeetupError::Parse(ParseError::UnknownOrdinal(ref s))) if s == "bogus"
        ));
        assert!(matches!(
            try_meetup_day_of_month(2013, 5, "first", "Funday"),
            Err(MeetupError::Parse(ParseError::UnknownWeekday(ref s))) if s == "Funday"
        ));
        assert!(matches!(
            try_meetup_day_of_month(2013, 13, "first", "Monday"),
            Err(MeetupError::Parse(ParseError::InvalidMonth(13)))
        ));
        assert_eq!(
            try_meetup_day_of_month(2013, 8, "fifth", "Sunday"),
            Err(MeetupError::NoSuchDay {
                ordinal: Ordinal::Fifth,
                weekday: Weekday::Sunday,
                year: 2013,
                month: 8,
            })
        );
    }

    #[test]
    fn test_month_out_of_range_is_none() {
        assert_eq!(meetup_day_of_month(2013, 0, "first", "Monday"), None);
        assert_eq!(meetup_day_of_month(2013, 13, "last", "Monday"), None);
    }

    #[test]
    fn test_year_zero_is_proleptic_leap_year() {
        // 0000-02-29 was a Tuesday
        assert_eq!(meetup_day_of_month(0, 2, "last", "Tuesday"), Some(29));
        assert_eq!(meetup_day_of_month(0, 2, "fifth", "Tuesday"), Some(29));
    }

    #[test]
    fn test_no_such_day_message() {
        let err = try_meetup_day_of_month(2013, 8, "fifth", "Sunday").unwrap_err();
        assert_eq!(err.to_string(), "No fifth Sunday in 2013-08");
    }

    #[test]
    fn test_first_lands_in_first_week_with_requested_weekday() {
        for year in 2000..2400 {
            for month in 1..=12 {
                for (name, weekday) in WEEKDAY_NAMES {
                    let day = meetup_day_of_month(year, month, "first", name).unwrap();
                    assert!((1..=7).contains(&day));
                    assert_eq!(weekday_of(i32::from(year), month, day), weekday);
                }
            }
        }
    }

    /// Brute-force reference: every day in the month falling on `weekday`.
    fn occurrences(year: u16, month: u8, weekday: Weekday) -> Vec<u8> {
        (1..=days_in_month(i32::from(year), month))
            .filter(|&day| weekday_of(i32::from(year), month, day) == weekday)
            .collect()
    }

    #[test]
    fn test_matches_brute_force_over_full_cycle() {
        // 400 years covers every combination of month length and starting weekday.
        for year in 2000..2400 {
            for month in 1..=12 {
                for (weekday_name, weekday) in WEEKDAY_NAMES {
                    let days = occurrences(year, month, weekday);
                    assert!(days.len() == 4 || days.len() == 5);

                    for (ordinal_name, ordinal) in ORDINAL_NAMES {
                        let expected = match ordinal {
                            Ordinal::Last => days.last().copied(),
                            Ordinal::Teenth => days
                                .iter()
                                .copied()
                                .find(|day| (TEENTH_FIRST_DAY..=TEENTH_LAST_DAY).contains(day)),
                            _ => ordinal
                                .rank()
                                .and_then(|rank| days.get(usize::from(rank) - 1).copied()),
                        };
                        assert_eq!(
                            meetup_day_of_month(year, month, ordinal_name, weekday_name),
                            expected,
                            "{ordinal_name} {weekday_name} of {year:04}-{month:02}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_last_and_teenth_always_resolve() {
        for year in 2000_u16..2400 {
            for month in 1..=12 {
                for (_, weekday) in WEEKDAY_NAMES {
                    let length = days_in_month(i32::from(year), month);

                    let last = find_day(i32::from(year), month, Ordinal::Last, weekday).unwrap();
                    assert!(last + 7 > length && last <= length);

                    let teenth =
                        find_day(i32::from(year), month, Ordinal::Teenth, weekday).unwrap();
                    assert!((TEENTH_FIRST_DAY..=TEENTH_LAST_DAY).contains(&teenth));
                }
            }
        }
    }

    #[test]
    fn test_fifth_fails_only_with_four_occurrences() {
        for year in 2000..2028 {
            for month in 1..=12 {
                for (_, weekday) in WEEKDAY_NAMES {
                    let count = occurrences(year, month, weekday).len();
                    let fifth = find_day(i32::from(year), month, Ordinal::Fifth, weekday);
                    assert_eq!(fifth.is_some(), count == 5, "{weekday} of {year:04}-{month:02}");
                }
            }
        }
    }

    fn teenth_tuesday_may_2013() -> Meetup {
        Meetup::new(
            Year::new(2013).unwrap(),
            Month::new(5).unwrap(),
            Ordinal::Teenth,
            Weekday::Tuesday,
        )
    }

    #[test]
    fn test_meetup_day() {
        let meetup = teenth_tuesday_may_2013();
        assert_eq!(meetup.day().unwrap().get(), 14);
    }

    #[test]
    fn test_meetup_day_no_such_day() {
        let meetup = Meetup::new(
            Year::new(2013).unwrap(),
            Month::new(8).unwrap(),
            Ordinal::Fifth,
            Weekday::Sunday,
        );
        assert!(matches!(meetup.day(), Err(MeetupError::NoSuchDay { .. })));
    }

    #[test]
    fn test_meetup_display() {
        assert_eq!(
            teenth_tuesday_may_2013().to_string(),
            "teenth Tuesday of 2013-05"
        );
    }

    #[test]
    fn test_meetup_parse() {
        let meetup = "teenth Tuesday of 2013-05".parse::<Meetup>().unwrap();
        assert_eq!(meetup, teenth_tuesday_may_2013());
        assert_eq!(meetup.year().get(), 2013);
        assert_eq!(meetup.month().get(), 5);
        assert_eq!(meetup.ordinal(), Ordinal::Teenth);
        assert_eq!(meetup.weekday(), Weekday::Tuesday);

        let spaced = "  third   Friday of 2013-9 ".parse::<Meetup>().unwrap();
        assert_eq!(spaced.day().unwrap().get(), 20);
    }

    #[test]
    fn test_meetup_parse_errors() {
        assert!(matches!("".parse::<Meetup>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "teenth Tuesday 2013-05".parse::<Meetup>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "teenth Tuesday in 2013-05".parse::<Meetup>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "bogus Tuesday of 2013-05".parse::<Meetup>(),
            Err(ParseError::UnknownOrdinal(_))
        ));
        assert!(matches!(
            "first Funday of 2013-05".parse::<Meetup>(),
            Err(ParseError::UnknownWeekday(_))
        ));
        assert!(matches!(
            "first Monday of 201305".parse::<Meetup>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "first Monday of 2013-13".parse::<Meetup>(),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            "first Monday of 0-05".parse::<Meetup>(),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            "first Monday of 2013-May".parse::<Meetup>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_meetup_serde() {
        let meetup = teenth_tuesday_may_2013();
        let json = serde_json::to_string(&meetup).unwrap();
        assert_eq!(json, "\"teenth Tuesday of 2013-05\"");

        let parsed: Meetup = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, meetup);

        assert!(serde_json::from_str::<Meetup>("\"teenth Tuesday\"").is_err());
    }
}
