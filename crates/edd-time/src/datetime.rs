//! `TimeOfDay` and `LocalDateTime` — the instants the cutoff comparison
//! operates on.
//!
//! The library never reads a clock: the caller resolves the store
//! timezone and hands in a [`LocalDateTime`]. The cutoff instant is
//! constructed on the same calendar date as "now", so no timezone
//! arithmetic ever crosses into this crate.

use crate::date::Date;
use edd_core::errors::{Error, Result};

/// A wall-clock time of day (hour, minute, second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Create a time of day. Hour must be 0–23, minute and second 0–59.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour > 23 {
            return Err(Error::Time(format!("hour {hour} out of range [0, 23]")));
        }
        if minute > 59 {
            return Err(Error::Time(format!("minute {minute} out of range [0, 59]")));
        }
        if second > 59 {
            return Err(Error::Time(format!("second {second} out of range [0, 59]")));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Create a time of day on the minute (second = 0).
    ///
    /// This is the shape cutoff times take.
    pub fn hm(hour: u8, minute: u8) -> Result<Self> {
        Self::new(hour, minute, 0)
    }

    /// Return the hour (0–23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Return the minute (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Return the second (0–59).
    pub fn second(&self) -> u8 {
        self.second
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = Error;

    /// Parse `HH:MM` or `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        let (h, m, sec) = match parts.as_slice() {
            [h, m] => (h, m, None),
            [h, m, sec] => (h, m, Some(sec)),
            _ => return Err(Error::Time(format!("expected HH:MM[:SS], got {s:?}"))),
        };
        let bad = |_| Error::Time(format!("expected HH:MM[:SS], got {s:?}"));
        let hour: u8 = h.parse().map_err(bad)?;
        let minute: u8 = m.parse().map_err(bad)?;
        let second: u8 = match sec {
            Some(sec) => sec.parse().map_err(bad)?,
            None => 0,
        };
        Self::new(hour, minute, second)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::TimeOfDay;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    /// Times serialize as their `HH:MM:SS` string.
    impl Serialize for TimeOfDay {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for TimeOfDay {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        }
    }
}

/// A timezone-naive instant: a calendar date plus a time of day.
///
/// Ordering is lexicographic on (date, time), which is exactly the
/// "now < cutoff" comparison the estimator performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    date: Date,
    time: TimeOfDay,
}

impl LocalDateTime {
    /// Combine a date and a time of day.
    pub fn new(date: Date, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Return the calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Return the time of day.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }
}

impl std::fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
