//! Structured date-time and change granularity

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use super::weekday::Weekday;

/// How much of a date-time changed between two renders
///
/// Ordered from the cheapest redraw to the most expensive one, so
/// `granularity <= Granularity::Minute` reads as "nothing above the
/// minutes changed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Granularity {
    /// Year through minute identical; at most the seconds differ
    Second,
    /// Year through hour identical; the minute differs
    Minute,
    /// Year through day identical; the hour differs
    Hour,
    /// Day, month or year differs, or nothing was rendered before
    Full,
}

/// A wall-clock date and time with one-second resolution
///
/// Backed by a [`NaiveDateTime`], so a `DateTime` always names a real
/// Gregorian calendar instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    inner: NaiveDateTime,
}

impl DateTime {
    /// Create a date-time, returning `None` if any field is out of range
    ///
    /// - `month`: 1-12
    /// - `day`: 1 to the length of the month (leap years honoured)
    /// - `hour`: 0-23, `minute` and `second`: 0-59
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Option<Self> {
        let inner = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)?
            .and_hms_opt(hour as u32, minute as u32, second as u32)?;

        Some(Self { inner })
    }

    /// Underlying chrono value
    pub fn naive(&self) -> NaiveDateTime {
        self.inner
    }

    pub fn year(&self) -> u16 {
        self.inner.year() as u16
    }

    pub fn month(&self) -> u8 {
        self.inner.month() as u8
    }

    pub fn day(&self) -> u8 {
        self.inner.day() as u8
    }

    pub fn hour(&self) -> u8 {
        self.inner.hour() as u8
    }

    pub fn minute(&self) -> u8 {
        self.inner.minute() as u8
    }

    pub fn second(&self) -> u8 {
        self.inner.second() as u8
    }

    /// Day of the week for this date
    pub fn weekday(&self) -> Weekday {
        self.inner.weekday().into()
    }

    /// Hour on a 12-hour dial, plus whether it is afternoon
    ///
    /// Midnight is 12 AM and noon is 12 PM.
    pub fn to_12_hour(&self) -> (u8, bool) {
        let (is_pm, hour) = self.inner.hour12();
        (hour as u8, is_pm)
    }

    /// Compare against the previously rendered date-time
    ///
    /// Returns the coarsest field that differs. With no previous render
    /// the result is always [`Granularity::Full`].
    pub fn changed_since(&self, previous: Option<DateTime>) -> Granularity {
        let Some(previous) = previous else {
            return Granularity::Full;
        };

        if self.inner.date() != previous.inner.date() {
            Granularity::Full
        } else if self.hour() != previous.hour() {
            Granularity::Hour
        } else if self.minute() != previous.minute() {
            Granularity::Minute
        } else {
            Granularity::Second
        }
    }
}

impl From<NaiveDateTime> for DateTime {
    fn from(inner: NaiveDateTime) -> Self {
        // Drop sub-second precision; faces work in whole seconds
        Self {
            inner: inner.with_nanosecond(0).unwrap_or(inner),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DateTime {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{=u16}-{=u8}-{=u8} {=u8}:{=u8}:{=u8}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}
