use std::{borrow::Cow, cmp::Ordering, hash::Hash};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    CalendarVariant, Error, MarsDate, SECONDS_PER_DAY, StoredSols,
    decompose::compose,
    epoch::{self, sols_from_timestamp, timestamp_from_sols},
    prelude::*,
    validate_digits,
};

const SECONDS_PER_HOUR: u32 = 3_600;
const SECONDS_PER_MINUTE: u32 = 60;
const MAX_HOUR: u8 = 23;
const MAX_MINUTE: u8 = 59;
const MAX_SECOND: u8 = 59;

/// A moment on Mars: the sol it falls in plus the time of sol.
/// Dereferences to the embedded [`MarsDate`] for the calendar fields.
#[derive(Debug, Clone, Copy, Deref, Display)]
#[display(fmt = "{} {:02}:{:02}:{:02}", date, hour, minute, second)]
pub struct MarsTime {
    #[deref]
    date:       MarsDate,
    total_sols: f64,
    hour:       u8,
    minute:     u8,
    second:     u8,
}

impl MarsTime {
    /// Creates the time at the given fractional sol count.
    pub fn new(total_sols: f64, variant: CalendarVariant) -> Self {
        // -0.0 and 0.0 must compare and hash the same
        let total_sols = total_sols + 0.0;
        let (hour, minute, second) = clock(total_sols - total_sols.floor());
        Self {
            date: MarsDate::new(total_sols, variant),
            total_sols,
            hour,
            minute,
            second,
        }
    }

    /// Converts an Earth instant.
    pub fn from_earth(timestamp: Timestamp, variant: CalendarVariant) -> Self {
        Self::new(sols_from_timestamp(timestamp), variant)
    }

    /// Parses an Earth date-time and converts it. Strings without an offset
    /// are taken as UTC.
    ///
    /// # Errors
    /// Returns `Error::Parse` if the string is not a recognized Earth date or date-time.
    pub fn parse_earth(s: &str, variant: CalendarVariant) -> Result<Self, Error> {
        Ok(Self::from_earth(epoch::parse_instant(s)?, variant))
    }

    /// The current Martian time.
    pub fn now(variant: CalendarVariant) -> Self {
        Self::from_earth(Timestamp::now(), variant)
    }

    /// Creates a time from its calendar and clock digits. The value points
    /// at the middle of the given second; years are limited to
    /// [`MAX_YEAR`](crate::MAX_YEAR) so the digits read back exactly.
    ///
    /// # Errors
    /// Returns the errors of [`MarsDate::by_digits`], and `Error::InvalidHour`,
    /// `Error::InvalidMinute` or `Error::InvalidSecond` for out of range clock digits.
    #[allow(clippy::cast_precision_loss)]
    pub fn by_digits(
        year: i64,
        month: u8,
        sol: u8,
        hour: u8,
        minute: u8,
        second: u8,
        variant: CalendarVariant,
    ) -> Result<Self, Error> {
        let (month, sol) = validate_digits(year, month, sol)?;
        if hour > MAX_HOUR {
            return Err(Error::InvalidHour(hour));
        }
        if minute > MAX_MINUTE {
            return Err(Error::InvalidMinute(minute));
        }
        if second > MAX_SECOND {
            return Err(Error::InvalidSecond(second));
        }

        let seconds = u32::from(hour) * SECONDS_PER_HOUR
            + u32::from(minute) * SECONDS_PER_MINUTE
            + u32::from(second);
        let fraction = (f64::from(seconds) + 0.5) / SECONDS_PER_DAY;
        Ok(Self::new(compose(year, month, sol) as f64 + fraction, variant))
    }

    /// Reconstructs a time from its JSON form. Only `total_sols` and
    /// `calendar_type` are read.
    ///
    /// # Errors
    /// Returns `Error::Json` if the string is not a JSON object with a numeric `total_sols`.
    pub fn from_json(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serializes every public field as a flat JSON object.
    ///
    /// # Errors
    /// Returns `Error::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// The Earth instant of this time, to the nearest second.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if the instant is outside what `jiff` supports.
    pub fn to_earth(&self) -> Result<Timestamp, Error> {
        timestamp_from_sols(self.total_sols)
    }

    /// The same moment under another naming variant
    #[must_use]
    pub const fn with_variant(self, variant: CalendarVariant) -> Self {
        Self {
            date: self.date.with_variant(variant),
            ..self
        }
    }

    /// The sol this time falls in
    pub const fn date(&self) -> MarsDate {
        self.date
    }

    /// Fractional sols since the Martian epoch
    pub const fn total_sols(&self) -> f64 {
        self.total_sols
    }

    /// Hour of the sol, 0..=23
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }
}

/// Splits a fraction of a sol into hour, minute and second, rounding down.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clock(fraction: f64) -> (u8, u8, u8) {
    let last_second = SECONDS_PER_DAY as u32 - 1;
    let seconds = ((fraction * SECONDS_PER_DAY).floor() as u32).min(last_second);
    (
        (seconds / SECONDS_PER_HOUR) as u8,
        (seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
        (seconds % SECONDS_PER_MINUTE) as u8,
    )
}

impl PartialEq for MarsTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MarsTime {}

impl PartialOrd for MarsTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MarsTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_sols.total_cmp(&other.total_sols)
    }
}

impl Hash for MarsTime {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.total_sols.to_bits().hash(state);
    }
}

/// JSON layout of a time
#[derive(Serialize)]
struct TimeFields {
    calendar_type:   String,
    total_sols:      f64,
    year:            i64,
    season:          u8,
    sol_of_season:   u8,
    month_of_season: u8,
    sol_of_year:     u16,
    month:           u8,
    sol:             u8,
    week_sol:        u8,
    week_sol_name:   Cow<'static, str>,
    month_name:      Cow<'static, str>,
    hour:            u8,
    min:             u8,
    sec:             u8,
}

impl Serialize for MarsTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        TimeFields {
            calendar_type:   self.variant().to_string(),
            total_sols:      self.total_sols,
            year:            self.year(),
            season:          self.season(),
            sol_of_season:   self.sol_of_season(),
            month_of_season: self.month_of_season(),
            sol_of_year:     self.sol_of_year(),
            month:           self.month(),
            sol:             self.sol(),
            week_sol:        self.week_sol(),
            week_sol_name:   self.week_sol_name(),
            month_name:      self.month_name(),
            hour:            self.hour,
            min:             self.minute,
            sec:             self.second,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MarsTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let stored = StoredSols::deserialize(deserializer)?;
        Ok(Self::new(stored.total_sols, stored.variant()))
    }
}
