#[macro_use]
mod logging;

mod consts;
mod decompose;
mod epoch;
mod naming;
mod prelude;
#[cfg(test)]
mod test_utils;
mod time;
mod types;

pub use consts::*;
pub use epoch::{earth_seconds_from_sols, sols_from_earth, sols_from_timestamp, timestamp_from_sols};
pub use naming::CalendarVariant;
pub use time::MarsTime;
pub use types::{is_leap_year, sols_in_month, sols_in_year, Month, Sol};

use crate::decompose::{compose, decompose, Fields};
use crate::prelude::*;
use jiff::civil;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Returns the current Martian date and time.
pub fn now(variant: CalendarVariant) -> MarsTime {
    MarsTime::now(variant)
}

/// A sol of the Darian calendar.
///
/// Every field is derived from the whole-sol count and the naming variant.
/// Equality, ordering and hashing only look at the sol count.
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "{}-{:02}-{:02}", "fields.year", "fields.month", "fields.sol")]
pub struct MarsDate {
    sols:    i64,
    variant: CalendarVariant,
    fields:  Fields,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid Earth date or time: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for building and converting Martian dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid year: {0} (must be within -1000000..=1000000)")]
    InvalidYear(i64),

    #[error("Invalid month: {0} (must be 1-24)")]
    InvalidMonth(u8),

    #[error("Invalid sol: {0} (must be 1-28)")]
    InvalidSol(u8),

    /// Sol 28 of a month that only has 27 sols in this year
    #[error("Invalid sol {sol} for month {year}-{month:02}")]
    InvalidLeapSol { year: i64, month: u8, sol: u8 },

    #[error("Invalid hour: {0} (must be 0-23)")]
    InvalidHour(u8),

    #[error("Invalid minute: {0} (must be 0-59)")]
    InvalidMinute(u8),

    #[error("Invalid second: {0} (must be 0-59)")]
    InvalidSecond(u8),

    /// The Earth instant cannot be represented.
    #[error("Earth instant out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<jiff::Error> for Error {
    fn from(err: jiff::Error) -> Self {
        Self::OutOfRange(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl MarsDate {
    /// Creates the date containing the given sol count. The fractional part is dropped.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(total_sols: f64, variant: CalendarVariant) -> Self {
        Self::from_whole_sols(total_sols.floor() as i64, variant)
    }

    fn from_whole_sols(sols: i64, variant: CalendarVariant) -> Self {
        Self {
            sols,
            variant,
            fields: decompose(sols),
        }
    }

    /// Converts an Earth date, taken at UTC midnight.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if the date has no UTC midnight in `jiff`'s range.
    pub fn from_earth(date: civil::Date, variant: CalendarVariant) -> Result<Self, Error> {
        let midnight = epoch::utc_midnight(date)?;
        Ok(Self::from_timestamp(midnight, variant))
    }

    /// Converts an Earth instant to the sol it falls in.
    pub fn from_timestamp(timestamp: Timestamp, variant: CalendarVariant) -> Self {
        Self::new(sols_from_timestamp(timestamp), variant)
    }

    /// Parses an Earth date (or date-time, of which only the UTC date is used)
    /// and converts it.
    ///
    /// # Errors
    /// Returns `Error::Parse` if the string is not a recognized Earth date.
    pub fn parse_earth(s: &str, variant: CalendarVariant) -> Result<Self, Error> {
        let instant = epoch::parse_instant(s)?;
        Self::from_earth(instant.to_zoned(TimeZone::UTC).date(), variant)
    }

    /// The sol containing the start of the current UTC day.
    pub fn today(variant: CalendarVariant) -> Self {
        Self::new(sols_from_earth(epoch::utc_day_start(Timestamp::now())), variant)
    }

    /// Creates a date from its calendar digits.
    ///
    /// # Errors
    /// Returns `Error::InvalidYear` beyond [`MAX_YEAR`] in either direction,
    /// `Error::InvalidMonth` or `Error::InvalidSol` for out of range digits,
    /// and `Error::InvalidLeapSol` for sol 28 of a 27-sol month.
    pub fn by_digits(year: i64, month: u8, sol: u8, variant: CalendarVariant) -> Result<Self, Error> {
        let (month, sol) = validate_digits(year, month, sol)?;
        Ok(Self::from_whole_sols(compose(year, month, sol), variant))
    }

    /// Reconstructs a date from its JSON form. Only `total_sols` and
    /// `calendar_type` are read; every other field is derived again.
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

    /// The same sol under another naming variant
    #[must_use]
    pub const fn with_variant(self, variant: CalendarVariant) -> Self {
        Self { variant, ..self }
    }

    /// The Earth date on which this sol begins (UTC).
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if the date is outside what `jiff` supports.
    pub fn to_earth(&self) -> Result<civil::Date, Error> {
        let instant = timestamp_from_sols(self.total_sols())?;
        Ok(instant.to_zoned(TimeZone::UTC).date())
    }

    /// Whole sols since the Martian epoch
    #[allow(clippy::cast_precision_loss)]
    pub const fn total_sols(&self) -> f64 {
        self.sols as f64
    }

    pub const fn variant(&self) -> CalendarVariant {
        self.variant
    }

    pub const fn year(&self) -> i64 {
        self.fields.year
    }

    /// Month of the year, 1..=24
    pub const fn month(&self) -> u8 {
        self.fields.month
    }

    /// Sol of the month, 1..=28
    pub const fn sol(&self) -> u8 {
        self.fields.sol
    }

    /// Alias for [`MarsDate::sol`]
    pub const fn day(&self) -> u8 {
        self.sol()
    }

    /// Season of the year, 0..=3
    pub const fn season(&self) -> u8 {
        self.fields.season
    }

    /// Sol of the season, 0..=167
    pub const fn sol_of_season(&self) -> u8 {
        self.fields.sol_of_season
    }

    /// Month of the season, 0..=5
    pub const fn month_of_season(&self) -> u8 {
        self.fields.month_of_season
    }

    /// Zero-based sol of the year, 0..=668
    pub const fn sol_of_year(&self) -> u16 {
        self.fields.sol_of_year
    }

    /// Sol of the week, 1..=7
    pub const fn week_sol(&self) -> u8 {
        self.fields.week_sol
    }

    /// Alias for [`MarsDate::week_sol`]
    pub const fn week_day(&self) -> u8 {
        self.week_sol()
    }

    pub fn month_name(&self) -> Cow<'static, str> {
        self.variant.month_name(self.fields.month)
    }

    pub fn week_sol_name(&self) -> Cow<'static, str> {
        self.variant.week_sol_name(self.fields.week_sol)
    }

    pub const fn is_leap(&self) -> bool {
        is_leap_year(self.fields.year)
    }

    pub const fn sols_in_year(&self) -> u16 {
        sols_in_year(self.fields.year)
    }
}

/// Checks calendar digits and returns them in their validated form
pub(crate) fn validate_digits(year: i64, month: u8, sol: u8) -> Result<(Month, Sol), Error> {
    let validated = if (-MAX_YEAR..=MAX_YEAR).contains(&year) {
        Month::new(month).and_then(|m| Sol::new(sol, year, m).map(|s| (m, s)))
    } else {
        Err(Error::InvalidYear(year))
    };
    if let Err(_err) = &validated {
        debug!("rejected Martian digits {year}-{month}-{sol}: {_err}");
    }
    validated
}

impl PartialEq for MarsDate {
    fn eq(&self, other: &Self) -> bool {
        self.sols == other.sols
    }
}

impl Eq for MarsDate {}

impl PartialOrd for MarsDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MarsDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sols.cmp(&other.sols)
    }
}

impl Hash for MarsDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sols.hash(state);
    }
}

/// JSON layout of a date; keys in alphabetical order
#[derive(Serialize)]
struct DateFields {
    calendar_type:   String,
    month:           u8,
    month_name:      Cow<'static, str>,
    month_of_season: u8,
    season:          u8,
    sol:             u8,
    sol_of_season:   u8,
    sol_of_year:     u16,
    total_sols:      i64,
    week_sol:        u8,
    week_sol_name:   Cow<'static, str>,
    year:            i64,
}

/// The part of a serialized date or time that is read back
#[derive(Deserialize)]
pub(crate) struct StoredSols {
    pub total_sols:    f64,
    #[serde(default)]
    pub calendar_type: String,
}

impl StoredSols {
    pub(crate) fn variant(&self) -> CalendarVariant {
        CalendarVariant::from_name(&self.calendar_type)
    }
}

impl Serialize for MarsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        DateFields {
            calendar_type:   self.variant.to_string(),
            month:           self.month(),
            month_name:      self.month_name(),
            month_of_season: self.month_of_season(),
            season:          self.season(),
            sol:             self.sol(),
            sol_of_season:   self.sol_of_season(),
            sol_of_year:     self.sol_of_year(),
            total_sols:      self.sols,
            week_sol:        self.week_sol(),
            week_sol_name:   self.week_sol_name(),
            year:            self.year(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MarsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let stored = StoredSols::deserialize(deserializer)?;
        Ok(Self::new(stored.total_sols, stored.variant()))
    }
}
