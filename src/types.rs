use crate::consts::{
    CENTURY_CYCLE, COMMON_YEAR_SOLS, DECADE_CYCLE, LEAP_YEAR_SOLS, MAX_MONTH, MAX_SOL, MIN_SOL,
    MONTHS_PER_SEASON, PAIR_CYCLE, QUINCENTURY_CYCLE, SOLS_PER_MONTH,
};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=24)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `Error::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, Error> {
        let non_zero = NonZeroU8::new(value).ok_or(Error::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(Error::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Whether this is the sixth, shortened month of its season
    #[inline]
    pub const fn ends_season(self) -> bool {
        self.get() % MONTHS_PER_SEASON == 0
    }
}

impl TryFrom<u8> for Month {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sol-of-month value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid sol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Sol(NonZeroU8);

impl Sol {
    /// Creates a new Sol, validating it against the month it falls in.
    ///
    /// Sol 28 of the last month of a season only exists as the leap sol at
    /// the end of month 24 in a leap year.
    ///
    /// # Errors
    /// Returns `Error::InvalidSol` if the value is 0 or > `MAX_SOL`, and
    /// `Error::InvalidLeapSol` if the value is 28 in a month that has only 27 sols.
    pub fn new(value: u8, year: i64, month: Month) -> Result<Self, Error> {
        let sol = Self::try_from(value)?;
        if value > sols_in_month(year, month) {
            return Err(Error::InvalidLeapSol {
                year,
                month: month.get(),
                sol: value,
            });
        }
        Ok(sol)
    }

    /// Returns the sol value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Sol {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't check the leap sol without year/month context, so only the range
        if !(MIN_SOL..=MAX_SOL).contains(&value) {
            return Err(Error::InvalidSol(value));
        }
        NonZeroU8::new(value).map(Self).ok_or(Error::InvalidSol(value))
    }
}

impl From<Sol> for u8 {
    fn from(sol: Sol) -> Self {
        sol.0.get()
    }
}

impl fmt::Display for Sol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Returns true if the given Darian year has 669 sols.
///
/// Leap unless divisible by 100 (but not by 500), or even (but not divisible by 10).
pub const fn is_leap_year(year: i64) -> bool {
    if year % QUINCENTURY_CYCLE == 0 {
        true
    } else if year % CENTURY_CYCLE == 0 {
        false
    } else if year % DECADE_CYCLE == 0 {
        true
    } else {
        year % PAIR_CYCLE != 0
    }
}

/// Number of sols in the given year
pub const fn sols_in_year(year: i64) -> u16 {
    if is_leap_year(year) {
        LEAP_YEAR_SOLS
    } else {
        COMMON_YEAR_SOLS
    }
}

/// Number of sols in the given month of the given year
pub const fn sols_in_month(year: i64, month: Month) -> u8 {
    if month.ends_season() && !(month.get() == MAX_MONTH && is_leap_year(year)) {
        SOLS_PER_MONTH - 1
    } else {
        SOLS_PER_MONTH
    }
}
