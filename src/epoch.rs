//! Conversion between Earth instants and the continuous Martian sol count.

use crate::consts::{
    EARTH_DAYS_TO_UNIX_EPOCH, EPOCH_OFFSET, MARS_TO_EARTH_DAYS, ROUND_UP_SECOND, SECONDS_PER_DAY,
    UTC_SUFFIX,
};
use crate::{Error, ParseError};
use jiff::civil::{self, DateTime};
use jiff::tz::TimeZone;
use jiff::Timestamp;

/// Converts seconds since the Unix epoch into fractional sols since the
/// Martian epoch.
pub fn sols_from_earth(seconds: f64) -> f64 {
    let earth_days = seconds / SECONDS_PER_DAY + EARTH_DAYS_TO_UNIX_EPOCH;
    (earth_days - EPOCH_OFFSET) / MARS_TO_EARTH_DAYS
}

/// Converts fractional sols since the Martian epoch into seconds since the
/// Unix epoch.
///
/// The extra second added in days and taken off again in seconds keeps
/// floating-point truncation from landing one second early.
pub fn earth_seconds_from_sols(total_sols: f64) -> f64 {
    let earth_days = total_sols * MARS_TO_EARTH_DAYS + EPOCH_OFFSET + ROUND_UP_SECOND;
    (earth_days - EARTH_DAYS_TO_UNIX_EPOCH) * SECONDS_PER_DAY - 1.0
}

/// Sols at the given instant
pub fn sols_from_timestamp(timestamp: Timestamp) -> f64 {
    sols_from_earth(timestamp.as_duration().as_secs_f64())
}

/// The Earth instant of the given sol count, to the nearest whole second.
///
/// # Errors
/// Returns `Error::OutOfRange` if the instant is outside what `jiff` supports.
#[allow(clippy::cast_possible_truncation)]
pub fn timestamp_from_sols(total_sols: f64) -> Result<Timestamp, Error> {
    let seconds = earth_seconds_from_sols(total_sols).round();
    Ok(Timestamp::from_second(seconds as i64)?)
}

/// UTC midnight at the start of the given Earth date
pub(crate) fn utc_midnight(date: civil::Date) -> Result<Timestamp, Error> {
    utc_timestamp(date.to_datetime(civil::Time::midnight()))
}

/// UTC midnight at the start of the Earth day containing `timestamp`
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn utc_day_start(timestamp: Timestamp) -> f64 {
    let seconds_per_day = SECONDS_PER_DAY as i64;
    let day = timestamp.as_second().div_euclid(seconds_per_day);
    (day * seconds_per_day) as f64
}

fn utc_timestamp(datetime: DateTime) -> Result<Timestamp, Error> {
    Ok(datetime.to_zoned(TimeZone::UTC)?.timestamp())
}

/// Parses an Earth date or date-time.
///
/// Accepted, in order: a timestamp with an offset (`2012-10-15T16:50:00Z`),
/// a civil date-time taken as UTC, optionally followed by `UTC`
/// (`2012-10-15 16:50:00 UTC`), and a bare date taken as UTC midnight.
pub(crate) fn parse_instant(input: &str) -> Result<Timestamp, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput.into());
    }

    if let Ok(timestamp) = trimmed.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    let civil_part = trimmed
        .strip_suffix(UTC_SUFFIX)
        .map_or(trimmed, str::trim_end);
    trace!("no offset in {trimmed:?}, reading {civil_part:?} as UTC");

    if let Ok(datetime) = civil_part.parse::<DateTime>() {
        return utc_timestamp(datetime);
    }

    match civil_part.parse::<civil::Date>() {
        Ok(date) => utc_midnight(date),
        Err(err) => {
            debug!("rejected Earth date {input:?}: {err}");
            Err(ParseError::InvalidFormat(format!("{trimmed} ({err})")).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    const REFERENCE_SECONDS: i64 = 1_350_319_800; // 2012-10-15T16:50:00Z

    #[test]
    fn test_sols_from_earth_reference() {
        let sols = sols_from_earth(REFERENCE_SECONDS as f64);
        assert!((sols - 143_466.840_301_970_54).abs() < 1e-9, "{sols}");
    }

    #[test]
    fn test_sols_from_timestamp_matches_seconds() {
        let ts = Timestamp::from_second(REFERENCE_SECONDS).unwrap();
        assert_eq!(sols_from_timestamp(ts), sols_from_earth(REFERENCE_SECONDS as f64));
    }

    #[test]
    fn test_round_trip_seconds() {
        let mut sols = -1_000_000.0;
        while sols <= 1_000_000.0 {
            let back = sols_from_earth(earth_seconds_from_sols(sols));
            assert!((back - sols).abs() < 1e-6, "{sols} came back as {back}");
            sols += 1_234.567;
        }
    }

    #[test]
    fn test_timestamp_round_trip() {
        let ts = Timestamp::from_second(REFERENCE_SECONDS).unwrap();
        let back = timestamp_from_sols(sols_from_timestamp(ts)).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn test_timestamp_from_sols_out_of_range() {
        assert!(matches!(timestamp_from_sols(1e15), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn test_utc_midnight() {
        let ts = utc_midnight(date(2012, 10, 15)).unwrap();
        assert_eq!(ts.as_second(), 1_350_259_200);
    }

    #[test]
    fn test_utc_day_start() {
        let ts = Timestamp::from_second(REFERENCE_SECONDS).unwrap();
        assert_eq!(utc_day_start(ts), 1_350_259_200.0);

        let before_epoch = Timestamp::from_second(-1).unwrap();
        assert_eq!(utc_day_start(before_epoch), -86_400.0);
    }

    #[test]
    fn test_parse_instant_formats() {
        struct TestCase {
            input:   &'static str,
            seconds: i64,
        }

        let cases = [
            TestCase { input: "2012-10-15T16:50:00Z", seconds: REFERENCE_SECONDS },
            TestCase { input: "2012-10-15T18:50:00+02:00", seconds: REFERENCE_SECONDS },
            TestCase { input: "2012-10-15T16:50:00", seconds: REFERENCE_SECONDS },
            TestCase { input: "2012-10-15T16:50:00 UTC", seconds: REFERENCE_SECONDS },
            TestCase { input: "  2012-10-15  ", seconds: 1_350_259_200 },
        ];

        for case in &cases {
            let ts = parse_instant(case.input).unwrap();
            assert_eq!(ts.as_second(), case.seconds, "input {:?}", case.input);
        }
    }

    #[test]
    fn test_parse_instant_errors() {
        assert!(matches!(
            parse_instant("   "),
            Err(Error::Parse(ParseError::EmptyInput))
        ));
        assert!(matches!(
            parse_instant("not a date"),
            Err(Error::Parse(ParseError::InvalidFormat(_)))
        ));
        assert!(matches!(
            parse_instant("2012-13-45"),
            Err(Error::Parse(ParseError::InvalidFormat(_)))
        ));
    }
}
