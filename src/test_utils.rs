//! Shared fixtures for unit tests.

use jiff::Timestamp;
use jiff::civil::{self, date};

use crate::{CalendarVariant, MarsDate};

/// JSON of 214-14-26 (Martiana), keys as the serializer emits them
pub(crate) const MARS_DATE_JSON: &str = r#"{"calendar_type":"Martiana","month":14,"month_name":"Mithuna","month_of_season":1,"season":2,"sol":26,"sol_of_season":53,"sol_of_year":387,"total_sols":143466,"week_sol":5,"week_sol_name":"Sol Jovis","year":214}"#;

/// JSON of the Martian time at 2012-10-15T16:50:00Z
pub(crate) const MARS_TIME_JSON: &str = r#"{"calendar_type":"Martiana","total_sols":143466.84030197054,"year":214,"season":2,"sol_of_season":53,"month_of_season":1,"sol_of_year":387,"month":14,"sol":26,"week_sol":5,"week_sol_name":"Sol Jovis","month_name":"Mithuna","hour":20,"min":10,"sec":2}"#;

/// 2012-10-15, which is 214-14-26 on Mars
pub(crate) const fn earth_date() -> civil::Date {
    date(2012, 10, 15)
}

/// 2012-10-15T16:50:00Z, which is 214-14-26 20:10:02 on Mars
pub(crate) fn earth_time() -> Timestamp {
    Timestamp::from_second(1_350_319_800).expect("reference Earth time is in range")
}

/// A Martiana date from valid digits
pub(crate) fn mars_date(year: i64, month: u8, sol: u8) -> MarsDate {
    MarsDate::by_digits(year, month, sol, CalendarVariant::Martiana)
        .unwrap_or_else(|err| panic!("invalid test digits {year}-{month}-{sol}: {err}"))
}
