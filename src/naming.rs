//! Calendar variants and the month/weekday names they use.

use crate::consts::{
    AREOSYNCHRONOUS_WEEK_SOLS, DEFROST_MONTHS, DEFROST_WEEK_SOLS, HENSEL_MONTHS, MARTIANA_MONTHS,
    MARTIANA_WEEK_SOLS,
};
use crate::prelude::*;
use std::borrow::Cow;
use std::convert::Infallible;
use std::str::FromStr;

/// Naming scheme of the Darian calendar.
///
/// The variant only affects month and weekday names; the arithmetic is the
/// same for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum CalendarVariant {
    /// Latin and Sanskrit zodiac names
    #[default]
    #[display(fmt = "Martiana")]
    Martiana,
    #[display(fmt = "Defrost")]
    Defrost,
    /// Defrost months with planetary weekday names
    #[display(fmt = "Areosynchronous")]
    Areosynchronous,
    /// Numbered seasonal months with Martiana weekdays
    #[display(fmt = "Hensel")]
    Hensel,
    /// Plain numbers for months and weekdays
    #[display(fmt = "Aqua")]
    Aqua,
    /// Any unrecognized variant; every name resolves to an empty string
    #[display(fmt = "")]
    Unknown,
}

/// Where the names of one kind come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameTable {
    Names(&'static [&'static str]),
    Numeric,
    Empty,
}

impl NameTable {
    /// Resolves a 1-based index to its display name
    pub(crate) fn resolve(self, index: u8) -> Cow<'static, str> {
        match self {
            Self::Names(names) => usize::from(index)
                .checked_sub(1)
                .and_then(|i| names.get(i))
                .map_or(Cow::Borrowed(""), |name| Cow::Borrowed(*name)),
            Self::Numeric => Cow::Owned(index.to_string()),
            Self::Empty => Cow::Borrowed(""),
        }
    }
}

impl CalendarVariant {
    /// The five named variants
    pub const ALL: [Self; 5] = [
        Self::Martiana,
        Self::Defrost,
        Self::Areosynchronous,
        Self::Hensel,
        Self::Aqua,
    ];

    /// Looks a variant up by name, ignoring case. Unrecognized names map to
    /// [`CalendarVariant::Unknown`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|variant| variant.to_string().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::Unknown)
    }

    pub(crate) const fn week_sol_table(self) -> NameTable {
        match self {
            Self::Martiana | Self::Hensel => NameTable::Names(&MARTIANA_WEEK_SOLS),
            Self::Defrost => NameTable::Names(&DEFROST_WEEK_SOLS),
            Self::Areosynchronous => NameTable::Names(&AREOSYNCHRONOUS_WEEK_SOLS),
            Self::Aqua => NameTable::Numeric,
            Self::Unknown => NameTable::Empty,
        }
    }

    pub(crate) const fn month_table(self) -> NameTable {
        match self {
            Self::Martiana => NameTable::Names(&MARTIANA_MONTHS),
            Self::Defrost | Self::Areosynchronous => NameTable::Names(&DEFROST_MONTHS),
            Self::Hensel => NameTable::Names(&HENSEL_MONTHS),
            Self::Aqua => NameTable::Numeric,
            Self::Unknown => NameTable::Empty,
        }
    }

    /// Name of the given sol of the week (1..=7)
    pub fn week_sol_name(self, week_sol: u8) -> Cow<'static, str> {
        self.week_sol_table().resolve(week_sol)
    }

    /// Name of the given month (1..=24)
    pub fn month_name(self, month: u8) -> Cow<'static, str> {
        self.month_table().resolve(month)
    }
}

impl FromStr for CalendarVariant {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_sol_names() {
        struct TestCase {
            variant:  CalendarVariant,
            expected: &'static str,
        }

        let cases = [
            TestCase { variant: CalendarVariant::Martiana, expected: "Sol Jovis" },
            TestCase { variant: CalendarVariant::Defrost, expected: "Erjasol" },
            TestCase { variant: CalendarVariant::Areosynchronous, expected: "Venusol" },
            TestCase { variant: CalendarVariant::Hensel, expected: "Sol Jovis" },
            TestCase { variant: CalendarVariant::Aqua, expected: "5" },
            TestCase { variant: CalendarVariant::Unknown, expected: "" },
        ];

        for case in &cases {
            assert_eq!(case.variant.week_sol_name(5), case.expected, "{:?}", case.variant);
        }
    }

    #[test]
    fn test_month_names() {
        struct TestCase {
            variant:  CalendarVariant,
            expected: &'static str,
        }

        let cases = [
            TestCase { variant: CalendarVariant::Martiana, expected: "Mithuna" },
            TestCase { variant: CalendarVariant::Defrost, expected: "Neturima" },
            TestCase { variant: CalendarVariant::Areosynchronous, expected: "Neturima" },
            TestCase { variant: CalendarVariant::Hensel, expected: "Duautumn" },
            TestCase { variant: CalendarVariant::Aqua, expected: "14" },
            TestCase { variant: CalendarVariant::Unknown, expected: "" },
        ];

        for case in &cases {
            assert_eq!(case.variant.month_name(14), case.expected, "{:?}", case.variant);
        }
    }

    #[test]
    fn test_table_edges() {
        assert_eq!(CalendarVariant::Martiana.month_name(1), "Sagittarius");
        assert_eq!(CalendarVariant::Martiana.month_name(24), "Vrishika");
        assert_eq!(CalendarVariant::Defrost.month_name(24), "Zungo");
        assert_eq!(CalendarVariant::Hensel.month_name(24), "Hexember");
        assert_eq!(CalendarVariant::Martiana.week_sol_name(1), "Sol Solis");
        assert_eq!(CalendarVariant::Areosynchronous.week_sol_name(7), "Jovisol");

        // out of range indices never panic
        assert_eq!(CalendarVariant::Martiana.month_name(0), "");
        assert_eq!(CalendarVariant::Defrost.week_sol_name(8), "");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(CalendarVariant::from_name("Martiana"), CalendarVariant::Martiana);
        assert_eq!(CalendarVariant::from_name("defrost"), CalendarVariant::Defrost);
        assert_eq!(CalendarVariant::from_name(" AQUA "), CalendarVariant::Aqua);
        assert_eq!(CalendarVariant::from_name("nothing"), CalendarVariant::Unknown);
        assert_eq!(CalendarVariant::from_name(""), CalendarVariant::Unknown);

        let parsed: CalendarVariant = "hensel".parse().unwrap();
        assert_eq!(parsed, CalendarVariant::Hensel);
    }

    #[test]
    fn test_display_round_trips_through_from_name() {
        for variant in CalendarVariant::ALL {
            assert_eq!(CalendarVariant::from_name(&variant.to_string()), variant);
        }
        assert_eq!(CalendarVariant::Unknown.to_string(), "");
        assert_eq!(CalendarVariant::default(), CalendarVariant::Martiana);
    }
}
