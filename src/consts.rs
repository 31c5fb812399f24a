/// Length of one sol in Earth days
pub const MARS_TO_EARTH_DAYS: f64 = 1.027_491_251;

/// Earth-day offset of the Martian epoch, counted from Earth day 0
pub const EPOCH_OFFSET: f64 = 587_744.778_17;

/// Seconds in one Earth day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// One second expressed in Earth days
pub const ROUND_UP_SECOND: f64 = 1.0 / SECONDS_PER_DAY;

/// Earth days from day 0 to the Unix epoch (1970-01-01)
pub const EARTH_DAYS_TO_UNIX_EPOCH: f64 = 719_527.0;

/// Maximum valid month (Vrishika in the Martiana naming)
pub const MAX_MONTH: u8 = 24;

/// Maximum sol of a month; the last month of a season only reaches it
/// in month 24 of a leap year
pub const MAX_SOL: u8 = 28;

/// First sol of a month
pub const MIN_SOL: u8 = 1;

/// Months in one season
pub const MONTHS_PER_SEASON: u8 = 6;

/// Sols in a full month
pub const SOLS_PER_MONTH: u8 = 28;

/// Sols in one week
pub const SOLS_PER_WEEK: u8 = 7;

/// Sols in a common year
pub const COMMON_YEAR_SOLS: u16 = 668;

/// Sols in a leap year
pub const LEAP_YEAR_SOLS: u16 = 669;

/// Largest year magnitude accepted from calendar digits. Within it a time of
/// sol keeps well under a second of `f64` precision.
pub const MAX_YEAR: i64 = 1_000_000;

/// Sols in each of the first three seasons; the last one gets the remainder
pub(crate) const SOLS_PER_SEASON: u16 = 167;

/// Five hundred years; the only century that begins with a leap sol is the
/// first one of each span
pub(crate) const SOLS_PER_QUINCENTURY: i64 = 334_296;
/// One hundred years, not counting the leap sol the century may begin with
pub(crate) const SOLS_PER_CENTURY: i64 = 66_859;
/// Ten years
pub(crate) const SOLS_PER_DECADE: i64 = 6_686;
/// A common year plus a leap year
pub(crate) const SOLS_PER_YEAR_PAIR: i64 = 1_337;

/// Every 500th year is a leap year...
pub(crate) const QUINCENTURY_CYCLE: i64 = 500;
/// ...other century years are not...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...decade years are...
pub(crate) const DECADE_CYCLE: i64 = 10;
/// ...other even years are not, and odd years are.
pub(crate) const PAIR_CYCLE: i64 = 2;

/// Trailing zone designator accepted on civil Earth date-times
pub(crate) const UTC_SUFFIX: &str = "UTC";

/// Weekday names of the Martiana calendar, also used by Hensel
pub const MARTIANA_WEEK_SOLS: [&str; 7] = [
    "Sol Solis",
    "Sol Lunae",
    "Sol Martis",
    "Sol Mercurii",
    "Sol Jovis",
    "Sol Veneris",
    "Sol Saturni",
];

/// Weekday names of the Defrost calendar
pub const DEFROST_WEEK_SOLS: [&str; 7] = [
    "Axatisol", "Benasol", "Ciposol", "Domesol", "Erjasol", "Fulisol", "Gavisol",
];

/// Weekday names of the Areosynchronous calendar
pub const AREOSYNCHRONOUS_WEEK_SOLS: [&str; 7] = [
    "Heliosol",
    "Phobosol",
    "Deimosol",
    "Terrasol",
    "Venusol",
    "Mercurisol",
    "Jovisol",
];

/// Month names of the Martiana calendar
pub const MARTIANA_MONTHS: [&str; 24] = [
    "Sagittarius",
    "Dhanus",
    "Capricornus",
    "Makara",
    "Aquarius",
    "Kumbha",
    "Pisces",
    "Mina",
    "Aries",
    "Mesha",
    "Taurus",
    "Rishabha",
    "Gemini",
    "Mithuna",
    "Cancer",
    "Karka",
    "Leo",
    "Simha",
    "Virgo",
    "Kanya",
    "Libra",
    "Tula",
    "Scorpius",
    "Vrishika",
];

/// Month names of the Defrost calendar, also used by Areosynchronous
pub const DEFROST_MONTHS: [&str; 24] = [
    "Adir", "Bora", "Coan", "Deti", "Edal", "Flo", "Geor", "Heliba", "Idanon", "Jowani", "Kireal",
    "Larno", "Medior", "Neturima", "Ozulikan", "Pasurabi", "Rudiakel", "Safundo", "Tiunor",
    "Ulasja", "Vadeun", "Wakumi", "Xetual", "Zungo",
];

/// Month names of the Hensel calendar
pub const HENSEL_MONTHS: [&str; 24] = [
    "Vernalis",
    "Duvernalis",
    "Trivernalis",
    "Quadrivernalis",
    "Pentavernalis",
    "Hexavernalis",
    "Aestas",
    "Duestas",
    "Triestas",
    "Quadrestas",
    "Pentestas",
    "Hexestas",
    "Autumnus",
    "Duautumn",
    "Triautumn",
    "Quadrautumn",
    "Pentautumn",
    "Hexautumn",
    "Unember",
    "Duember",
    "Triember",
    "Quadrember",
    "Pentember",
    "Hexember",
];
