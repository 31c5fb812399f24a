//! Mixed-radix conversion between a whole-sol count and calendar fields.
//!
//! Leap sols follow a nested 500/100/10/2-year cycle. Counting down from the
//! largest period, each level either starts with a leap sol or not, and the
//! remainder is adjusted accordingly before moving to the next level.

use crate::consts::{
    CENTURY_CYCLE, COMMON_YEAR_SOLS, DECADE_CYCLE, LEAP_YEAR_SOLS, MONTHS_PER_SEASON, PAIR_CYCLE,
    QUINCENTURY_CYCLE, SOLS_PER_CENTURY, SOLS_PER_DECADE, SOLS_PER_MONTH, SOLS_PER_QUINCENTURY,
    SOLS_PER_SEASON, SOLS_PER_WEEK, SOLS_PER_YEAR_PAIR,
};
use crate::types::{Month, Sol};

/// Calendar fields of one sol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Fields {
    pub year:            i64,
    pub season:          u8,
    pub sol_of_season:   u8,
    pub month_of_season: u8,
    pub sol_of_year:     u16,
    pub month:           u8,
    pub sol:             u8,
    pub week_sol:        u8,
}

/// Splits a whole-sol count into calendar fields. Total over all of `i64`;
/// the 500-year remainder is never negative, so pre-epoch counts go through
/// the same branches as post-epoch ones.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn decompose(whole_sols: i64) -> Fields {
    let s_d = whole_sols.div_euclid(SOLS_PER_QUINCENTURY);
    let do_d = whole_sols.rem_euclid(SOLS_PER_QUINCENTURY);

    // only the first century of a 500-year span begins with a leap sol
    let s_c = if do_d == 0 {
        0
    } else {
        (do_d - 1).div_euclid(SOLS_PER_CENTURY)
    };
    let do_c = if s_c == 0 {
        do_d
    } else {
        do_d - (s_c * SOLS_PER_CENTURY + 1)
    };

    let (s_x, do_x) = if s_c == 0 {
        let s_x = do_c.div_euclid(SOLS_PER_DECADE);
        (s_x, do_c - s_x * SOLS_PER_DECADE)
    } else {
        // century that does not begin with a leap sol
        let s_x = (do_c + 1).div_euclid(SOLS_PER_DECADE);
        let do_x = if s_x == 0 {
            do_c
        } else {
            do_c - (s_x * SOLS_PER_DECADE - 1)
        };
        (s_x, do_x)
    };

    let (s_ii, do_ii) = if s_c != 0 && s_x == 0 {
        // decade that does not begin with a leap sol
        let s_ii = do_x.div_euclid(SOLS_PER_YEAR_PAIR);
        (s_ii, do_x - s_ii * SOLS_PER_YEAR_PAIR)
    } else {
        // 1338, 1337, 1337, ...
        let s_ii = if do_x == 0 {
            0
        } else {
            (do_x - 1).div_euclid(SOLS_PER_YEAR_PAIR)
        };
        let do_ii = if s_ii == 0 {
            do_x
        } else {
            do_x - (s_ii * SOLS_PER_YEAR_PAIR + 1)
        };
        (s_ii, do_ii)
    };

    let leap = i64::from(LEAP_YEAR_SOLS);
    let common = i64::from(COMMON_YEAR_SOLS);
    let (s_i, do_i) = if s_ii == 0 && (s_x != 0 || s_c == 0) {
        // 669, 668
        let s_i = do_ii.div_euclid(leap);
        (s_i, if s_i == 0 { do_ii } else { do_ii - leap })
    } else {
        // 668, 669
        let s_i = (do_ii + 1).div_euclid(leap);
        (s_i, if s_i == 0 { do_ii } else { do_ii - common })
    };

    let year = QUINCENTURY_CYCLE * s_d
        + CENTURY_CYCLE * s_c
        + DECADE_CYCLE * s_x
        + PAIR_CYCLE * s_ii
        + s_i;

    let sol_of_year = do_i as u16;
    let season = (sol_of_year / SOLS_PER_SEASON).min(3) as u8;
    let sol_of_season = (sol_of_year - SOLS_PER_SEASON * u16::from(season)) as u8;
    let month_of_season = sol_of_season / SOLS_PER_MONTH;
    let month = month_of_season + MONTHS_PER_SEASON * season + 1;
    let sol = (sol_of_year + 1 + u16::from(season) - u16::from(month - 1) * u16::from(SOLS_PER_MONTH)) as u8;
    let week_sol = (sol - 1) % SOLS_PER_WEEK + 1;

    Fields {
        year,
        season,
        sol_of_season,
        month_of_season,
        sol_of_year,
        month,
        sol,
        week_sol,
    }
}

/// Whole-sol count of the given calendar date; inverse of [`decompose`].
pub(crate) fn compose(year: i64, month: Month, sol: Sol) -> i64 {
    let months_before = i64::from(month.get() - 1);
    i64::from(sol.get()) + months_before * i64::from(SOLS_PER_MONTH)
        - months_before / i64::from(MONTHS_PER_SEASON)
        + i64::from(COMMON_YEAR_SOLS) * year
        + year.div_euclid(PAIR_CYCLE)
        + (year - 1).div_euclid(DECADE_CYCLE)
        - (year - 1).div_euclid(CENTURY_CYCLE)
        + (year - 1).div_euclid(QUINCENTURY_CYCLE)
}
