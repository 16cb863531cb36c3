//! Two-branch review scheduler.
//!
//! A rating moves the item's next eligible review date forward from today:
//! - Correct answer: one week
//! - Incorrect answer: one day
//!
//! There is no per-item history; the previous date does not influence the next one.

use crate::error::{Error, Result};
use chrono::{Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const CORRECT_INTERVAL_DAYS: u64 = 7;
pub const INCORRECT_INTERVAL_DAYS: u64 = 1;

/// Outcome of a single review as entered by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rating {
    Right,
    Wrong,
}

impl Rating {
    pub fn is_correct(self) -> bool {
        matches!(self, Rating::Right)
    }
}

impl FromStr for Rating {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" | "correct" | "y" | "yes" => Ok(Rating::Right),
            "wrong" | "incorrect" | "n" | "no" => Ok(Rating::Wrong),
            _ => Err(Error::InvalidRating(s.to_string())),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Right => write!(f, "right"),
            Rating::Wrong => write!(f, "wrong"),
        }
    }
}

/// Calculates the next eligible review date for an item rated on `today`.
///
/// Fails with [`Error::DateOutOfRange`] when the date would pass the end of
/// chrono's calendar, so a rated item always moves strictly forward.
pub fn next_review_date(correct: bool, today: NaiveDate) -> Result<NaiveDate> {
    let interval = if correct {
        CORRECT_INTERVAL_DAYS
    } else {
        INCORRECT_INTERVAL_DAYS
    };

    today
        .checked_add_days(Days::new(interval))
        .ok_or(Error::DateOutOfRange(today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_correct_moves_one_week() {
        assert_eq!(
            next_review_date(true, date(2024, 1, 2)).unwrap(),
            date(2024, 1, 9)
        );
    }

    #[test]
    fn test_incorrect_moves_one_day() {
        assert_eq!(
            next_review_date(false, date(2024, 1, 1)).unwrap(),
            date(2024, 1, 2)
        );
    }

    #[test]
    fn test_crosses_month_and_year() {
        assert_eq!(
            next_review_date(true, date(2023, 12, 28)).unwrap(),
            date(2024, 1, 4)
        );
        assert_eq!(
            next_review_date(false, date(2024, 2, 29)).unwrap(),
            date(2024, 3, 1)
        );
        assert_eq!(
            next_review_date(true, date(9999, 12, 30)).unwrap(),
            date(10000, 1, 6)
        );
    }

    #[test]
    fn test_max_date_is_out_of_range() {
        assert!(matches!(
            next_review_date(true, NaiveDate::MAX),
            Err(Error::DateOutOfRange(d)) if d == NaiveDate::MAX
        ));
        assert!(matches!(
            next_review_date(false, NaiveDate::MAX),
            Err(Error::DateOutOfRange(_))
        ));
    }

    #[test]
    fn test_rating_parse() {
        assert_eq!("right".parse::<Rating>().unwrap(), Rating::Right);
        assert_eq!("Wrong".parse::<Rating>().unwrap(), Rating::Wrong);
        assert_eq!("y".parse::<Rating>().unwrap(), Rating::Right);
        assert!(matches!(
            "maybe".parse::<Rating>(),
            Err(Error::InvalidRating(_))
        ));
    }
}
