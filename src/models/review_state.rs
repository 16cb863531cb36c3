//! Per-item review state derived from the schedule entry and today's date.
use chrono::NaiveDate;
use std::fmt;

/// Unscheduled -> (rated) -> Scheduled -> (date reached) -> Due -> (rated) -> Scheduled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewState {
    Unscheduled,
    Scheduled(NaiveDate),
    Due(NaiveDate),
}

impl ReviewState {
    pub fn of(next_review: Option<NaiveDate>, today: NaiveDate) -> Self {
        match next_review {
            None => ReviewState::Unscheduled,
            Some(date) if date <= today => ReviewState::Due(date),
            Some(date) => ReviewState::Scheduled(date),
        }
    }

    /// Never-rated items are due immediately.
    pub fn is_due(&self) -> bool {
        !matches!(self, ReviewState::Scheduled(_))
    }
}

impl fmt::Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewState::Unscheduled => write!(f, "new"),
            ReviewState::Scheduled(date) => write!(f, "scheduled {}", date),
            ReviewState::Due(date) => write!(f, "due since {}", date),
        }
    }
}
