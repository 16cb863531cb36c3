//! Item is a question/answer pair stored in the review database.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

/// An item together with its next review date, `None` when never rated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemOverview {
    pub item: Item,
    pub next_review: Option<NaiveDate>,
}
