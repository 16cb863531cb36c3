//! Portable collection of items used for JSON import/export
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub next_review: Option<NaiveDate>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ItemSet {
    pub items: Vec<ItemRecord>,
}
