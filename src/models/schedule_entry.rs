use chrono::NaiveDate;

/// Next eligible review date of one item. At most one entry exists per item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub item_id: i64,
    pub next_review: NaiveDate,
}
