//! Database operations for the review application
//!
//! Handles SQLite schema creation, item CRUD and the schedule table that
//! records each item's next eligible review date.

use crate::error::{Error, Result};
use crate::models::scheduler::next_review_date;
use crate::models::{Item, ItemOverview, ItemRecord, ScheduleEntry};
use chrono::{Datelike, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::fmt::Debug;
use std::path::Path;
use tracing::{debug, info};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS questions (
        id INTEGER PRIMARY KEY,
        question TEXT NOT NULL,
        answer TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS reviews (
        question_id INTEGER PRIMARY KEY,
        next_review INTEGER NOT NULL,
        FOREIGN KEY (question_id) REFERENCES questions(id)
    );
";

fn log_sql(sql: &str, params: impl Debug) {
    debug!(sql = sql.trim(), ?params, "executing SQL");
}

/// Review dates are stored as day numbers (days since 0001-01-01 counted as day 1)
/// so comparisons stay numeric for every date chrono can represent.
fn to_day_number(date: NaiveDate) -> i32 {
    date.num_days_from_ce()
}

fn from_day_number(idx: usize, days: i32) -> rusqlite::Result<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, days as i64))
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
    })
}

/// Handle to the review database. Owns its connection, which is closed when
/// the store is dropped.
pub struct ReviewStore {
    conn: Connection,
}

impl ReviewStore {
    /// Opens (or creates) the database file and makes sure both tables exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened review database");
        Self::with_connection(conn)
    }

    /// Creates a store backed by a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        // Foreign keys are off by default in SQLite and must be enabled per connection
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Stores a new question/answer pair and returns its id
    pub fn insert_item(&self, question: &str, answer: &str) -> Result<i64> {
        let sql = "INSERT INTO questions (question, answer) VALUES (?1, ?2)";
        log_sql(sql, (question, answer));
        self.conn.execute(sql, params![question, answer])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_item(&self, id: i64) -> Result<Option<Item>> {
        let sql = "SELECT id, question, answer FROM questions WHERE id = ?1";
        log_sql(sql, id);
        let item = self
            .conn
            .query_row(sql, params![id], item_from_row)
            .optional()?;
        Ok(item)
    }

    fn require_item(&self, id: i64) -> Result<Item> {
        self.get_item(id)?.ok_or(Error::NotFound(id))
    }

    /// Retrieves all items in storage order
    pub fn list_items(&self) -> Result<Vec<Item>> {
        let sql = "SELECT id, question, answer FROM questions ORDER BY id";
        log_sql(sql, ());
        let mut stmt = self.conn.prepare(sql)?;
        let items = stmt
            .query_map([], item_from_row)?
            .collect::<rusqlite::Result<Vec<Item>>>()?;
        Ok(items)
    }

    /// Retrieves every item with its next review date, if it has been rated
    pub fn list_overview(&self) -> Result<Vec<ItemOverview>> {
        let sql = "SELECT q.id, q.question, q.answer, r.next_review
             FROM questions q
             LEFT JOIN reviews r ON q.id = r.question_id
             ORDER BY q.id";
        log_sql(sql, ());
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ItemOverview {
                    item: item_from_row(row)?,
                    next_review: row
                        .get::<_, Option<i32>>(3)?
                        .map(|days| from_day_number(3, days))
                        .transpose()?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    pub fn count_items(&self) -> Result<usize> {
        let sql = "SELECT COUNT(*) FROM questions";
        log_sql(sql, ());
        let count: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn get_schedule(&self, item_id: i64) -> Result<Option<ScheduleEntry>> {
        let sql = "SELECT question_id, next_review FROM reviews WHERE question_id = ?1";
        log_sql(sql, item_id);
        let entry = self
            .conn
            .query_row(sql, params![item_id], |row| {
                Ok(ScheduleEntry {
                    item_id: row.get(0)?,
                    next_review: from_day_number(1, row.get(1)?)?,
                })
            })
            .optional()?;
        Ok(entry)
    }

    /// Creates or replaces the schedule entry of an existing item
    pub fn schedule_item(&self, item_id: i64, next_review: NaiveDate) -> Result<()> {
        self.require_item(item_id)?;

        let sql = "INSERT OR REPLACE INTO reviews (question_id, next_review) VALUES (?1, ?2)";
        log_sql(sql, (item_id, next_review));
        self.conn
            .execute(sql, params![item_id, to_day_number(next_review)])?;
        Ok(())
    }

    /// Records a review outcome made on `today` and returns the new review date
    ///
    /// Fails with [`Error::NotFound`] when the item does not exist.
    pub fn record_result(
        &self,
        item_id: i64,
        correct: bool,
        today: NaiveDate,
    ) -> Result<NaiveDate> {
        let next = next_review_date(correct, today)?;
        self.schedule_item(item_id, next)?;
        info!(item_id, correct, %next, "recorded review result");
        Ok(next)
    }

    /// Returns the first item, by id, that was never rated or whose review date has arrived
    pub fn select_due(&self, today: NaiveDate) -> Result<Option<Item>> {
        let sql = "SELECT q.id, q.question, q.answer
             FROM questions q
             LEFT JOIN reviews r ON q.id = r.question_id
             WHERE r.next_review IS NULL OR r.next_review <= ?1
             ORDER BY q.id
             LIMIT 1";
        log_sql(sql, today);
        let item = self
            .conn
            .query_row(sql, params![to_day_number(today)], item_from_row)
            .optional()?;
        Ok(item)
    }

    /// Retrieves every item due on `today`, in storage order
    pub fn due_items(&self, today: NaiveDate) -> Result<Vec<Item>> {
        let sql = "SELECT q.id, q.question, q.answer
             FROM questions q
             LEFT JOIN reviews r ON q.id = r.question_id
             WHERE r.next_review IS NULL OR r.next_review <= ?1
             ORDER BY q.id";
        log_sql(sql, today);
        let mut stmt = self.conn.prepare(sql)?;
        let items = stmt
            .query_map(params![to_day_number(today)], item_from_row)?
            .collect::<rusqlite::Result<Vec<Item>>>()?;
        Ok(items)
    }

    /// Inserts a batch of records as new items in a single transaction
    ///
    /// A record with an empty question or answer aborts the whole batch with
    /// [`Error::InvalidRecord`] and nothing is stored.
    pub fn insert_records(&mut self, records: &[ItemRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;

        for (index, record) in records.iter().enumerate() {
            if record.question.trim().is_empty() || record.answer.trim().is_empty() {
                return Err(Error::InvalidRecord(index));
            }

            let sql = "INSERT INTO questions (question, answer) VALUES (?1, ?2)";
            log_sql(sql, (&record.question, &record.answer));
            tx.execute(sql, params![record.question, record.answer])?;
            let id = tx.last_insert_rowid();

            if let Some(date) = record.next_review {
                let sql = "INSERT INTO reviews (question_id, next_review) VALUES (?1, ?2)";
                log_sql(sql, (id, date));
                tx.execute(sql, params![id, to_day_number(date)])?;
            }
        }

        tx.commit()?;
        Ok(records.len())
    }

    /// Deletes an item together with its schedule entry
    ///
    /// The schedule row goes first so no entry ever points at a missing item.
    pub fn delete_item(&mut self, item_id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;

        let sql = "DELETE FROM reviews WHERE question_id = ?1";
        log_sql(sql, item_id);
        tx.execute(sql, params![item_id])?;

        let sql = "DELETE FROM questions WHERE id = ?1";
        log_sql(sql, item_id);
        let removed = tx.execute(sql, params![item_id])?;
        if removed == 0 {
            // Dropping the transaction rolls it back
            return Err(Error::NotFound(item_id));
        }

        tx.commit()?;
        info!(item_id, "deleted item");
        Ok(())
    }
}
