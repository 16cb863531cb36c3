//! Runtime configuration resolved from command-line flags and environment

use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Database file used when neither `--db` nor `REVIEW_DB` is given
pub const DEFAULT_DATABASE_FILE: &str = "review_data.db";

#[derive(Clone, Debug)]
pub struct Config {
    pub db_path: PathBuf,
    /// Fixed review date; the local calendar date is used when unset
    pub today: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            today: None,
        }
    }
}

impl Config {
    pub fn new(db_path: Option<PathBuf>, today: Option<NaiveDate>) -> Self {
        let defaults = Self::default();
        Self {
            db_path: db_path.unwrap_or(defaults.db_path),
            today: today.or(defaults.today),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
