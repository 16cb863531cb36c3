//! Review session management.
//! Walks through every item due today, one at a time: show the question,
//! reveal the answer, rate it, move on to the next due item.

use super::Item;
use crate::database::ReviewStore;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use tracing::debug;

/// A review pass over the items due on a fixed date.
///
/// Rated items are pushed at least one day past `today`, so they never come
/// back within the same session and the session always ends.
pub struct ReviewSession<'a> {
    store: &'a ReviewStore,
    today: NaiveDate,
    current: Option<Item>,
    show_answer: bool,
    reviewed: usize,
    correct: usize,
}

impl<'a> ReviewSession<'a> {
    /// Starts a session and loads the first due item, if any.
    pub fn new(store: &'a ReviewStore, today: NaiveDate) -> Result<Self> {
        let current = store.select_due(today)?;
        Ok(Self {
            store,
            today,
            current,
            show_answer: false,
            reviewed: 0,
            correct: 0,
        })
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.current.as_ref()
    }

    pub fn reveal_answer(&mut self) {
        if self.current.is_some() {
            self.show_answer = true;
        }
    }

    /// The answer of the current item, once it has been revealed.
    pub fn answer(&self) -> Option<&str> {
        if self.show_answer {
            self.current.as_ref().map(|item| item.answer.as_str())
        } else {
            None
        }
    }

    /// Rates the current item, stores its next review date and loads the next due item.
    pub fn rate(&mut self, correct: bool) -> Result<NaiveDate> {
        let item = self.current.as_ref().ok_or(Error::NoCurrentItem)?;
        let next = self.store.record_result(item.id, correct, self.today)?;

        self.reviewed += 1;
        if correct {
            self.correct += 1;
        }

        self.current = self.store.select_due(self.today)?;
        self.show_answer = false;
        debug!(
            reviewed = self.reviewed,
            has_next = self.current.is_some(),
            "advanced review session"
        );
        Ok(next)
    }

    pub fn is_completed(&self) -> bool {
        self.current.is_none()
    }

    pub fn reviewed_count(&self) -> usize {
        self.reviewed
    }

    pub fn correct_count(&self) -> usize {
        self.correct
    }

    pub fn status_message(&self) -> String {
        let reviewed = self.reviewed_count();
        let correct = self.correct_count();
        if self.is_completed() {
            if reviewed == 0 {
                "No more questions to review today!".to_string()
            } else {
                format!(
                    "No more questions to review today! ({} reviewed, {} right)",
                    reviewed, correct
                )
            }
        } else {
            format!("Reviewed so far: {} ({} right)", reviewed, correct)
        }
    }
}
