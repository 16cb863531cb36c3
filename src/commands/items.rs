//! Item management commands: add, list, delete

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use owo_colors::OwoColorize;
use review_app::{Error, ItemOverview, ReviewState, ReviewStore};
use std::io::{self, Write};

/// Execute the add command
pub fn add(store: &ReviewStore, question: &str, answer: &str) -> Result<i64> {
    let question = question.trim();
    let answer = answer.trim();
    if question.is_empty() || answer.is_empty() {
        anyhow::bail!("Both a question and an answer are required");
    }

    let id = store
        .insert_item(question, answer)
        .context("Failed to store question")?;
    println!("{} question #{}", "Added".green(), id);
    Ok(id)
}

/// Renders the item list with each item's next review date
pub fn format_overview(rows: &[ItemOverview], today: NaiveDate) -> String {
    if rows.is_empty() {
        return "No questions stored yet. Use `review add` or `review import`.".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Question", "Next Review Date", "State"]);

    for row in rows {
        let next = row
            .next_review
            .map(|d| d.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let state = ReviewState::of(row.next_review, today);
        table.add_row(vec![
            Cell::new(row.item.id),
            Cell::new(&row.item.question),
            Cell::new(next),
            Cell::new(state),
        ]);
    }

    let due = rows
        .iter()
        .filter(|row| ReviewState::of(row.next_review, today).is_due())
        .count();

    format!("{}\n{} of {} question(s) due on {}", table, due, rows.len(), today)
}

/// Execute the list command
pub fn list(store: &ReviewStore, today: NaiveDate) -> Result<String> {
    let rows = store.list_overview().context("Failed to load questions")?;
    Ok(format_overview(&rows, today))
}

/// Deletes the given items, skipping ids that do not exist. Returns how many were removed.
pub fn delete_items(store: &mut ReviewStore, ids: &[i64]) -> Result<usize> {
    let mut deleted = 0;

    for &id in ids {
        match store.delete_item(id) {
            Ok(()) => {
                println!("{} question #{}", "Deleted".green(), id);
                deleted += 1;
            }
            Err(Error::NotFound(_)) => {
                eprintln!("{} question #{} does not exist", "Skipped:".yellow(), id);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to delete question #{}", id));
            }
        }
    }

    Ok(deleted)
}

/// Execute the delete command
pub fn delete(store: &mut ReviewStore, ids: &[i64], yes: bool) -> Result<()> {
    if !yes {
        print!(
            "Are you sure you want to delete {} question(s)? (y/N) ",
            ids.len()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let deleted = delete_items(store, ids)?;
    println!("Deleted {} question(s)", deleted);
    Ok(())
}
