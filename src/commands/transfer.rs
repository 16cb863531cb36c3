//! File ingestion commands: Q/A text import and JSON import/export

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use review_app::ReviewStore;
use review_app::export::json::{export_json_to_path, import_json, store_item_set};
use review_app::import::text::{ImportReport, import_text_file};
use std::path::Path;

/// Execute the import command for a Q/A text file
pub fn import_text(store: &ReviewStore, path: &Path) -> Result<ImportReport> {
    let report = import_text_file(path, store)
        .with_context(|| format!("Failed to import questions from {}", path.display()))?;

    println!(
        "{} {} question(s) stored in the database",
        "Success:".green(),
        report.imported
    );
    if report.skipped > 0 {
        println!(
            "{} {} invalid block(s) skipped",
            "Warning:".yellow(),
            report.skipped
        );
    }
    Ok(report)
}

/// Execute the import-json command
pub fn import_items_json(store: &mut ReviewStore, path: &Path) -> Result<usize> {
    let set = import_json(path).with_context(|| {
        format!(
            "Import failed for {}. Expected a file shaped like {{\"items\": [{{\"question\": ..., \"answer\": ...}}]}}",
            path.display()
        )
    })?;
    let count = store_item_set(store, &set).context("Failed to store imported questions")?;

    println!("{} {} question(s) imported", "Success:".green(), count);
    Ok(count)
}

/// Execute the export-json command
pub fn export_items_json(store: &ReviewStore, path: &Path) -> Result<usize> {
    let count = export_json_to_path(store, path)
        .with_context(|| format!("Export to {} failed", path.display()))?;

    println!(
        "{} {} question(s) exported to {}",
        "Success:".green(),
        count,
        path.display()
    );
    Ok(count)
}
