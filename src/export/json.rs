//! JSON import/export module for the review collection.
//! Saves all items with their next review dates to a JSON file and loads them back.

use crate::database::ReviewStore;
use crate::error::Result;
use crate::models::{ItemRecord, ItemSet};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Builds a portable snapshot of every item in the store.
pub fn collect_item_set(store: &ReviewStore) -> Result<ItemSet> {
    let items = store
        .list_overview()?
        .into_iter()
        .map(|row| ItemRecord {
            question: row.item.question,
            answer: row.item.answer,
            next_review: row.next_review,
        })
        .collect();
    Ok(ItemSet { items })
}

/// Exports all items to a JSON file at the specified path.
/// Returns the number of exported items.
pub fn export_json_to_path(store: &ReviewStore, path: impl AsRef<Path>) -> Result<usize> {
    let set = collect_item_set(store)?;
    let json_string = serde_json::to_string_pretty(&set)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json_string.as_bytes())?;

    info!(path = %path.as_ref().display(), count = set.items.len(), "exported items");
    Ok(set.items.len())
}

/// Imports an item set from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_json(path: impl AsRef<Path>) -> Result<ItemSet> {
    let mut file = File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let set: ItemSet = serde_json::from_str(&contents)?;
    Ok(set)
}

/// Inserts every record as a new item, restoring its review date when present.
/// Either the whole set is stored or none of it.
pub fn store_item_set(store: &mut ReviewStore, set: &ItemSet) -> Result<usize> {
    let count = store.insert_records(&set.items)?;
    info!(count, "stored imported items");
    Ok(count)
}
