//! Plain-text question/answer ingestion.
//!
//! Blocks are separated by a blank line. A block is accepted when its first
//! line starts with `Q:` and its second with `A:`; anything after the second
//! line is ignored:
//!
//! ```text
//! Q: What does JIT stand for?
//! A: Just-in-time compilation
//!
//! Q: Is String immutable?
//! A: Yes
//! ```

use crate::database::ReviewStore;
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedPair {
    pub question: String,
    pub answer: String,
}

/// Result of parsing a whole file: accepted pairs and the raw text of rejected blocks
#[derive(Debug, Default)]
pub struct ParsedBlocks {
    pub pairs: Vec<ParsedPair>,
    pub skipped: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

fn parse_block(block: &str) -> Option<ParsedPair> {
    let mut lines = block.lines();
    let question = lines.next()?.trim_start().strip_prefix("Q:")?.trim();
    let answer = lines.next()?.trim_start().strip_prefix("A:")?.trim();

    if question.is_empty() || answer.is_empty() {
        return None;
    }

    Some(ParsedPair {
        question: question.to_string(),
        answer: answer.to_string(),
    })
}

/// Splits file content into Q/A pairs. Malformed blocks are logged and collected, never fatal.
pub fn parse_qa_blocks(content: &str) -> ParsedBlocks {
    let normalized = content.replace("\r\n", "\n");
    let mut parsed = ParsedBlocks::default();

    for block in normalized.trim().split("\n\n") {
        let block = block.trim_matches('\n');
        if block.trim().is_empty() {
            continue;
        }

        match parse_block(block) {
            Some(pair) => parsed.pairs.push(pair),
            None => {
                warn!(block, "skipping invalid Q/A block");
                parsed.skipped.push(block.to_string());
            }
        }
    }

    parsed
}

/// Stores every valid pair of `content` as a new item
pub fn import_text(content: &str, store: &ReviewStore) -> Result<ImportReport> {
    let parsed = parse_qa_blocks(content);

    for pair in &parsed.pairs {
        store.insert_item(&pair.question, &pair.answer)?;
    }

    Ok(ImportReport {
        imported: parsed.pairs.len(),
        skipped: parsed.skipped.len(),
    })
}

/// Reads a Q/A text file and stores its valid pairs
pub fn import_text_file(path: impl AsRef<Path>, store: &ReviewStore) -> Result<ImportReport> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let report = import_text(&content, store)?;

    info!(
        path = %path.display(),
        imported = report.imported,
        skipped = report.skipped,
        "imported questions from text file"
    );
    Ok(report)
}
