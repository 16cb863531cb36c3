//! Review commands: show the next due question, rate it, or run an interactive session

use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use review_app::{Rating, ReviewSession, ReviewStore};
use std::io::{BufRead, Write};

/// Execute the next command
pub fn next(store: &ReviewStore, today: NaiveDate, show_answer: bool) -> Result<String> {
    let due = store
        .select_due(today)
        .context("Failed to look up due questions")?;

    let output = match due {
        Some(item) if show_answer => {
            format!("#{} Q: {}\n    A: {}", item.id, item.question, item.answer)
        }
        Some(item) => format!("#{} Q: {}", item.id, item.question),
        None => "No more questions to review today!".to_string(),
    };
    Ok(output)
}

/// Execute the rate command
pub fn rate(store: &ReviewStore, id: i64, rating: Rating, today: NaiveDate) -> Result<NaiveDate> {
    let next = store
        .record_result(id, rating.is_correct(), today)
        .with_context(|| format!("Failed to rate question #{}", id))?;
    println!(
        "Question #{} marked {}, next review on {}",
        id,
        rating,
        next.to_string().cyan()
    );
    Ok(next)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Runs the question/answer/rate loop until nothing is due, the user quits, or input ends.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut ReviewSession<'_>,
    mut input: R,
    mut out: W,
) -> Result<()> {
    'items: while let Some(item) = session.current_item() {
        let (id, question) = (item.id, item.question.clone());

        writeln!(out, "\n#{} Q: {}", id, question)?;
        write!(out, "[Enter] show answer, [q] quit: ")?;
        out.flush()?;
        match read_line(&mut input)? {
            None => break,
            Some(cmd) if cmd.eq_ignore_ascii_case("q") => break,
            Some(_) => {}
        }

        session.reveal_answer();
        if let Some(answer) = session.answer() {
            writeln!(out, "    A: {}", answer)?;
        }

        loop {
            write!(out, "Did you get it right? [y/n/q]: ")?;
            out.flush()?;
            let Some(reply) = read_line(&mut input)? else {
                break 'items;
            };
            if reply.eq_ignore_ascii_case("q") {
                break 'items;
            }

            match reply.parse::<Rating>() {
                Ok(rating) => {
                    let next = session.rate(rating.is_correct())?;
                    writeln!(out, "Next review on {}", next)?;
                    break;
                }
                Err(_) => writeln!(out, "Please answer y or n.")?,
            }
        }
    }

    writeln!(out, "{}", session.status_message())?;
    Ok(())
}

/// Execute the review command on stdin/stdout
pub fn interactive(store: &ReviewStore, today: NaiveDate) -> Result<()> {
    let mut session =
        ReviewSession::new(store, today).context("Failed to start review session")?;
    let stdin = std::io::stdin();
    run_interactive(&mut session, stdin.lock(), std::io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn run(store: &ReviewStore, today: NaiveDate, input: &str) -> String {
        let mut session = ReviewSession::new(store, today).unwrap();
        let mut out = Vec::new();
        run_interactive(&mut session, Cursor::new(input.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_next_hides_answer_by_default() {
        let store = ReviewStore::open_in_memory().unwrap();
        store.insert_item("What is Box?", "Heap allocation").unwrap();

        let today = date(2024, 1, 1);
        let hidden = next(&store, today, false).unwrap();
        assert!(hidden.contains("What is Box?"));
        assert!(!hidden.contains("Heap allocation"));

        let shown = next(&store, today, true).unwrap();
        assert!(shown.contains("Heap allocation"));
    }

    #[test]
    fn test_next_with_nothing_due() {
        let store = ReviewStore::open_in_memory().unwrap();
        let output = next(&store, date(2024, 1, 1), false).unwrap();
        assert_eq!(output, "No more questions to review today!");
    }

    #[test]
    fn test_rate_missing_item_fails() {
        let store = ReviewStore::open_in_memory().unwrap();
        assert!(rate(&store, 3, Rating::Right, date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_interactive_rates_all_items() {
        let store = ReviewStore::open_in_memory().unwrap();
        let first = store.insert_item("q1", "a1").unwrap();
        let second = store.insert_item("q2", "a2").unwrap();

        let output = run(&store, date(2024, 1, 1), "\ny\n\nmaybe\nn\n");

        assert!(output.contains("A: a1"));
        assert!(output.contains("Please answer y or n."));
        assert!(output.contains("(2 reviewed, 1 right)"));
        assert_eq!(
            store.get_schedule(first).unwrap().unwrap().next_review,
            date(2024, 1, 8)
        );
        assert_eq!(
            store.get_schedule(second).unwrap().unwrap().next_review,
            date(2024, 1, 2)
        );
    }

    #[test]
    fn test_interactive_quit_leaves_item_unrated() {
        let store = ReviewStore::open_in_memory().unwrap();
        let id = store.insert_item("q1", "a1").unwrap();

        let output = run(&store, date(2024, 1, 1), "q\n");

        assert!(!output.contains("A: a1"));
        assert!(store.get_schedule(id).unwrap().is_none());
    }

    #[test]
    fn test_interactive_stops_at_end_of_input() {
        let store = ReviewStore::open_in_memory().unwrap();
        let id = store.insert_item("q1", "a1").unwrap();

        let output = run(&store, date(2024, 1, 1), "\n");

        assert!(output.contains("A: a1"));
        assert!(store.get_schedule(id).unwrap().is_none());
    }
}
