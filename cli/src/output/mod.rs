//! Terminal rendering of search results

use anyhow::Result;
use colored::Colorize;
use scout_core::SearchItem;

/// Split `text` into runs of matched and unmatched characters.
///
/// `positions` are character indices; out-of-range positions are ignored.
pub fn segments(text: &str, positions: &[usize]) -> Vec<(String, bool)> {
    let mut runs: Vec<(String, bool)> = Vec::new();

    for (index, ch) in text.chars().enumerate() {
        let matched = positions.contains(&index);
        match runs.last_mut() {
            Some((run, run_matched)) if *run_matched == matched => run.push(ch),
            _ => runs.push((ch.to_string(), matched)),
        }
    }

    runs
}

/// Render `text` with matched characters emphasized
pub fn highlight(text: &str, positions: &[usize]) -> String {
    segments(text, positions)
        .into_iter()
        .map(|(run, matched)| {
            if matched {
                run.yellow().bold().to_string()
            } else {
                run
            }
        })
        .collect()
}

/// One numbered result line
pub fn format_item(index: usize, item: &SearchItem) -> String {
    let mut line = format!(
        "{:>3}. {} {}",
        index,
        highlight(&item.display_name, &item.matched_positions),
        format!("[{}]", item.kind).cyan()
    );
    if let Some(description) = &item.description {
        line.push_str(&format!("  {}", description.dimmed()));
    }
    line
}

/// Print numbered result lines
pub fn print_items(items: &[SearchItem]) {
    for (index, item) in items.iter().enumerate() {
        println!("{}", format_item(index, item));
    }
}

/// Print items as a JSON array
pub fn print_json(items: &[SearchItem]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(items)?);
    Ok(())
}
