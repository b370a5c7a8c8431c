//! Transcript listing command.

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use heirloom_core::transcript::store::TranscriptStore;

use crate::state::AppState;

/// List saved transcripts, newest first.
///
/// # Examples
///
/// ```bash
/// heirloom transcripts
/// heirloom transcripts --json
/// ```
pub async fn list_transcripts(state: &AppState, json: bool) -> Result<()> {
    let store = state.transcript_store();
    let summaries = store
        .list()
        .await
        .context("Failed to list transcripts")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!();
        println!(
            "  {} No transcripts in {}. Save one with {} during a chat.",
            style("i").blue().bold(),
            style(store.dir().display()).cyan(),
            style("/save").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Saved").fg(Color::White),
        Cell::new("Session").fg(Color::White),
        Cell::new("Messages").fg(Color::White),
        Cell::new("File").fg(Color::White),
    ]);

    for summary in &summaries {
        let saved = summary
            .saved_at_utc()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| summary.saved_at.to_string());
        let session = summary.session_id.to_string();
        let file = summary
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        table.add_row(vec![
            Cell::new(saved).fg(Color::White),
            Cell::new(short_id(&session)).fg(Color::Cyan),
            Cell::new(summary.message_count.to_string()).fg(Color::White),
            Cell::new(file).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} transcript{}",
        style(summaries.len()).bold(),
        if summaries.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// First eight characters of a session id.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0192f3a4-7b8c-7def-8000-000000000000"), "0192f3a4");
        assert_eq!(short_id("abc"), "abc");
    }
}
