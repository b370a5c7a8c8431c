//! One-shot question command.

use anyhow::{Context, Result};
use console::style;

use crate::state::AppState;

use super::chat::renderer::ChatRenderer;

/// Ask one question in a fresh session and print the reply.
///
/// # Examples
///
/// ```bash
/// heirloom ask "Where was Grandma born?"
/// heirloom ask "Where was Grandma born?" --save --json
/// ```
pub async fn ask(state: &AppState, question: &str, save: bool, json: bool) -> Result<()> {
    let mut controller = state.controller()?;

    let Some(reply) = controller.submit(question).await else {
        anyhow::bail!("Question is empty");
    };

    let saved_path = if save {
        Some(
            controller
                .save()
                .await
                .context("Failed to save transcript")?,
        )
    } else {
        None
    };

    if json {
        let output = serde_json::json!({
            "session_id": controller.session_id().to_string(),
            "reply": reply,
            "transcript": saved_path.as_ref().map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let renderer = ChatRenderer::new();
    println!("{}", renderer.render_final(&reply).trim_end());

    if let Some(path) = saved_path {
        println!();
        println!(
            "  {} Saved as {}",
            style("✓").green().bold(),
            style(path.display()).cyan()
        );
    }

    Ok(())
}
