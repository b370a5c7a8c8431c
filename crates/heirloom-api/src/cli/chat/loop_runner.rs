//! Main chat loop orchestration.
//!
//! Creates the controller, prints the banner and greeting, then reads
//! questions until EOF or `/exit`. Each question is one awaited webhook
//! round trip; the line editor is not polled while a reply is pending, so
//! turns never overlap.

use std::io::Write;
use std::time::Duration;

use console::style;
use heirloom_types::chat::{Message, MessageRole};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::cli::transcripts::short_id;
use crate::state::{AppState, ConcreteChatController};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Longest history line before it is cut with an ellipsis.
const HISTORY_PREVIEW_CHARS: usize = 100;

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn print_assistant(out: &mut impl Write, renderer: &ChatRenderer, text: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style("Heirloom").cyan().bold())?;
    for line in renderer.render_final(text).trim_end().lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)
}

/// Print the most recent message, which after a reset is the greeting.
fn print_latest(
    out: &mut impl Write,
    renderer: &ChatRenderer,
    controller: &ConcreteChatController,
) -> std::io::Result<()> {
    match controller.history().last() {
        Some(message) => print_assistant(out, renderer, &message.content),
        None => Ok(()),
    }
}

/// Shorten a message to a single preview line.
fn preview(content: &str) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > HISTORY_PREVIEW_CHARS {
        let cut: String = flat.chars().take(HISTORY_PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        flat
    }
}

fn print_history(out: &mut impl Write, messages: &[Message]) -> std::io::Result<()> {
    writeln!(out)?;
    for message in messages {
        let label = match message.role {
            MessageRole::User => style("You").green().bold(),
            MessageRole::Assistant => style("Heirloom").cyan().bold(),
        };
        writeln!(out, "  {label} {}", preview(&message.content))?;
    }
    writeln!(out)
}

async fn print_transcripts(
    out: &mut impl Write,
    controller: &ConcreteChatController,
) -> std::io::Result<()> {
    match controller.saved_transcripts().await {
        Ok(summaries) if summaries.is_empty() => {
            writeln!(out, "\n  {}\n", style("No saved transcripts yet.").dim())
        }
        Ok(summaries) => {
            writeln!(out)?;
            for summary in &summaries {
                let saved = summary
                    .saved_at_utc()
                    .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| summary.saved_at.to_string());
                writeln!(
                    out,
                    "  {}  {}  {} messages",
                    style(saved).dim(),
                    style(short_id(&summary.session_id.to_string())).cyan(),
                    summary.message_count
                )?;
            }
            writeln!(out)
        }
        Err(e) => writeln!(out, "\n  {} {e}\n", style("!").red().bold()),
    }
}

/// Run the interactive chat loop.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let mut controller = state.controller()?;
    let renderer = ChatRenderer::new();

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, mut out) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    print_welcome_banner(
        &mut out,
        controller.client().endpoint(),
        &controller.session_id().to_string(),
    )?;
    print_latest(&mut out, &renderer, &controller)?;

    info!(session_id = %controller.session_id(), "Chat started");

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => {
                writeln!(out, "\n  {}", style("Session ended.").dim())?;
                break;
            }
            InputEvent::Interrupted => {
                writeln!(out, "\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim())?;
                continue;
            }
            InputEvent::Message(text) => text,
        };

        if text.is_empty() {
            continue;
        }

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(&mut out)?,
                ChatCommand::New => {
                    controller.new_session();
                    chat_input.clear();
                    writeln!(
                        out,
                        "  {}  {}",
                        style("Session:").bold(),
                        style(short_id(&controller.session_id().to_string())).dim()
                    )?;
                    print_latest(&mut out, &renderer, &controller)?;
                }
                ChatCommand::Clear => {
                    controller.clear_chat();
                    chat_input.clear();
                    print_latest(&mut out, &renderer, &controller)?;
                }
                ChatCommand::Save => match controller.save().await {
                    Ok(path) => writeln!(
                        out,
                        "\n  {} Saved as {}\n",
                        style("✓").green().bold(),
                        style(path.display()).cyan()
                    )?,
                    Err(e) => {
                        warn!(error = %e, "Transcript save failed");
                        writeln!(out, "\n  {} Could not save transcript: {e}\n", style("!").red().bold())?;
                    }
                },
                ChatCommand::History => print_history(&mut out, controller.history())?,
                ChatCommand::Session => writeln!(
                    out,
                    "\n  {}  {}\n",
                    style("Session:").bold(),
                    controller.session_id()
                )?,
                ChatCommand::Transcripts => print_transcripts(&mut out, &controller).await?,
                ChatCommand::Exit => {
                    writeln!(out, "\n  {}", style("Session ended.").dim())?;
                    break;
                }
                ChatCommand::Unknown(name) => writeln!(
                    out,
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(name).dim()
                )?,
            }
            continue;
        }

        let spinner = thinking_spinner();
        let reply = controller.submit(&text).await;
        spinner.finish_and_clear();

        if let Some(reply) = reply {
            print_assistant(&mut out, &renderer, &reply)?;
        }
    }

    info!(
        session_id = %controller.session_id(),
        messages = controller.history().len(),
        "Chat ended"
    );
    chat_input.flush();
    Ok(())
}
