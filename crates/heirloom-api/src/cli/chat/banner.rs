//! Welcome banner display for chat sessions.

use std::io::Write;

use console::style;

use crate::cli::transcripts::short_id;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the webhook endpoint and the short session id, plus a hint about
/// slash commands.
pub fn print_welcome_banner(out: &mut impl Write, endpoint: &str, session_id: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style("Heirloom").cyan().bold())?;
    writeln!(out, "  {}", style("Family history assistant").dim())?;
    writeln!(out)?;
    writeln!(out, "  {}  {}", style("Webhook:").bold(), style(endpoint).dim())?;
    writeln!(out, "  {}  {}", style("Session:").bold(), style(short_id(session_id)).dim())?;
    writeln!(out)?;
    writeln!(out, "  {}", style("Type /help for commands, Ctrl+D to exit").dim())?;
    writeln!(out, "  {}", style("---").dim())?;
    writeln!(out)
}
