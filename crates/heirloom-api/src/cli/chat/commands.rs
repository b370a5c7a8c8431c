//! Slash command parsing for the chat loop.

use std::io::Write;

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Start a new session with a fresh id.
    New,
    /// Reset the conversation but keep the session id.
    Clear,
    /// Save a transcript of the current session.
    Save,
    /// Show the conversation so far.
    History,
    /// Show the full session id.
    Session,
    /// List saved transcripts.
    Transcripts,
    /// Exit the chat.
    Exit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`, in which case it is
/// a question for the webhook.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    let parsed = match cmd.as_str() {
        "/help" | "/h" | "/?" => ChatCommand::Help,
        "/new" => ChatCommand::New,
        "/clear" => ChatCommand::Clear,
        "/save" => ChatCommand::Save,
        "/history" => ChatCommand::History,
        "/session" => ChatCommand::Session,
        "/transcripts" | "/ls" => ChatCommand::Transcripts,
        "/exit" | "/quit" | "/q" => ChatCommand::Exit,
        _ => ChatCommand::Unknown(cmd),
    };
    Some(parsed)
}

/// Print the help text listing all available commands.
pub fn print_help(out: &mut impl Write) -> std::io::Result<()> {
    let rows = [
        ("/help", "Show this help message"),
        ("/new", "Start a new session"),
        ("/clear", "Clear the chat, keep the session"),
        ("/save", "Save a transcript"),
        ("/history", "Show the conversation so far"),
        ("/session", "Show the session id"),
        ("/transcripts", "List saved transcripts"),
        ("/exit", "End the chat"),
    ];

    writeln!(out)?;
    writeln!(out, "  {}", style("Available commands:").bold())?;
    writeln!(out)?;
    for (name, help) in rows {
        writeln!(out, "  {}  {}", style(format!("{name:<12}")).cyan(), help)?;
    }
    writeln!(out)?;
    writeln!(out, "  {}", style("Ctrl+D to exit").dim())?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/Q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse("/new"), Some(ChatCommand::New));
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse("/save"), Some(ChatCommand::Save));
        assert_eq!(parse("  /session  "), Some(ChatCommand::Session));
        assert_eq!(parse("/ls"), Some(ChatCommand::Transcripts));
    }

    #[test]
    fn test_trailing_arguments_are_ignored() {
        assert_eq!(parse("/save now please"), Some(ChatCommand::Save));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("Who was my great-grandfather?"), None);
        assert_eq!(parse("and/or"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut buf = Vec::new();
        print_help(&mut buf).unwrap();
        let text = console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned();
        for name in ["/help", "/new", "/clear", "/save", "/history", "/session", "/transcripts", "/exit"] {
            assert!(text.contains(name), "missing {name}");
        }
    }
}
