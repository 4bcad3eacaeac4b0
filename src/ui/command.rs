//! Command parsing for the TUI command deck
//!
//! Parses a submitted deck line:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `@path/to/file.txt` → Load file command
//! - `@@` → Load clipboard
//! - anything else → the line itself is the text to read

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    Read(String),
    Unknown(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Command::Unknown(trimmed.to_string());
    }

    if let Some(cmd) = trimmed.strip_prefix(':') {
        match cmd.trim() {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            _ => Command::Unknown(trimmed.to_string()),
        }
    } else if let Some(rest) = trimmed.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Read(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Read(text) => AppEvent::ReadText(text),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_command("@notes.txt"),
            Command::LoadFile("notes.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_command("@  notes.txt"),
            Command::LoadFile("notes.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
        assert_eq!(parse_command("@"), Command::LoadClipboard);
    }

    #[test]
    fn test_parse_plain_text_is_read() {
        assert_eq!(
            parse_command("the quick brown fox"),
            Command::Read("the quick brown fox".to_string())
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_command(""), Command::Unknown(_)));
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_unknown_colon_command() {
        assert_eq!(parse_command(":x"), Command::Unknown(":x".to_string()));
    }

    #[test]
    fn test_command_to_app_event() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
        assert_eq!(command_to_app_event(Command::Help), AppEvent::Help);
        assert_eq!(
            command_to_app_event(Command::LoadFile("a.txt".to_string())),
            AppEvent::LoadFile("a.txt".to_string())
        );
        assert_eq!(
            command_to_app_event(Command::LoadClipboard),
            AppEvent::LoadClipboard
        );
        assert_eq!(
            command_to_app_event(Command::Read("hi".to_string())),
            AppEvent::ReadText("hi".to_string())
        );
        assert!(matches!(
            command_to_app_event(Command::Unknown("?".to_string())),
            AppEvent::InvalidCommand(_)
        ));
    }
}
