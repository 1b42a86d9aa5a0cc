//! Command-line parsing for the interactive shell.

/// A command typed at the `Enter a command:` prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    ShowAll,
    Search,
    Birthday,
    Remove,
    Save,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse one input line. Matching ignores case and surrounding whitespace.
    ///
    /// `add`, `change` and `phone` match any line that starts with them, so
    /// `add contact` is still `Add`. Everything else must match exactly.
    pub fn parse(line: &str) -> Self {
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "hello" => Self::Hello,
            c if c.starts_with("add") => Self::Add,
            c if c.starts_with("change") => Self::Change,
            c if c.starts_with("phone") => Self::Phone,
            "show all" => Self::ShowAll,
            "search" => Self::Search,
            "birthday" => Self::Birthday,
            "remove" => Self::Remove,
            "save" => Self::Save,
            "good bye" | "close" | "exit" => Self::Exit,
            _ => Self::Unknown(command),
        }
    }
}
