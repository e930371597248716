//! Top-level command vocabulary.

/// A command typed at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddStudents,
    List,
    AddPoints,
    Find,
    Statistics,
    Notify,
    Back,
    Exit,
}

impl Command {
    /// Parse a trimmed input line, ignoring case.
    pub fn parse(input: &str) -> Option<Command> {
        match input.to_lowercase().as_str() {
            "add students" => Some(Command::AddStudents),
            "list" => Some(Command::List),
            "add points" => Some(Command::AddPoints),
            "find" => Some(Command::Find),
            "statistics" => Some(Command::Statistics),
            "notify" => Some(Command::Notify),
            "back" => Some(Command::Back),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Whether a sub-prompt line asks to return to the main prompt.
pub fn is_back(input: &str) -> bool {
    input.eq_ignore_ascii_case("back")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(Command::parse("Add Students"), Some(Command::AddStudents));
        assert_eq!(Command::parse("ADD POINTS"), Some(Command::AddPoints));
        assert_eq!(Command::parse("statistics"), Some(Command::Statistics));
        assert_eq!(Command::parse("eXit"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse("add  students"), None);
        assert_eq!(Command::parse("remove"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_is_back() {
        assert!(is_back("back"));
        assert!(is_back("BACK"));
        assert!(!is_back("back "));
        assert!(!is_back("go back"));
    }
}
