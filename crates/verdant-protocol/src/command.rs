// Recognized inbound text commands — must match dashboard client literals.
pub const WATER_ON: &str = "WATER_ON";
pub const WATER_OFF: &str = "WATER_OFF";

/// A recognized watering command from a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    On,
    Off,
}

impl Command {
    /// Parse one inbound text frame. Surrounding whitespace is trimmed;
    /// the comparison is a case-sensitive exact match. Anything else is
    /// `None` — unknown traffic is never an error.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            WATER_ON => Some(Command::On),
            WATER_OFF => Some(Command::Off),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_literals_parse() {
        assert_eq!(Command::parse("WATER_ON"), Some(Command::On));
        assert_eq!(Command::parse("WATER_OFF"), Some(Command::Off));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(Command::parse("  WATER_ON\n"), Some(Command::On));
        assert_eq!(Command::parse("\tWATER_OFF "), Some(Command::Off));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(Command::parse("water_on"), None);
        assert_eq!(Command::parse("Water_Off"), None);
    }

    #[test]
    fn unknown_text_is_ignored() {
        assert_eq!(Command::parse("PING"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("WATER_ON extra"), None);
    }
}
