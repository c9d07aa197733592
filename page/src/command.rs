//! User commands typed at the page prompt.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle the card at this 1-based position.
    Select(usize),
    Deselect,
    Proceed,
    /// Start over from `Loading`; also bound to `refresh`.
    Retry,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let first = words.next()?.to_ascii_lowercase();
        let rest = words.next();
        if words.next().is_some() {
            return None;
        }
        match (first.as_str(), rest) {
            ("select" | "s", Some(n)) => n.parse().ok().filter(|n| *n > 0).map(Command::Select),
            (n, None) if n.chars().all(|c| c.is_ascii_digit()) => {
                n.parse().ok().filter(|n| *n > 0).map(Command::Select)
            }
            ("deselect" | "d", None) => Some(Command::Deselect),
            ("proceed" | "continue" | "p", None) => Some(Command::Proceed),
            ("retry" | "refresh" | "r", None) => Some(Command::Retry),
            ("quit" | "exit" | "q", None) => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_select_forms() {
        assert_eq!(Command::parse("select 2"), Some(Command::Select(2)));
        assert_eq!(Command::parse("  S 10 "), Some(Command::Select(10)));
        assert_eq!(Command::parse("3"), Some(Command::Select(3)));
    }

    #[test]
    fn rejects_zero_and_garbage_positions() {
        assert_eq!(Command::parse("select 0"), None);
        assert_eq!(Command::parse("0"), None);
        assert_eq!(Command::parse("select two"), None);
        assert_eq!(Command::parse("select"), None);
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(Command::parse("deselect"), Some(Command::Deselect));
        assert_eq!(Command::parse("Continue"), Some(Command::Proceed));
        assert_eq!(Command::parse("refresh"), Some(Command::Retry));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
    }

    #[test]
    fn rejects_blank_and_trailing_words() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("proceed now"), None);
        assert_eq!(Command::parse("select 1 2"), None);
    }
}
