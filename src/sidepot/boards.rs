use crate::BoardIndex;
use crate::MAX_BOARDS;

/// How many times the remaining board is run out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Boards {
    #[default]
    Once = 1,
    Twice = 2,
}

impl Boards {
    pub fn count(&self) -> usize {
        *self as usize
    }
    pub fn range(&self) -> impl Iterator<Item = BoardIndex> {
        0..self.count()
    }
}

/// Out-of-range counts clamp into `1..=2`.
impl From<usize> for Boards {
    fn from(n: usize) -> Self {
        match n.clamp(1, MAX_BOARDS) {
            1 => Self::Once,
            _ => Self::Twice,
        }
    }
}

/// Leading integer of the text; blank, zero, or unparseable text is one board.
impl From<&str> for Boards {
    fn from(s: &str) -> Self {
        let s = s.trim();
        let digits = s
            .strip_prefix(['+', '-'])
            .unwrap_or(s)
            .chars()
            .take_while(char::is_ascii_digit)
            .collect::<String>();
        match digits.parse::<usize>() {
            Ok(n) if s.starts_with('-') && n > 0 => Self::Once,
            Ok(n) => Self::from(n),
            Err(_) => Self::Once,
        }
    }
}

impl std::fmt::Display for Boards {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_counts() {
        assert!(Boards::from(0) == Boards::Once);
        assert!(Boards::from(2) == Boards::Twice);
        assert!(Boards::from(9) == Boards::Twice);
    }
    #[test]
    fn parses_text() {
        assert!(Boards::from("2") == Boards::Twice);
        assert!(Boards::from(" 2.9 ") == Boards::Twice);
        assert!(Boards::from("") == Boards::Once);
        assert!(Boards::from("abc") == Boards::Once);
        assert!(Boards::from("-3") == Boards::Once);
        assert!(Boards::from("0") == Boards::Once);
        assert!(Boards::from("5") == Boards::Twice);
    }
    #[test]
    fn board_indices() {
        assert!(Boards::Twice.range().collect::<Vec<_>>() == vec![0, 1]);
        assert!(Boards::Once.to_string() == "1");
    }
}
