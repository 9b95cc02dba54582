use crate::numeric::*;
use crate::Money;
use crate::PotIndex;
use serde::Serialize;

/// A main or side pot and the players who can win it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pot {
    pub name: String,
    pub size: Money,
    pub players: Vec<String>,
}

impl Pot {
    /// Ordinal label: `Main Pot`, then `Side Pot 1`, `Side Pot 2`, ...
    pub fn label(index: PotIndex) -> String {
        match index {
            0 => String::from("Main Pot"),
            n => format!("Side Pot {}", n),
        }
    }
    pub fn is_eligible(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }
    /// The lone contender, who wins this pot on every board.
    pub fn uncontested(&self) -> Option<&str> {
        match self.players.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Pot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<12} {:>10}  {}",
            self.name,
            fmt(self.size),
            self.players.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert!(Pot::label(0) == "Main Pot");
        assert!(Pot::label(1) == "Side Pot 1");
        assert!(Pot::label(7) == "Side Pot 7");
    }
    #[test]
    fn uncontested() {
        let pot = Pot {
            name: Pot::label(1),
            size: 10.,
            players: vec![String::from("B")],
        };
        assert!(pot.uncontested() == Some("B"));
        assert!(pot.is_eligible("B"));
        assert!(!pot.is_eligible("A"));
    }
}
