use crate::Arbitrary;
use crate::numeric::*;
use crate::Money;
use serde::Deserialize;
use serde::Serialize;

/// One player's line in the side-pot table, as typed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidePotEntry {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bet: String,
}

impl SidePotEntry {
    pub fn new(id: impl Into<String>, name: &str, bet: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            bet: bet.to_string(),
        }
    }
    pub fn named(&self) -> Option<&str> {
        Some(self.name.trim()).filter(|name| !name.is_empty())
    }
    /// The partitioner's view of this row, if it has a name.
    pub fn stake(&self) -> Option<Stake> {
        self.named().map(|name| Stake::new(name, parse(&self.bet)))
    }
}

/// Compact share cells: `[name, bet]`.
impl From<(String, String)> for SidePotEntry {
    fn from((name, bet): (String, String)) -> Self {
        Self {
            id: String::new(),
            name,
            bet,
        }
    }
}

impl From<&SidePotEntry> for (String, String) {
    fn from(entry: &SidePotEntry) -> Self {
        (entry.name.clone(), entry.bet.clone())
    }
}

/// A named player's parsed total bet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stake {
    pub name: String,
    pub bet: Money,
}

impl Stake {
    pub fn new(name: &str, bet: Money) -> Self {
        Self {
            name: name.to_string(),
            bet,
        }
    }
}

impl From<(&str, Money)> for Stake {
    fn from((name, bet): (&str, Money)) -> Self {
        Self::new(name, bet)
    }
}

impl Arbitrary for Stake {
    fn random() -> Self {
        let name = format!("P{}", rand::random_range(0..10_000));
        let bet = match rand::random_range(0..8) {
            0 => 0.,
            _ => rand::random_range(1..=40) as Money * 5.,
        };
        Self::new(&name, bet)
    }
}
