use serde::Deserialize;
use serde::Serialize;

/// Which settlement view the payout table offers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementMode {
    /// Everyone settles against one collector.
    #[default]
    Banker,
    /// Players pay each other directly.
    Greedy,
}

impl SettlementMode {
    pub fn all() -> &'static [Self] {
        &[Self::Banker, Self::Greedy]
    }
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Banker => "banker",
            Self::Greedy => "greedy",
        }
    }
}

/// Unknown modes fall back to banker.
impl From<&str> for SettlementMode {
    fn from(s: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.symbol() == s.trim())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for SettlementMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
