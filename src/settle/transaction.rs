use crate::numeric::*;
use crate::Money;
use serde::Deserialize;
use serde::Serialize;

/// A proposed transfer from a losing player to a winning one.
/// Always recomputed from current balances, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub from: String,
    pub to: String,
    pub amount: Money,
}

impl Transaction {
    pub fn new(from: &str, to: &str, amount: Money) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} → {}: {}", self.from, self.to, fmt(self.amount))
    }
}
