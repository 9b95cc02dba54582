use super::*;
use crate::DUST;
use crate::Money;
use serde::Deserialize;
use serde::Serialize;

/// A player's signed net position. Positive means the player is owed money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub name: String,
    pub amount: Money,
}

impl Balance {
    pub fn new(name: &str, amount: Money) -> Self {
        Self {
            name: name.to_string(),
            amount,
        }
    }
    pub fn is_settled(&self) -> bool {
        self.amount.abs() < DUST
    }
}

impl From<(&str, Money)> for Balance {
    fn from((name, amount): (&str, Money)) -> Self {
        Self::new(name, amount)
    }
}

/// Net positions of the named rows, dropping anyone already square.
pub fn balances(rows: &[PayoutRow]) -> Vec<Balance> {
    rows.iter()
        .filter_map(|row| row.named().map(|name| Balance::new(name, row.payout())))
        .filter(|balance| !balance.is_settled())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_names_and_square_players() {
        let rows = [
            PayoutRow::new("", " A ", "30", "50"),
            PayoutRow::new("", "", "30", "0"),
            PayoutRow::new("", "B", "30", "30.004"),
            PayoutRow::new("", "C", "30", "10"),
        ];
        let balances = balances(&rows);
        assert!(balances == vec![Balance::new("A", 20.), Balance::new("C", -20.)]);
    }
}
