use crate::Arbitrary;
use crate::numeric::*;
use crate::Money;
use serde::Deserialize;
use serde::Serialize;

/// One player's line in the buy-in / cash-out table.
///
/// Amounts stay as the raw strings the user typed; they are parsed on every
/// calculation. `id` only reconciles list edits and is never serialized.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutRow {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "in", alias = "buyIn")]
    pub buy_in: String,
    #[serde(default, rename = "out", alias = "cashOut")]
    pub cash_out: String,
    #[serde(default)]
    pub settled: bool,
}

impl PayoutRow {
    pub fn new(id: impl Into<String>, name: &str, buy_in: &str, cash_out: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            buy_in: buy_in.to_string(),
            cash_out: cash_out.to_string(),
            settled: false,
        }
    }
    /// Parsed buy-in. Negative values are kept.
    pub fn risked(&self) -> Money {
        parse(&self.buy_in)
    }
    /// Parsed cash-out, clamped at zero.
    pub fn reward(&self) -> Money {
        parse(&self.cash_out).max(0.)
    }
    /// Net result for this player; positive means they are owed money.
    pub fn payout(&self) -> Money {
        self.reward() - self.risked()
    }
    /// Trimmed display name, `None` when blank.
    pub fn named(&self) -> Option<&str> {
        Some(self.name.trim()).filter(|name| !name.is_empty())
    }
}

/// Compact share cells: `[name, in, out, settled]`.
impl From<(String, String, String, bool)> for PayoutRow {
    fn from((name, buy_in, cash_out, settled): (String, String, String, bool)) -> Self {
        Self {
            id: String::new(),
            name,
            buy_in,
            cash_out,
            settled,
        }
    }
}

impl From<&PayoutRow> for (String, String, String, bool) {
    fn from(row: &PayoutRow) -> Self {
        (
            row.name.clone(),
            row.buy_in.clone(),
            row.cash_out.clone(),
            row.settled,
        )
    }
}

impl std::fmt::Display for PayoutRow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let payout = match round_cents(self.payout()) {
            p if p == 0. => 0.,
            p => p,
        };
        write!(
            f,
            "{:<12} {:>8} {:>8} {:>+9.2}",
            self.named().unwrap_or("-"),
            fmt_int(self.risked()),
            fmt(self.reward()),
            payout
        )
    }
}

impl Arbitrary for PayoutRow {
    fn random() -> Self {
        let buy_in = rand::random_range(1..=10) * 10;
        let cash_out = rand::random_range(0..=buy_in * 3);
        let name = format!("P{}", rand::random_range(0..1000));
        Self::new("", &name, &buy_in.to_string(), &cash_out.to_string())
    }
}
