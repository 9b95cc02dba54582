use super::*;
use crate::numeric::*;
use crate::Money;
use serde::Serialize;

/// Totals and per-row payouts for a buy-in / cash-out table.
///
/// `payouts[i]` belongs to `rows[i]` of the input; rows are neither
/// filtered nor reordered, so blank-named rows still count toward totals.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub total_in: Money,
    pub total_out: Money,
    pub total_payout: Money,
    pub is_balanced: bool,
    pub payouts: Vec<Money>,
}

impl Ledger {
    /// Sum of per-row payouts, equal to `total_payout` up to float noise.
    pub fn net(&self) -> Money {
        self.payouts.iter().sum()
    }
}

impl From<&[PayoutRow]> for Ledger {
    fn from(rows: &[PayoutRow]) -> Self {
        let total_in = rows.iter().map(PayoutRow::risked).sum::<Money>();
        let total_out = rows.iter().map(PayoutRow::reward).sum::<Money>();
        let payouts = rows.iter().map(PayoutRow::payout).collect::<Vec<Money>>();
        let total_payout = total_out - total_in;
        Self {
            total_in,
            total_out,
            total_payout,
            is_balanced: is_zero_cents(total_payout),
            payouts,
        }
    }
}

impl std::fmt::Display for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "in {} / out {} / net {}",
            fmt(self.total_in),
            fmt(self.total_out),
            fmt(self.total_payout)
        )
    }
}

/// Compute the ledger for a table snapshot.
pub fn calculate_payouts(rows: &[PayoutRow]) -> Ledger {
    Ledger::from(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn row(buy_in: &str, cash_out: &str) -> PayoutRow {
        PayoutRow::new("", "", buy_in, cash_out)
    }

    #[test]
    fn two_player_swing() {
        let ledger = calculate_payouts(&[row("30", "50"), row("30", "10")]);
        assert!(ledger.payouts == vec![20., -20.]);
        assert!(ledger.total_in == 60.);
        assert!(ledger.total_out == 60.);
        assert!(ledger.is_balanced);
    }
    #[test]
    fn empty_table() {
        let ledger = calculate_payouts(&[]);
        assert!(ledger.payouts.is_empty());
        assert!(ledger.total_payout == 0.);
        assert!(ledger.is_balanced);
    }
    #[test]
    fn unbalanced_is_a_state_not_an_error() {
        let ledger = calculate_payouts(&[row("30", "50"), row("30", "")]);
        assert!(!ledger.is_balanced);
        assert!(ledger.total_payout == -10.);
        assert!(ledger.to_string() == "in 60.00 / out 50.00 / net -10.00");
    }
    #[test]
    fn sub_cent_drift_is_balanced() {
        let ledger = calculate_payouts(&[row("0.1", "0.3"), row("0.2", "0")]);
        assert!(ledger.is_balanced);
    }
    #[test]
    fn clamped_cash_out_counts_as_zero() {
        let ledger = calculate_payouts(&[row("30", "-5"), row("0", "30")]);
        assert!(ledger.total_out == 30.);
        assert!(ledger.is_balanced);
    }
    #[test]
    fn zero_sum_tables_balance() {
        for _ in 0..200 {
            let mut rows = (0..rand::random_range(1..=crate::MAX_ROWS))
                .map(|_| PayoutRow::random())
                .collect::<Vec<_>>();
            let total_in = rows.iter().map(PayoutRow::risked).sum::<Money>();
            let others = rows.iter().skip(1).map(PayoutRow::reward).sum::<Money>();
            let first = total_in - others;
            if first < 0. {
                continue;
            }
            rows[0].cash_out = first.to_string();
            let ledger = calculate_payouts(&rows);
            assert!(ledger.is_balanced);
            assert!(is_zero_cents(ledger.net()));
            assert!(ledger.payouts.len() == rows.len());
        }
    }
}
