use super::*;
use crate::payout::*;
use serde::Serialize;

/// The settlement view selected by [`SettlementMode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Settlement {
    Banker(BankerView),
    Greedy { transactions: Vec<Transaction> },
}

impl From<(&[PayoutRow], SettlementMode)> for Settlement {
    fn from((rows, mode): (&[PayoutRow], SettlementMode)) -> Self {
        Self::from((balances(rows).as_slice(), mode))
    }
}

impl From<(&[Balance], SettlementMode)> for Settlement {
    fn from((balances, mode): (&[Balance], SettlementMode)) -> Self {
        match mode {
            SettlementMode::Banker => Self::Banker(BankerView::from(balances)),
            SettlementMode::Greedy => Self::Greedy {
                transactions: compute_greedy_transactions(balances),
            },
        }
    }
}

impl Settlement {
    pub fn mode(&self) -> SettlementMode {
        match self {
            Self::Banker(_) => SettlementMode::Banker,
            Self::Greedy { .. } => SettlementMode::Greedy,
        }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use crate::numeric::fmt as money;
        match self {
            Self::Banker(view) => {
                for b in view.receive.iter() {
                    writeln!(f, "receive  {:<12} {:>10}", b.name, money(b.amount))?;
                }
                for b in view.pay.iter() {
                    writeln!(f, "pay      {:<12} {:>10}", b.name, money(b.amount))?;
                }
                Ok(())
            }
            Self::Greedy { transactions } => {
                for t in transactions.iter() {
                    writeln!(f, "{}", t)?;
                }
                Ok(())
            }
        }
    }
}
