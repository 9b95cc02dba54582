use crate::payout::*;
use serde::Serialize;

/// One-sided settlement against a central collector.
///
/// `receive` holds players the banker pays out; `pay` holds players who pay
/// the banker, as positive amounts. Both keep table order.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct BankerView {
    pub receive: Vec<Balance>,
    pub pay: Vec<Balance>,
}

impl From<&[PayoutRow]> for BankerView {
    fn from(rows: &[PayoutRow]) -> Self {
        Self::from(balances(rows).as_slice())
    }
}

impl From<&[Balance]> for BankerView {
    fn from(balances: &[Balance]) -> Self {
        let (receive, pay) = balances
            .iter()
            .filter(|b| !b.is_settled())
            .cloned()
            .partition::<Vec<Balance>, _>(|b| b.amount > 0.);
        Self {
            receive,
            pay: pay
                .into_iter()
                .map(|b| Balance::new(&b.name, b.amount.abs()))
                .collect(),
        }
    }
}

pub fn banker_view(rows: &[PayoutRow]) -> BankerView {
    BankerView::from(rows)
}
