use super::*;
use crate::numeric::fmt;
use crate::settings::Settings;
use crate::settle::*;
use crate::Money;
use serde::Serialize;

/// One line of the payment summary, with a link when a revtag is known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentItem {
    pub label: String,
    pub amount: Money,
    pub link: String,
}

/// Payment links for a settlement.
///
/// Banker receive items link to the player's revtag (the banker pays them);
/// banker pay items link to the profile revtag. Greedy transfers link to the
/// receiving player's revtag.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct PaymentPlan {
    pub receive: Vec<PaymentItem>,
    pub pay: Vec<PaymentItem>,
    /// Players whose revtag is needed but unknown, in first-seen order.
    pub missing: Vec<String>,
    /// Whether the profile revtag is needed but unknown.
    pub missing_profile: bool,
}

impl From<(&Settlement, &Settings)> for PaymentPlan {
    fn from((settlement, settings): (&Settlement, &Settings)) -> Self {
        let ref currency = settings.game_settings.currency;
        let profile = settings.profile.revtag.trim();
        let mut plan = Self::default();
        match settlement {
            Settlement::Banker(view) => {
                for b in view.receive.iter() {
                    let revtag = plan.revtag(settings, &b.name);
                    plan.receive.push(PaymentItem {
                        label: b.name.clone(),
                        amount: b.amount,
                        link: build_revolut_link(&revtag, b.amount, currency),
                    });
                }
                for b in view.pay.iter() {
                    plan.missing_profile |= profile.is_empty();
                    plan.pay.push(PaymentItem {
                        label: b.name.clone(),
                        amount: b.amount,
                        link: build_revolut_link(profile, b.amount, currency),
                    });
                }
            }
            Settlement::Greedy { transactions } => {
                for t in transactions.iter() {
                    let revtag = plan.revtag(settings, &t.to);
                    plan.pay.push(PaymentItem {
                        label: format!("{} → {}", t.from, t.to),
                        amount: t.amount,
                        link: build_revolut_link(&revtag, t.amount, currency),
                    });
                }
            }
        }
        plan
    }
}

impl PaymentPlan {
    fn revtag(&mut self, settings: &Settings, name: &str) -> String {
        match settings.revtag_of(name) {
            Some(revtag) => revtag.to_string(),
            None => {
                if !self.missing.iter().any(|m| m == name) {
                    self.missing.push(name.to_string());
                }
                String::new()
            }
        }
    }
}

/// Plain-text summary for pasting into a group chat.
///
/// Greedy mode lists every transfer; banker mode lists only the players who
/// owe the banker, with their (negative) result. Empty when nothing is owed.
pub fn summary(settlement: &Settlement, settings: &Settings) -> String {
    let ref currency = settings.game_settings.currency;
    let suffix = |link: String| match link.is_empty() {
        true => String::new(),
        false => format!(" - {}", link),
    };
    match settlement {
        Settlement::Greedy { transactions } => transactions
            .iter()
            .map(|t| {
                let revtag = settings.revtag_of(&t.to).unwrap_or_default();
                format!(
                    "{} {}{}",
                    t,
                    currency,
                    suffix(build_revolut_link(revtag, t.amount, currency))
                )
            })
            .collect::<Vec<String>>()
            .join("\n"),
        Settlement::Banker(view) => view
            .pay
            .iter()
            .map(|b| {
                format!(
                    "{}: {} {}{}",
                    b.name,
                    fmt(-b.amount),
                    currency,
                    suffix(build_revolut_link(&settings.profile.revtag, b.amount, currency))
                )
            })
            .collect::<Vec<String>>()
            .join("\n"),
    }
}
