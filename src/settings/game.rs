use crate::settle::SettlementMode;
use serde::Deserialize;
use serde::Serialize;

/// Table-wide defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub currency: String,
    pub default_buy_in: String,
    pub settlement_mode: SettlementMode,
}

impl GameSettings {
    pub fn is_known_currency(&self) -> bool {
        crate::KNOWN_CURRENCIES.contains(&self.currency.as_str())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            currency: String::from(crate::DEFAULT_CURRENCY),
            default_buy_in: String::from(crate::DEFAULT_BUY_IN),
            settlement_mode: SettlementMode::default(),
        }
    }
}
