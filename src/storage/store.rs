use crate::settings::Settings;
use crate::share::*;
use serde_json::Value;

/// Key-value persistence for table snapshots and settings.
///
/// Reads never fail: a missing, unreadable, or malformed entry is absent.
pub trait Store {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: &Value) -> anyhow::Result<()>;
    fn remove(&mut self, key: &str) -> anyhow::Result<()>;

    fn load_payout(&self) -> Option<PayoutSnapshot> {
        self.get(crate::PAYOUT_STORAGE_KEY)
            .as_ref()
            .and_then(PayoutSnapshot::from_value)
    }
    fn save_payout(&mut self, snapshot: &PayoutSnapshot) -> anyhow::Result<()> {
        self.set(crate::PAYOUT_STORAGE_KEY, &serde_json::to_value(snapshot)?)
    }
    fn load_sidepot(&self) -> Option<SidePotSnapshot> {
        self.get(crate::SIDEPOT_STORAGE_KEY)
            .as_ref()
            .and_then(SidePotSnapshot::from_value)
    }
    fn save_sidepot(&mut self, snapshot: &SidePotSnapshot) -> anyhow::Result<()> {
        self.set(crate::SIDEPOT_STORAGE_KEY, &serde_json::to_value(snapshot)?)
    }
    /// Stored settings, normalized; defaults when nothing is stored.
    fn load_settings(&self) -> Settings {
        self.get(crate::SETTINGS_STORAGE_KEY)
            .map(|ref value| Settings::normalize(value, &crate::settings::default_suspects()))
            .unwrap_or_default()
    }
    fn save_settings(&mut self, settings: &Settings) -> anyhow::Result<()> {
        self.set(crate::SETTINGS_STORAGE_KEY, &settings.to_json())
    }
}
