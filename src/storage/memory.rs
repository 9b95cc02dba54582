use super::*;
use serde_json::Value;
use std::collections::HashMap;

/// In-process store. Nothing outlives the value.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore(HashMap<String, Value>);

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.0.get(key).cloned()
    }
    fn set(&mut self, key: &str, value: &Value) -> anyhow::Result<()> {
        self.0.insert(key.to_string(), value.clone());
        Ok(())
    }
    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.0.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payout::PayoutRow;
    use crate::settings::Settings;
    use crate::share::PayoutSnapshot;

    #[test]
    fn set_get_remove() {
        let mut store = MemoryStore::default();
        assert!(store.get("k").is_none());
        store.set("k", &serde_json::json!({ "a": 1 })).unwrap();
        assert!(store.get("k") == Some(serde_json::json!({ "a": 1 })));
        store.remove("k").unwrap();
        assert!(store.get("k").is_none());
        store.remove("k").unwrap();
    }
    #[test]
    fn payout_snapshots() {
        let mut store = MemoryStore::default();
        assert!(store.load_payout().is_none());
        let snap = PayoutSnapshot {
            rows: vec![PayoutRow::new("prow-3", "Otto", "30", "45")],
            buy_in: String::from("30"),
        };
        store.save_payout(&snap).unwrap();
        let back = store.load_payout().unwrap();
        assert!(back.rows[0].id.is_empty());
        assert!(back.rows[0].cash_out == "45");
        assert!(back.buy_in == "30");
    }
    #[test]
    fn rowless_entries_are_absent() {
        let mut store = MemoryStore::default();
        store
            .set(crate::SIDEPOT_STORAGE_KEY, &serde_json::json!({ "boards": "2" }))
            .unwrap();
        assert!(store.load_sidepot().is_none());
    }
    #[test]
    fn settings_default_when_missing() {
        let mut store = MemoryStore::default();
        assert!(store.load_settings() == Settings::default());
        let settings = Settings::default().with_profile_revtag("@me");
        store.save_settings(&settings).unwrap();
        assert!(store.load_settings() == settings);
    }
}
