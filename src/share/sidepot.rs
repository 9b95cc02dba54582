use super::*;
use crate::sidepot::SidePotEntry;
use serde_json::Value;
use serde_json::json;

impl SidePotSnapshot {
    /// `{"v":1,"b":boards,"i":initialPot,"r":[[name,bet],...]}`. Blank boards
    /// and initial pot are written as `"1"` and `"0"`.
    pub fn compact(&self) -> Value {
        let or = |s: &str, fallback: &str| match s.is_empty() {
            true => fallback.to_string(),
            false => s.to_string(),
        };
        json!({
            "v": SHARE_VERSION,
            "b": or(&self.boards, "1"),
            "i": or(&self.initial_pot, "0"),
            "r": self
                .rows
                .iter()
                .map(|row| json!([row.name, row.bet]))
                .collect::<Vec<Value>>(),
        })
    }
    pub fn from_compact(value: &Value) -> Option<Self> {
        if value["v"].as_u64() != Some(SHARE_VERSION) {
            return None;
        }
        let rows = value["r"].as_array()?;
        let or = |v: &Value, fallback: &str| match v {
            Value::Null => fallback.to_string(),
            v => text(v),
        };
        Some(Self {
            rows: rows
                .iter()
                .map(|cells| SidePotEntry::from((text(&cells[0]), text(&cells[1]))))
                .collect(),
            boards: or(&value["b"], "1"),
            initial_pot: or(&value["i"], "0"),
        })
    }
}

/// Encode the side-pot table as a compressed share code.
pub fn encode_sidepot_share(snapshot: &SidePotSnapshot) -> anyhow::Result<String> {
    Codec::Gzip.encode(&snapshot.compact().to_string())
}

/// Decode a side-pot share code. Compact and named-field payloads are both
/// accepted; anything unreadable is `None`.
pub fn decode_sidepot_share(code: &str) -> Option<SidePotSnapshot> {
    let ref value = decode_json(code)?;
    SidePotSnapshot::from_compact(value).or_else(|| SidePotSnapshot::from_value(value))
}
