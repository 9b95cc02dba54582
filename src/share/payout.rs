use super::*;
use crate::payout::PayoutRow;
use serde_json::Value;
use serde_json::json;

/// Current version of the compact share layout.
pub const SHARE_VERSION: u64 = 1;

impl PayoutSnapshot {
    /// `{"v":1,"b":buyIn,"r":[[name,in,out,0|1],...]}`
    pub fn compact(&self) -> Value {
        json!({
            "v": SHARE_VERSION,
            "b": self.buy_in,
            "r": self
                .rows
                .iter()
                .map(|row| json!([row.name, row.buy_in, row.cash_out, row.settled as u8]))
                .collect::<Vec<Value>>(),
        })
    }
    pub fn from_compact(value: &Value) -> Option<Self> {
        if value["v"].as_u64() != Some(SHARE_VERSION) {
            return None;
        }
        let rows = value["r"].as_array()?;
        Some(Self {
            rows: rows
                .iter()
                .map(|cells| {
                    PayoutRow::from((
                        text(&cells[0]),
                        text(&cells[1]),
                        text(&cells[2]),
                        truthy(&cells[3]),
                    ))
                })
                .collect(),
            buy_in: text(&value["b"]),
        })
    }
}

/// Encode the payout table as a compressed share code.
pub fn encode_payout_share(snapshot: &PayoutSnapshot) -> anyhow::Result<String> {
    Codec::Gzip.encode(&snapshot.compact().to_string())
}

/// Decode a payout share code. Compact and named-field payloads are both
/// accepted; anything unreadable is `None`.
pub fn decode_payout_share(code: &str) -> Option<PayoutSnapshot> {
    let ref value = decode_json(code)?;
    PayoutSnapshot::from_compact(value).or_else(|| PayoutSnapshot::from_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PayoutSnapshot {
        PayoutSnapshot {
            rows: vec![
                PayoutRow::new("prow-0", "Otto", "30", "60"),
                PayoutRow {
                    settled: true,
                    ..PayoutRow::new("prow-1", "Zoë", "30", "")
                },
            ],
            buy_in: String::from("30"),
        }
    }

    #[test]
    fn compact_layout() {
        let value = table().compact();
        assert!(value == json!({ "v": 1, "b": "30", "r": [["Otto", "30", "60", 0], ["Zoë", "30", "", 1]] }));
    }
    #[test]
    fn share_codes_restore_the_table() {
        let code = encode_payout_share(&table()).unwrap();
        assert!(code.starts_with('z'));
        let back = decode_payout_share(&code).unwrap();
        assert!(back.buy_in == "30");
        assert!(back.rows.len() == 2);
        assert!(back.rows[1].name == "Zoë");
        assert!(back.rows[1].settled);
        assert!(back.rows.iter().all(|r| r.id.is_empty()));
    }
    #[test]
    fn plain_compact_codes() {
        let code = Codec::Plain.encode(r#"{"v":1,"r":[["A",30,null]]}"#).unwrap();
        let back = decode_payout_share(&code).unwrap();
        assert!(back.buy_in == "");
        assert!(back.rows[0].name == "A");
        assert!(back.rows[0].buy_in == "30");
        assert!(back.rows[0].cash_out == "");
        assert!(!back.rows[0].settled);
    }
    #[test]
    fn legacy_named_codes() {
        let code = Codec::Plain
            .encode(r#"{"rows":[{"name":"A","in":"30","out":"40","settled":true}],"buyIn":"30"}"#)
            .unwrap();
        let back = decode_payout_share(&code).unwrap();
        assert!(back.rows[0].cash_out == "40");
        assert!(back.rows[0].settled);
    }
    #[test]
    fn unknown_versions_fall_back_to_named_fields() {
        let code = Codec::Plain.encode(r#"{"v":2,"r":[["A"]]}"#).unwrap();
        assert!(decode_payout_share(&code).is_none());
    }
    #[test]
    fn garbage_is_absent() {
        assert!(decode_payout_share("z").is_none());
        assert!(decode_payout_share("not a code").is_none());
    }
}
