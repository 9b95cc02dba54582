use crate::payout::PayoutRow;
use crate::sidepot::SidePotEntry;
use serde::Serialize;
use serde_json::Value;

/// The payout table as it is saved and shared by field name.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct PayoutSnapshot {
    pub rows: Vec<PayoutRow>,
    #[serde(rename = "buyIn")]
    pub buy_in: String,
}

/// The side-pot table as it is saved and shared by field name.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidePotSnapshot {
    pub rows: Vec<SidePotEntry>,
    pub boards: String,
    pub initial_pot: String,
}

impl PayoutSnapshot {
    /// Read the named-field shape. Requires a `rows` array; every other
    /// field, and every field of every row, may be missing or mistyped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let rows = value["rows"].as_array()?;
        Some(Self {
            rows: rows
                .iter()
                .map(|row| PayoutRow {
                    id: String::new(),
                    name: text(&row["name"]),
                    buy_in: text(either(&row["in"], &row["buyIn"])),
                    cash_out: text(either(&row["out"], &row["cashOut"])),
                    settled: truthy(&row["settled"]),
                })
                .collect(),
            buy_in: text(&value["buyIn"]),
        })
    }
}

impl SidePotSnapshot {
    /// Read the named-field shape. Requires a `rows` array.
    pub fn from_value(value: &Value) -> Option<Self> {
        let rows = value["rows"].as_array()?;
        Some(Self {
            rows: rows
                .iter()
                .map(|row| SidePotEntry::from((text(&row["name"]), text(&row["bet"]))))
                .collect(),
            boards: text(&value["boards"]),
            initial_pot: text(&value["initialPot"]),
        })
    }
}

/// Loose stringification of a JSON scalar; absent and compound values are blank.
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Loose truthiness: `null`, `false`, `0`, and `""` are false.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn either<'a>(value: &'a Value, legacy: &'a Value) -> &'a Value {
    match value {
        Value::Null => legacy,
        _ => value,
    }
}
