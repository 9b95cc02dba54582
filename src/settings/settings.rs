use super::*;
use crate::payments::normalize_revtag;
use crate::settle::SettlementMode;
use crate::share::text;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Everything the user configures once and reuses across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub profile: Profile,
    pub usual_suspects: Vec<UsualSuspect>,
    pub game_settings: GameSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self::normalize(&Value::Null, &default_suspects())
    }
}

impl Settings {
    /// Coerce arbitrary JSON (an imported file, an older schema, or nothing
    /// at all) into complete settings. Never fails.
    ///
    /// A missing suspect list falls back to `defaults`; a present one is
    /// kept even when empty. Suspects may be bare strings or objects, and
    /// blank names are dropped.
    pub fn normalize(data: &Value, defaults: &[UsualSuspect]) -> Self {
        let profile = Profile {
            name: text(&data["profile"]["name"]),
            revtag: text(&data["profile"]["revtag"]),
        };
        let usual_suspects = match data["usualSuspects"].as_array() {
            Some(list) => list.iter().filter_map(suspect).collect(),
            None => defaults
                .iter()
                .filter(|s| !s.name.trim().is_empty())
                .map(|s| UsualSuspect::new(s.name.trim(), s.revtag.trim()))
                .collect(),
        };
        let game = &data["gameSettings"];
        let currency = match text(&game["currency"]).trim() {
            "" => String::from(crate::DEFAULT_CURRENCY),
            c => c.to_string(),
        };
        let default_buy_in = match &game["defaultBuyIn"] {
            Value::Null => String::from(crate::DEFAULT_BUY_IN),
            v => text(v),
        };
        let settlement_mode = SettlementMode::from(text(&game["settlementMode"]).as_str());
        Self {
            profile,
            usual_suspects,
            game_settings: GameSettings {
                currency,
                default_buy_in,
                settlement_mode,
            },
        }
    }

    /// Parse settings text; malformed JSON reads as no settings at all.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => Self::normalize(&value, &default_suspects()),
            Err(e) => {
                log::warn!("ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn suspect_names(&self) -> Vec<&str> {
        self.usual_suspects.iter().map(|s| s.name.as_str()).collect()
    }

    /// Revtag recorded for a player, matched case-insensitively.
    pub fn revtag_of(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.usual_suspects
            .iter()
            .find(|s| s.name.to_lowercase() == name)
            .map(|s| s.revtag.trim())
            .filter(|revtag| !revtag.is_empty())
    }

    /// Copy with a player's revtag recorded, adding them as a suspect if new.
    /// A bare `@` counts as no revtag.
    pub fn with_revtag(&self, name: &str, revtag: &str) -> Self {
        let mut next = self.clone();
        let revtag = match normalize_revtag(revtag) {
            r if r == "@" => String::new(),
            r => r,
        };
        if revtag.is_empty() {
            return next;
        }
        let lower = name.to_lowercase();
        match next
            .usual_suspects
            .iter_mut()
            .find(|s| s.name.to_lowercase() == lower)
        {
            Some(entry) => entry.revtag = revtag,
            None => next.usual_suspects.push(UsualSuspect::new(name.trim(), &revtag)),
        }
        next
    }

    /// Copy with the profile revtag replaced. A bare `@` clears it.
    pub fn with_profile_revtag(&self, revtag: &str) -> Self {
        let mut next = self.clone();
        next.profile.revtag = match normalize_revtag(revtag) {
            r if r == "@" => String::new(),
            r => r,
        };
        next
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

fn suspect(item: &Value) -> Option<UsualSuspect> {
    match item {
        Value::String(s) => Some(s.trim())
            .filter(|name| !name.is_empty())
            .map(|name| UsualSuspect::new(name, "")),
        Value::Object(_) => Some(text(&item["name"]))
            .filter(|name| !name.trim().is_empty())
            .map(|name| UsualSuspect::new(name.trim(), text(&item["revtag"]).trim())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nothing_normalizes_to_defaults() {
        let settings = Settings::default();
        assert!(settings.profile == Profile::default());
        assert!(settings.usual_suspects.len() == 22);
        assert!(settings.game_settings == GameSettings::default());
        assert!(settings.game_settings.is_known_currency());
    }
    #[test]
    fn mixed_suspect_shapes() {
        let settings = Settings::normalize(
            &json!({ "usualSuspects": [" Otto ", "", null, 7, { "name": " Mic ", "revtag": " @mic " }, { "revtag": "@ghost" }] }),
            &default_suspects(),
        );
        assert!(settings.usual_suspects == vec![
            UsualSuspect::new("Otto", ""),
            UsualSuspect::new("Mic", "@mic"),
        ]);
    }
    #[test]
    fn empty_suspect_list_is_kept() {
        let settings = Settings::normalize(&json!({ "usualSuspects": [] }), &default_suspects());
        assert!(settings.usual_suspects.is_empty());
    }
    #[test]
    fn game_settings_coercion() {
        let settings = Settings::normalize(
            &json!({ "gameSettings": { "currency": " GBP ", "defaultBuyIn": 50, "settlementMode": "greedy" } }),
            &[],
        );
        assert!(settings.game_settings.currency == "GBP");
        assert!(!settings.game_settings.is_known_currency());
        assert!(settings.game_settings.default_buy_in == "50");
        assert!(settings.game_settings.settlement_mode == SettlementMode::Greedy);
        let settings = Settings::normalize(&json!({ "gameSettings": { "currency": "  ", "settlementMode": "optimal" } }), &[]);
        assert!(settings.game_settings.currency == "EUR");
        assert!(settings.game_settings.settlement_mode == SettlementMode::Banker);
    }
    #[test]
    fn malformed_text_is_default() {
        assert!(Settings::from_json("{ not json") == Settings::default());
    }
    #[test]
    fn round_trips_through_its_own_json() {
        let settings = Settings::default()
            .with_revtag("otto", "@otto")
            .with_profile_revtag(" @me ");
        assert!(Settings::normalize(&settings.to_json(), &[]) == settings);
        assert!(settings.to_json()["gameSettings"]["settlementMode"] == "banker");
    }
    #[test]
    fn revtag_lookup_ignores_case() {
        let settings = Settings::default().with_revtag("OTTO", " @otto ");
        assert!(settings.revtag_of("otto") == Some("@otto"));
        assert!(settings.revtag_of("Liam").is_none());
        assert!(settings.usual_suspects.len() == 22);
    }
    #[test]
    fn new_players_become_suspects() {
        let settings = Settings::default().with_revtag("Zoe", "@zoe");
        assert!(settings.usual_suspects.len() == 23);
        assert!(settings.revtag_of("ZOE") == Some("@zoe"));
        assert!(Settings::default().with_revtag("Zoe", "@") == Settings::default());
    }
}
