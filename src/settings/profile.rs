use serde::Deserialize;
use serde::Serialize;

/// The person running the table; pay-to-banker links use this revtag.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub revtag: String,
}

/// A regular player offered as a one-click row name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsualSuspect {
    pub name: String,
    #[serde(default)]
    pub revtag: String,
}

impl UsualSuspect {
    pub fn new(name: &str, revtag: &str) -> Self {
        Self {
            name: name.to_string(),
            revtag: revtag.to_string(),
        }
    }
}

/// The built-in regulars, without revtags.
pub fn default_suspects() -> Vec<UsualSuspect> {
    crate::USUAL_SUSPECTS
        .iter()
        .map(|name| UsualSuspect::new(name, ""))
        .collect()
}
