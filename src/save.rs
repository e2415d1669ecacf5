//! Persisted form of [`GameState`].
//!
//! The blob is a flat JSON object `{ "cookies": <number>, "owned": { id: n } }`
//! with no version field. Decoding is lenient: every field that fails
//! validation falls back to its default, so a corrupted save can never keep
//! the game from starting.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::SaveIssue;
use crate::model::{GameState, UpgradeDef};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SaveBlob {
    pub cookies: f64,
    pub owned: BTreeMap<String, u32>,
}

impl SaveBlob {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Outcome of decoding a persisted save. Both arms carry a usable state.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
    /// Every field was well formed.
    Clean(GameState),
    /// Some fields were replaced with defaults.
    Repaired {
        state: GameState,
        issues: Vec<SaveIssue>,
    },
}

impl Decoded {
    #[cfg(test)]
    pub fn state(&self) -> &GameState {
        match self {
            Decoded::Clean(state) | Decoded::Repaired { state, .. } => state,
        }
    }

    pub fn into_state(self) -> GameState {
        match self {
            Decoded::Clean(state) | Decoded::Repaired { state, .. } => state,
        }
    }

    pub fn issues(&self) -> &[SaveIssue] {
        match self {
            Decoded::Clean(_) => &[],
            Decoded::Repaired { issues, .. } => issues.as_slice(),
        }
    }
}

impl GameState {
    pub fn serialize(&self) -> SaveBlob {
        SaveBlob {
            cookies: self.currency(),
            owned: self
                .entries()
                .map(|(def, n)| (def.id.to_string(), n))
                .collect(),
        }
    }

    /// Decodes raw stored text. Never fails; see [`Decoded`].
    pub fn deserialize(defs: &'static [UpgradeDef], raw: &str) -> Decoded {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_value(defs, &value),
            Err(e) => Decoded::Repaired {
                state: GameState::new(defs),
                issues: vec![SaveIssue::NotJson(e.to_string())],
            },
        }
    }

    pub fn from_value(defs: &'static [UpgradeDef], value: &Value) -> Decoded {
        let Some(root) = value.as_object() else {
            return Decoded::Repaired {
                state: GameState::new(defs),
                issues: vec![SaveIssue::NotAnObject],
            };
        };
        let mut issues = Vec::new();

        let currency = match root.get("cookies").and_then(Value::as_f64) {
            Some(c) if c.is_finite() && c >= 0.0 => c,
            _ => {
                issues.push(SaveIssue::BadCurrency);
                0.0
            }
        };

        let empty = Map::new();
        let owned_map = match root.get("owned") {
            Some(Value::Object(m)) => m,
            None => &empty,
            Some(_) => {
                issues.push(SaveIssue::BadOwned);
                &empty
            }
        };

        // Unknown keys in `owned` are dropped without complaint.
        let owned = defs
            .iter()
            .map(|def| match owned_map.get(def.id) {
                None => 0,
                Some(v) => match decode_count(v) {
                    Some(n) => n,
                    None => {
                        issues.push(SaveIssue::BadCount(def.id.to_string()));
                        0
                    }
                },
            })
            .collect();

        let state = GameState::from_parts(defs, currency, owned);
        if issues.is_empty() {
            Decoded::Clean(state)
        } else {
            Decoded::Repaired { state, issues }
        }
    }
}

fn decode_count(v: &Value) -> Option<u32> {
    if let Some(n) = v.as_u64() {
        return Some(n.min(u32::MAX as u64) as u32);
    }
    let f = v.as_f64()?;
    if !f.is_finite() || f < 0.0 {
        return None;
    }
    Some(f.floor().min(u32::MAX as f64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UPGRADE_DEFS;

    fn decode(raw: &str) -> Decoded {
        GameState::deserialize(UPGRADE_DEFS, raw)
    }

    #[test]
    fn blob_layout_matches_storage_format() {
        let mut gs = GameState::default();
        gs.set_currency(20.5);
        gs.purchase("cursor").unwrap();
        let json: Value = serde_json::from_str(&gs.serialize().to_json().unwrap()).unwrap();
        assert_eq!(json["cookies"], 5.5);
        assert_eq!(json["owned"]["cursor"], 1);
        assert_eq!(json["owned"]["factory"], 0);
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn round_trip_after_play() {
        let mut gs = GameState::default();
        gs.set_currency(1_000.0);
        gs.purchase("cursor").unwrap();
        gs.purchase("cursor").unwrap();
        gs.purchase("grandma").unwrap();
        for _ in 0..37 {
            gs.accrue(0.1);
        }
        gs.purchase("cursor").unwrap();

        let text = gs.serialize().to_json().unwrap();
        let back = decode(&text);
        assert!(matches!(back, Decoded::Clean(_)), "{back:?}");
        assert_eq!(back.into_state(), gs);
    }

    #[test]
    fn round_trip_fresh_state() {
        let gs = GameState::default();
        let text = gs.serialize().to_json().unwrap();
        assert_eq!(decode(&text), Decoded::Clean(gs));
    }

    #[test]
    fn non_object_inputs_fall_back_to_zero() {
        for raw in ["null", "42", "\"cookies\"", "[1,2]", "true"] {
            let d = decode(raw);
            assert_eq!(d.state(), &GameState::default(), "input {raw}");
            assert_eq!(d.issues(), &[SaveIssue::NotAnObject], "input {raw}");
        }
    }

    #[test]
    fn garbage_text_falls_back_to_zero() {
        let d = decode("{not json");
        assert_eq!(d.state(), &GameState::default());
        assert!(matches!(d.issues(), [SaveIssue::NotJson(_)]));
    }

    #[test]
    fn empty_object_defaults_currency() {
        let d = decode("{}");
        assert_eq!(d.state(), &GameState::default());
        assert_eq!(d.issues(), &[SaveIssue::BadCurrency]);
    }

    #[test]
    fn string_cookies_keeps_owned_counts() {
        let d = decode(r#"{"cookies":"abc","owned":{"cursor":3}}"#);
        let gs = d.state();
        assert_eq!(gs.currency(), 0.0);
        assert_eq!(gs.owned("cursor"), Ok(3));
        assert_eq!(gs.owned("grandma"), Ok(0));
        assert_eq!(d.issues(), &[SaveIssue::BadCurrency]);
    }

    #[test]
    fn out_of_range_cookies_keeps_owned_counts() {
        for raw in [
            r#"{"cookies":1e400,"owned":{"cursor":3}}"#,
            r#"{"cookies":-1e400,"owned":{"cursor":3}}"#,
        ] {
            let d = decode(raw);
            assert_eq!(d.state().currency(), 0.0, "input {raw}");
            assert_eq!(d.state().owned("cursor"), Ok(3), "input {raw}");
            assert_eq!(d.issues(), &[SaveIssue::BadCurrency], "input {raw}");
        }
    }

    #[test]
    fn out_of_range_count_defaults_only_that_field() {
        let d = decode(r#"{"cookies":4,"owned":{"farm":1e999,"grandma":2}}"#);
        assert_eq!(d.state().currency(), 4.0);
        assert_eq!(d.state().owned("farm"), Ok(0));
        assert_eq!(d.state().owned("grandma"), Ok(2));
        assert_eq!(d.issues(), &[SaveIssue::BadCount("farm".to_string())]);
    }

    #[test]
    fn bad_owned_type_is_treated_as_empty() {
        let d = decode(r#"{"cookies":12,"owned":[1,2,3]}"#);
        assert_eq!(d.state().currency(), 12.0);
        assert_eq!(d.state().generation_rate(), 0.0);
        assert_eq!(d.issues(), &[SaveIssue::BadOwned]);
    }

    #[test]
    fn missing_owned_is_not_an_issue() {
        let d = decode(r#"{"cookies":3}"#);
        assert!(matches!(d, Decoded::Clean(_)));
        assert_eq!(d.state().currency(), 3.0);
    }

    #[test]
    fn unknown_owned_keys_are_dropped() {
        let d = decode(r#"{"cookies":1,"owned":{"portal":9,"farm":2}}"#);
        assert!(matches!(d, Decoded::Clean(_)));
        assert_eq!(d.state().owned("farm"), Ok(2));
        assert!(!d.state().serialize().owned.contains_key("portal"));
    }

    #[test]
    fn bad_counts_are_defaulted_per_field() {
        let d = decode(r#"{"cookies":1,"owned":{"cursor":"x","grandma":-4,"farm":2.7,"factory":null}}"#);
        let gs = d.state();
        assert_eq!(gs.owned("cursor"), Ok(0));
        assert_eq!(gs.owned("grandma"), Ok(0));
        assert_eq!(gs.owned("farm"), Ok(2));
        assert_eq!(gs.owned("factory"), Ok(0));
        assert_eq!(
            d.issues(),
            &[
                SaveIssue::BadCount("cursor".to_string()),
                SaveIssue::BadCount("grandma".to_string()),
                SaveIssue::BadCount("factory".to_string()),
            ]
        );
    }

    #[test]
    fn negative_cookies_are_rejected() {
        let d = decode(r#"{"cookies":-50,"owned":{}}"#);
        assert_eq!(d.state().currency(), 0.0);
        assert_eq!(d.issues(), &[SaveIssue::BadCurrency]);
    }
}
