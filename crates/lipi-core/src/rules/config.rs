use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_devanagari_text;

/// Longest key accepted in the cluster tables (consonants/vowels/matras).
/// Whole-word dictionary keys may be longer.
pub const MAX_CLUSTER_KEY_LEN: usize = 5;

#[derive(Debug, Deserialize)]
pub(crate) struct RulesConfig {
    pub halant: String,
    pub punctuation: String,
    pub words: BTreeMap<String, String>,
    pub consonants: BTreeMap<String, String>,
    pub vowels: BTreeMap<String, String>,
    pub matras: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RulesConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    EmptyTable(&'static str),
    #[error("non-ASCII key in [{table}]: {key}")]
    NonAsciiKey { table: &'static str, key: String },
    #[error("key in [{table}] must be lowercase: {key}")]
    NonLowercaseKey { table: &'static str, key: String },
    #[error("key in [{table}] exceeds {MAX_CLUSTER_KEY_LEN} chars: {key}")]
    KeyTooLong { table: &'static str, key: String },
    #[error("empty value in [{table}] for key: {key}")]
    EmptyValue { table: &'static str, key: String },
    #[error("value in [{table}] for {key} is not Devanagari: {value}")]
    NonDevanagariValue {
        table: &'static str,
        key: String,
        value: String,
    },
    #[error("[matras] must not map the inherent vowel \"a\"")]
    InherentVowelMatra,
    #[error("rule set already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into validated rule tables.
pub(crate) fn parse_rules_toml(toml_str: &str) -> Result<RulesConfig, RulesConfigError> {
    let config: RulesConfig =
        toml::from_str(toml_str).map_err(|e| RulesConfigError::Parse(e.to_string()))?;

    validate_table("words", &config.words, false)?;
    validate_table("consonants", &config.consonants, true)?;
    validate_table("vowels", &config.vowels, true)?;
    validate_table("matras", &config.matras, true)?;

    if config.matras.contains_key("a") {
        return Err(RulesConfigError::InherentVowelMatra);
    }
    if config.halant.is_empty() {
        return Err(RulesConfigError::EmptyValue {
            table: "halant",
            key: "halant".into(),
        });
    }
    if !is_devanagari_text(&config.halant) {
        return Err(RulesConfigError::NonDevanagariValue {
            table: "halant",
            key: "halant".into(),
            value: config.halant.clone(),
        });
    }

    Ok(config)
}

fn validate_table(
    table: &'static str,
    map: &BTreeMap<String, String>,
    cluster: bool,
) -> Result<(), RulesConfigError> {
    if map.is_empty() {
        return Err(RulesConfigError::EmptyTable(table));
    }
    for (key, value) in map {
        if !key.is_ascii() {
            return Err(RulesConfigError::NonAsciiKey {
                table,
                key: key.clone(),
            });
        }
        if key.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(RulesConfigError::NonLowercaseKey {
                table,
                key: key.clone(),
            });
        }
        if cluster && key.len() > MAX_CLUSTER_KEY_LEN {
            return Err(RulesConfigError::KeyTooLong {
                table,
                key: key.clone(),
            });
        }
        if value.is_empty() {
            return Err(RulesConfigError::EmptyValue {
                table,
                key: key.clone(),
            });
        }
        if !is_devanagari_text(value) {
            return Err(RulesConfigError::NonDevanagariValue {
                table,
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}
