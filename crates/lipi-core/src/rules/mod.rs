//! Transliteration rule tables.
//!
//! Four layered lookup tables drive the engine: a whole-word dictionary,
//! consonant clusters, standalone vowels, and dependent vowel signs
//! (matras), plus the halant mark and the punctuation set used by the
//! tokenizer. Tables are loaded from TOML once and shared process-wide as
//! read-only data.

mod config;

pub use config::{RulesConfigError, MAX_CLUSTER_KEY_LEN};

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use config::{parse_rules_toml, RulesConfig};

pub const DEFAULT_RULES_TOML: &str = include_str!("default_rules.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

pub struct RuleSet {
    words: HashMap<String, String>,
    consonants: HashMap<String, String>,
    vowels: HashMap<String, String>,
    matras: HashMap<String, String>,
    halant: String,
    punctuation: HashSet<char>,
    max_scan_len: usize,
}

impl RuleSet {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RulesConfigError> {
        // Validate eagerly
        parse_rules_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RulesConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RuleSet {
        static INSTANCE: OnceLock<RuleSet> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_RULES_TOML);
            let config = parse_rules_toml(toml_str).expect("rules TOML must be valid");
            tracing::debug!(
                words = config.words.len(),
                consonants = config.consonants.len(),
                "initialized transliteration rules"
            );
            RuleSet::from_config(config)
        })
    }

    /// Build a standalone rule set, bypassing the global singleton.
    pub fn from_toml(toml_str: &str) -> Result<Self, RulesConfigError> {
        parse_rules_toml(toml_str).map(RuleSet::from_config)
    }

    fn from_config(config: RulesConfig) -> Self {
        let max_consonant = config.consonants.keys().map(|k| k.len()).max().unwrap_or(0);
        let max_vowel = config.vowels.keys().map(|k| k.len()).max().unwrap_or(0);
        // "a" (the inherent vowel) counts as a 1-char suffix even though it
        // never appears in [matras].
        let max_suffix = config.matras.keys().map(|k| k.len()).max().unwrap_or(0).max(1);
        let max_scan_len = (max_consonant + max_suffix).max(max_vowel);

        RuleSet {
            words: config.words.into_iter().collect(),
            consonants: config.consonants.into_iter().collect(),
            vowels: config.vowels.into_iter().collect(),
            matras: config.matras.into_iter().collect(),
            halant: config.halant,
            punctuation: config.punctuation.chars().collect(),
            max_scan_len,
        }
    }

    pub fn word(&self, key: &str) -> Option<&str> {
        self.words.get(key).map(String::as_str)
    }

    pub fn consonant(&self, key: &str) -> Option<&str> {
        self.consonants.get(key).map(String::as_str)
    }

    pub fn vowel(&self, key: &str) -> Option<&str> {
        self.vowels.get(key).map(String::as_str)
    }

    pub fn matra(&self, key: &str) -> Option<&str> {
        self.matras.get(key).map(String::as_str)
    }

    pub fn halant(&self) -> &str {
        &self.halant
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }

    /// Longest candidate worth probing during decomposition: at least the
    /// longest key present in any cluster table.
    pub fn max_scan_len(&self) -> usize {
        self.max_scan_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_lookup() {
        let rules = RuleSet::global();
        assert_eq!(rules.word("namaste"), Some("नमस्ते"));
        assert_eq!(rules.consonant("chh"), Some("छ"));
        assert_eq!(rules.vowel("ai"), Some("ऐ"));
        assert_eq!(rules.matra("aa"), Some("ा"));
        assert_eq!(rules.matra("a"), None);
        assert_eq!(rules.halant(), "्");
    }

    #[test]
    fn default_punctuation_set() {
        let rules = RuleSet::global();
        for c in ['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '{', '}', '[', ']'] {
            assert!(rules.is_punctuation(c), "missing punctuation: {c}");
        }
        assert!(!rules.is_punctuation('-'));
        assert!(!rules.is_punctuation('a'));
    }

    #[test]
    fn scan_length_covers_longest_cluster() {
        let rules = RuleSet::global();
        // longest consonant "chh" + longest matra "aa"
        assert_eq!(rules.max_scan_len(), 5);
    }

    #[test]
    fn init_custom_rejects_invalid_toml() {
        // Eager validation fails before anything is installed
        let err = RuleSet::init_custom("not valid toml {{{".into()).unwrap_err();
        assert!(matches!(err, RulesConfigError::Parse(_)));
    }

    #[test]
    fn from_toml_is_independent_of_global() {
        let rules = RuleSet::from_toml(
            r#"
halant = "्"
punctuation = "."

[words]
ab = "अब"

[consonants]
b = "ब"

[vowels]
a = "अ"

[matras]
i = "ि"
"#,
        )
        .unwrap();
        assert_eq!(rules.word("ab"), Some("अब"));
        assert_eq!(rules.word("namaste"), None);
        assert_eq!(rules.max_scan_len(), 2);
    }
}
