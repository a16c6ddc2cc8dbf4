//! Spelling to pronunciation-variant mapping loaded from ipa-dict JSON.
//!
//! The input document looks like
//! `{"en_US": [{"acre": "/ˈeɪkɚ/, /ˈeɪkəɹ/", ...}]}`: one single-element
//! array per language, holding an object of spelling to comma-space
//! separated IPA variants.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{AnaphoneError, Result};
use crate::types::{PronouncedWord, Pronunciation, Spelling};

/// Separator between pronunciation variants of one spelling.
pub const VARIANT_DELIMITER: &str = ", ";

/// Normalized spellings and their distinct normalized pronunciations.
///
/// Iterates in spelling order; variants keep their first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IpaDict {
    entries: BTreeMap<Spelling, Vec<Pronunciation>>,
}

impl IpaDict {
    /// Load the `language` section of an ipa-dict JSON file.
    pub fn from_file(path: &Path, language: &str) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), language)
    }

    pub fn from_reader<R: Read>(reader: R, language: &str) -> Result<Self> {
        let doc: Value = serde_json::from_reader(reader)?;
        Self::from_json(&doc, language)
    }

    pub fn from_json(doc: &Value, language: &str) -> Result<Self> {
        let format_err = |reason: &str| AnaphoneError::Format {
            language: language.to_string(),
            reason: reason.to_string(),
        };

        let languages = doc
            .as_object()
            .ok_or_else(|| format_err("top level is not an object"))?;
        let section = languages
            .get(language)
            .ok_or_else(|| AnaphoneError::LanguageNotFound(language.to_string()))?;
        let words = match section.as_array().map(Vec::as_slice) {
            Some([Value::Object(words)]) => words,
            Some(_) => return Err(format_err("expected exactly one object in the language array")),
            None => return Err(format_err("language value is not an array")),
        };

        Self::from_object(words, language)
    }

    fn from_object(words: &Map<String, Value>, language: &str) -> Result<Self> {
        let mut pairs = Vec::with_capacity(words.len());
        for (spelling, variants) in words {
            let variants = variants.as_str().ok_or_else(|| AnaphoneError::Format {
                language: language.to_string(),
                reason: format!("pronunciation of {:?} is not a string", spelling),
            })?;
            pairs.push((spelling.as_str(), variants));
        }
        Ok(Self::from_entries(pairs))
    }

    /// Build from raw `(spelling, "variant, variant")` pairs.
    ///
    /// When several raw spellings normalize to the same value, the last
    /// one's variants replace the earlier ones.
    pub fn from_entries<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut entries: BTreeMap<Spelling, Vec<Pronunciation>> = BTreeMap::new();
        for (raw_spelling, raw_variants) in pairs {
            let spelling = Spelling::new(raw_spelling);
            let mut pronunciations: Vec<Pronunciation> = Vec::new();
            for variant in raw_variants.split(VARIANT_DELIMITER) {
                let p = Pronunciation::new(variant);
                if !pronunciations.contains(&p) {
                    pronunciations.push(p);
                }
            }
            if let Some(previous) = entries.insert(spelling, pronunciations) {
                log::debug!(
                    "{:?} replaces {} earlier variant(s) of the same spelling",
                    raw_spelling,
                    previous.len()
                );
            }
        }
        IpaDict { entries }
    }

    pub fn get(&self, spelling: &Spelling) -> Option<&[Pronunciation]> {
        self.entries.get(spelling).map(Vec::as_slice)
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of (spelling, pronunciation) pairs.
    pub fn word_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Every (spelling, pronunciation) pair, spelling-major.
    ///
    /// Recomputed from the held mapping on each call.
    pub fn flatten(&self) -> impl Iterator<Item = PronouncedWord> + '_ {
        self.entries.iter().flat_map(|(spelling, pronunciations)| {
            pronunciations
                .iter()
                .map(move |p| PronouncedWord::new(spelling.clone(), p.clone()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_collapses_variants() {
        let doc = json!({"en_US": [{"race": "/ɹeɪs/", "acre": "/ˈeɪkəɹ/, /eɪkəɹ/"}]});
        let dict = IpaDict::from_json(&doc, "en_US").unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.word_count(), 2);
        assert_eq!(
            dict.get(&Spelling::new("acre")).unwrap(),
            &[Pronunciation::new("eɪkəɹ")]
        );
    }

    #[test]
    fn test_variants_keep_first_seen_order() {
        let dict = IpaDict::from_entries([("either", "/ˈaɪðɚ/, /ˈiðɚ/, /aɪðɚ/")]);
        let ps: Vec<&str> = dict
            .get(&Spelling::new("either"))
            .unwrap()
            .iter()
            .map(Pronunciation::as_str)
            .collect();
        assert_eq!(ps, vec!["aɪðɚ", "iðɚ"]);
    }

    #[test]
    fn test_colliding_spellings_last_wins() {
        let dict = IpaDict::from_entries([("co-op", "/ˈkoʊɑp/"), ("coop", "/kup/")]);
        assert_eq!(dict.len(), 1);
        let keys: Vec<String> = dict.flatten().map(|w| w.composite_key()).collect();
        assert_eq!(keys, vec!["coop:kup"]);

        let dict = IpaDict::from_entries([("coop", "/kup/"), ("co-op", "/ˈkoʊɑp/")]);
        let keys: Vec<String> = dict.flatten().map(|w| w.composite_key()).collect();
        assert_eq!(keys, vec!["coop:koʊɑp"]);
    }

    #[test]
    fn test_collision_follows_document_order() {
        let doc: Value = serde_json::from_str(r#"{"en_US": [{"coop": "/kup/", "co-op": "/ˈkoʊɑp/"}]}"#).unwrap();
        let dict = IpaDict::from_json(&doc, "en_US").unwrap();
        let keys: Vec<String> = dict.flatten().map(|w| w.composite_key()).collect();
        assert_eq!(keys, vec!["coop:koʊɑp"]);
    }

    #[test]
    fn test_missing_language() {
        let doc = json!({"en_US": [{}]});
        let err = IpaDict::from_json(&doc, "fr_FR").unwrap_err();
        assert!(matches!(err, AnaphoneError::LanguageNotFound(ref l) if l == "fr_FR"));
    }

    #[test]
    fn test_bad_shapes_are_format_errors() {
        let bad = [
            json!({"en_US": {"a": "/eɪ/"}}),
            json!({"en_US": []}),
            json!({"en_US": [{"a": "/eɪ/"}, {"b": "/bi/"}]}),
            json!({"en_US": ["a"]}),
            json!({"en_US": [{"a": 1}]}),
            json!(["en_US"]),
        ];
        for doc in bad {
            let err = IpaDict::from_json(&doc, "en_US").unwrap_err();
            assert!(matches!(err, AnaphoneError::Format { .. }), "{}", doc);
        }
    }

    #[test]
    fn test_from_reader_invalid_json() {
        let err = IpaDict::from_reader("{not json".as_bytes(), "en_US").unwrap_err();
        assert!(matches!(err, AnaphoneError::Json(_)));
    }

    #[test]
    fn test_flatten_order_and_restartable() {
        let dict = IpaDict::from_entries([("b", "/bi/"), ("a", "/eɪ/, /ə/")]);
        let keys: Vec<String> = dict.flatten().map(|w| w.composite_key()).collect();
        assert_eq!(keys, vec!["a:eɪ", "a:ə", "b:bi"]);
        assert_eq!(dict.flatten().count(), 3);
    }

    #[test]
    fn test_empty_spelling_is_kept() {
        let dict = IpaDict::from_entries([("'", "/ˈ/"), ("-", "//")]);
        assert_eq!(dict.len(), 1);
        let words: Vec<PronouncedWord> = dict.flatten().collect();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].composite_key(), ":");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ipa-dict-en_US.json");
        std::fs::write(&path, r#"{"en_US": [{"cat": "/kæt/"}]}"#).unwrap();
        let dict = IpaDict::from_file(&path, "en_US").unwrap();
        assert_eq!(dict.word_count(), 1);

        let err = IpaDict::from_file(&dir.path().join("missing.json"), "en_US").unwrap_err();
        assert!(matches!(err, AnaphoneError::Io(_)));
    }
}
