//! Index from sorted pronunciation to every word pronounced with those symbols.

use std::collections::HashMap;

use crate::dictionary::anagram::group_by_anagram_with;
use crate::dictionary::ipa_dict::IpaDict;
use crate::error::{AnaphoneError, Result};
use crate::types::{PronouncedWord, Pronunciation};

/// Phonetic anagram groups keyed by sorted pronunciation.
///
/// Lookups accept any pronunciation and sort it before querying, so a word
/// always finds the group it belongs to, itself included.
#[derive(Debug, Clone, Default)]
pub struct PhoneticAnagramDict {
    groups: HashMap<Pronunciation, Vec<PronouncedWord>>,
}

impl PhoneticAnagramDict {
    pub fn from_ipa_dict(dict: &IpaDict) -> Self {
        let grouped = group_by_anagram_with(dict.flatten(), |w: &PronouncedWord| {
            w.pronunciation.as_str()
        });
        let groups = grouped
            .into_iter()
            .map(|(key, words)| (Pronunciation::new(&key), words))
            .collect();
        PhoneticAnagramDict { groups }
    }

    /// All words whose pronunciation is an anagram of `pronunciation`.
    pub fn get(&self, pronunciation: &Pronunciation) -> Result<&[PronouncedWord]> {
        let key = pronunciation.sorted();
        self.groups
            .get(&key)
            .map(Vec::as_slice)
            .ok_or_else(|| AnaphoneError::NoAnagramGroup(pronunciation.to_string()))
    }

    /// Like [`get`](Self::get), normalizing a raw transcription first.
    pub fn get_str(&self, raw: &str) -> Result<&[PronouncedWord]> {
        self.get(&Pronunciation::new(raw))
    }

    pub fn contains(&self, pronunciation: &Pronunciation) -> bool {
        self.groups.contains_key(&pronunciation.sorted())
    }

    /// Number of distinct sorted pronunciations.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&Pronunciation, &[PronouncedWord])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }
}
