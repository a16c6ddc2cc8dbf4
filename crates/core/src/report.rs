//! The three anaphone reports, from raw groups to nontrivial ones.

use std::collections::{BTreeMap, HashSet};

use crate::dictionary::{IpaDict, PhoneticAnagramDict};
use crate::error::Result;
use crate::types::{PronouncedWord, Pronunciation};

pub const ALL_FILENAME: &str = "anaphones.json";
pub const UNIQUE_PRONUNCIATION_FILENAME: &str = "anaphones_unique_pronunciation.json";
pub const NONTRIVIAL_UNIQUE_PRONUNCIATION_FILENAME: &str =
    "anaphones_nontrivial_unique_pronunciation.json";

/// Separator between composite keys in a report value.
const JOIN_SEPARATOR: &str = ", ";

/// Composite word key to the joined composite keys of its anagram group.
pub type Report = BTreeMap<String, String>;

#[derive(Debug, Clone, Default)]
pub struct AnaphoneReports {
    /// Every group member, exact pronunciation duplicates included.
    pub all: Report,
    /// First word per distinct pronunciation.
    pub unique_pronunciation: Report,
    /// `unique_pronunciation` minus entries where the word stands alone.
    pub nontrivial_unique_pronunciation: Report,
}

impl AnaphoneReports {
    /// Reports paired with the file each is written to.
    pub fn files(&self) -> [(&'static str, &Report); 3] {
        [
            (ALL_FILENAME, &self.all),
            (UNIQUE_PRONUNCIATION_FILENAME, &self.unique_pronunciation),
            (
                NONTRIVIAL_UNIQUE_PRONUNCIATION_FILENAME,
                &self.nontrivial_unique_pronunciation,
            ),
        ]
    }
}

/// Keep the first word seen for each distinct pronunciation.
pub fn deduplicate_pronunciations<'a, I>(words: I) -> Vec<&'a PronouncedWord>
where
    I: IntoIterator<Item = &'a PronouncedWord>,
{
    let mut seen: HashSet<&Pronunciation> = HashSet::new();
    let mut unique = Vec::new();
    for word in words {
        if seen.insert(&word.pronunciation) {
            unique.push(word);
        }
    }
    unique
}

fn join_keys<'a>(words: impl IntoIterator<Item = &'a PronouncedWord>) -> String {
    words
        .into_iter()
        .map(PronouncedWord::composite_key)
        .collect::<Vec<_>>()
        .join(JOIN_SEPARATOR)
}

/// Build all three reports for every word of `dict`.
///
/// `index` must have been built from `dict`; a word without a group is an
/// error.
pub fn generate(dict: &IpaDict, index: &PhoneticAnagramDict) -> Result<AnaphoneReports> {
    let mut reports = AnaphoneReports::default();

    for word in dict.flatten() {
        let group = index.get(&word.pronunciation)?;
        let key = word.composite_key();

        reports.all.insert(key.clone(), join_keys(group));

        let unique = deduplicate_pronunciations(group);
        let joined = join_keys(unique.iter().copied());
        if unique.len() > 1 {
            reports
                .nontrivial_unique_pronunciation
                .insert(key.clone(), joined.clone());
        }
        reports.unique_pronunciation.insert(key, joined);
    }

    log::info!(
        "Reports: {} words, {} with nontrivial anaphones",
        reports.all.len(),
        reports.nontrivial_unique_pronunciation.len()
    );
    Ok(reports)
}
