use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::normalize::{clean_str_to_alphanum, normalize_pronunciation, sorted_str};

/// A dictionary headword, reduced to its alphabetic letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Spelling(String);

impl Spelling {
    pub fn new(raw: &str) -> Self {
        Spelling(clean_str_to_alphanum(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Letters in code point order. Only meaningful for anagram comparison.
    pub fn sorted(&self) -> Spelling {
        Spelling::new(&sorted_str(&self.0))
    }

    pub fn is_anagram_of(&self, other: &Spelling) -> bool {
        self.sorted() == other.sorted()
    }
}

impl From<String> for Spelling {
    fn from(raw: String) -> Self {
        Spelling::new(&raw)
    }
}

impl From<Spelling> for String {
    fn from(s: Spelling) -> Self {
        s.0
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An IPA transcription without `/` delimiters, stress marks or punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Pronunciation(String);

impl Pronunciation {
    pub fn new(raw: &str) -> Self {
        Pronunciation(normalize_pronunciation(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Phonetic symbols in code point order; the anagram group key.
    pub fn sorted(&self) -> Pronunciation {
        Pronunciation::new(&sorted_str(&self.0))
    }

    pub fn is_anagram_of(&self, other: &Pronunciation) -> bool {
        self.sorted() == other.sorted()
    }
}

impl From<String> for Pronunciation {
    fn from(raw: String) -> Self {
        Pronunciation::new(&raw)
    }
}

impl From<Pronunciation> for String {
    fn from(p: Pronunciation) -> Self {
        p.0
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One pronunciation variant of one spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PronouncedWord {
    pub spelling: Spelling,
    pub pronunciation: Pronunciation,
}

impl PronouncedWord {
    pub fn new(spelling: Spelling, pronunciation: Pronunciation) -> Self {
        PronouncedWord { spelling, pronunciation }
    }

    /// Graphic anagram: the spellings share a letter multiset.
    pub fn is_anagram_of(&self, other: &PronouncedWord) -> bool {
        self.spelling.is_anagram_of(&other.spelling)
    }

    /// Phonetic anagram: the pronunciations share a symbol multiset.
    pub fn is_phonetic_anagram_of(&self, other: &PronouncedWord) -> bool {
        self.pronunciation.is_anagram_of(&other.pronunciation)
    }

    /// `spelling:pronunciation`, the key used in the JSON reports.
    pub fn composite_key(&self) -> String {
        format!("{}:{}", self.spelling, self.pronunciation)
    }
}

impl fmt::Display for PronouncedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.spelling, self.pronunciation)
    }
}

impl Serialize for PronouncedWord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.composite_key())
    }
}
