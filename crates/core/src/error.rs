//! Error type for dictionary loading and anagram lookup.

/// Failures raised while loading a pronunciation dictionary or querying
/// the anagram index built from it.
#[derive(Debug, thiserror::Error)]
pub enum AnaphoneError {
    /// Input JSON does not have the expected per-language shape.
    #[error("Malformed dictionary for language {language:?}: {reason}")]
    Format { language: String, reason: String },
    /// Requested language is not a key of the input document.
    #[error("Language {0:?} not found in dictionary")]
    LanguageNotFound(String),
    /// No anagram group exists for the sorted form of a pronunciation.
    #[error("No phonetic anagram group for pronunciation {0:?}")]
    NoAnagramGroup(String),
    /// Key-less grouping was asked to group an item with no string form.
    #[error("Cannot group item without a key function: {0} is not a string")]
    NotAString(String),
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnaphoneError>;
