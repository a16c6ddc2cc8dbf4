//! Anaphone discovery over IPA pronunciation dictionaries.
//!
//! Groups dictionary words whose normalized phonetic transcriptions are
//! anagrams of each other and renders the groups as JSON reports.

pub mod dictionary;
pub mod error;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod types;

pub use error::AnaphoneError;
pub use types::{PronouncedWord, Pronunciation, Spelling};
