//! Source dictionary loading and the anagram indexes derived from it.

pub mod anagram;
pub mod ipa_dict;
pub mod phonetic;

pub use anagram::{group_by_anagram, group_by_anagram_with, AnagramGroups, AnagramSource};
pub use ipa_dict::IpaDict;
pub use phonetic::PhoneticAnagramDict;
