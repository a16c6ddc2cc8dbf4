//! Canonicalization of raw spellings and IPA transcriptions.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Characters dropped even when Unicode classifies them as letters.
///
/// The IPA stress marks are modifier letters and would otherwise survive.
const EXCLUDED: &[char] = &['ˈ', 'ˌ', '.', '-', '"', '\''];

/// True for general category L (Lu, Ll, Lt, Lm, Lo).
///
/// Narrower than `char::is_alphabetic`: combining vowel signs and letter
/// numbers such as `Ⅳ` are not letters here.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Keep only letters, minus stress marks and punctuation.
///
/// Non-ASCII letters (accented Latin, IPA symbols such as `ɪ` or `ʃ`) are
/// retained. The result may be empty.
pub fn clean_str_to_alphanum(s: &str) -> String {
    s.chars()
        .filter(|c| is_letter(*c) && !EXCLUDED.contains(c))
        .collect()
}

/// Strip surrounding `/.../` delimiters, then clean like a spelling.
pub fn normalize_pronunciation(s: &str) -> String {
    clean_str_to_alphanum(s.trim_matches('/'))
}

/// Sort the characters of `s` by code point.
pub fn sorted_str(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
