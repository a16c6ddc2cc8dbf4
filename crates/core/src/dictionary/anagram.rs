//! Grouping of arbitrary items by the sorted characters of a string key.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::error::{AnaphoneError, Result};
use crate::normalize::sorted_str;

/// Sorted-character key to the items sharing it, in input order.
pub type AnagramGroups<T> = HashMap<String, Vec<T>>;

/// Items that can be grouped without an explicit key function.
///
/// Returns `None` for values that have no string form.
pub trait AnagramSource {
    fn anagram_source(&self) -> Option<&str>;
}

impl AnagramSource for str {
    fn anagram_source(&self) -> Option<&str> {
        Some(self)
    }
}

impl AnagramSource for String {
    fn anagram_source(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AnagramSource for serde_json::Value {
    fn anagram_source(&self) -> Option<&str> {
        self.as_str()
    }
}

impl<T: AnagramSource + ?Sized> AnagramSource for &T {
    fn anagram_source(&self) -> Option<&str> {
        (**self).anagram_source()
    }
}

/// Group string-like items by their own sorted characters.
///
/// Fails with [`AnaphoneError::NotAString`] on the first item that has no
/// string form; use [`group_by_anagram_with`] to group other types.
pub fn group_by_anagram<T, I>(items: I) -> Result<AnagramGroups<T>>
where
    I: IntoIterator<Item = T>,
    T: AnagramSource + Debug,
{
    let mut groups: AnagramGroups<T> = HashMap::new();
    for item in items {
        let key = match item.anagram_source() {
            Some(s) => sorted_str(s),
            None => return Err(AnaphoneError::NotAString(format!("{:?}", item))),
        };
        groups.entry(key).or_default().push(item);
    }
    Ok(groups)
}

/// Group items by the sorted characters of `key_fn(item)`.
pub fn group_by_anagram_with<T, I, F>(items: I, key_fn: F) -> AnagramGroups<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> &str,
{
    let mut groups: AnagramGroups<T> = HashMap::new();
    for item in items {
        let key = sorted_str(key_fn(&item));
        groups.entry(key).or_default().push(item);
    }
    groups
}
