//! Naming rules shared by the scaffolder and the validator.

use regex::Regex;
use std::sync::LazyLock;

/// Integration ids: lowercase letters, digits, hyphen and underscore.
pub static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").unwrap());

/// Plain `major.minor.patch` version.
pub static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").unwrap());

pub fn is_valid_id(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

pub fn is_valid_version(version: &str) -> bool {
    VERSION_PATTERN.is_match(version)
}

/// Class name for an integration display name.
///
/// Every run of non-alphanumeric characters acts as a word break; each word
/// is capitalized and lowercased after its first character.
pub fn to_pascal_case(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                std::iter::once(first.to_ascii_uppercase())
                    .chain(chars.map(|c| c.to_ascii_lowercase()))
                    .collect()
            })
        })
        .collect()
}

/// Default id derived from a display name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_matches('-').to_string()
}
