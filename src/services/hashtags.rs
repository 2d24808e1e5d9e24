use crate::config::HashtagConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static HASHTAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[A-Za-z0-9]+").expect("Invalid hashtag regex pattern"));

/// Every `#tag` in `text`, lower-cased, in order of appearance. Duplicates are kept.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

/// Like [`extract_hashtags`] but keeps only the first occurrence of each tag.
pub fn unique_hashtags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    extract_hashtags(text)
        .into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

/// Right-pad a tag so the full-text indexer never sees a token below its minimum length.
pub fn pad_for_search(tag: &str, config: &HashtagConfig) -> String {
    let len = tag.chars().count();
    if len >= config.pad_width {
        return tag.to_string();
    }
    let mut padded = String::with_capacity(tag.len() + config.pad_width - len);
    padded.push_str(tag);
    padded.extend(std::iter::repeat(config.pad_char).take(config.pad_width - len));
    padded
}
