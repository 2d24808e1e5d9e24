use crate::config::SlugConfig;
use once_cell::sync::Lazy;
use regex::Regex;

// `.net ` keeps its trailing space; existing slugs were generated that way.
static DOMAIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.com|\.org|\.net ").expect("Invalid domain regex pattern"));
static NON_ALNUM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("Invalid slug regex pattern"));

pub fn make_slug(text: &str) -> String {
    make_slug_with(text, &SlugConfig::default())
}

/// Lower-case, underscore-separated identifier safe for URLs.
///
/// Inputs equal to a reserved route segment get the reserved suffix so they can't
/// shadow it. The result is empty when the input has no ASCII letters or digits.
/// Length is not capped here; `config.max_length` only applies in `validate_slug_with`.
pub fn make_slug_with(text: &str, config: &SlugConfig) -> String {
    let mut slug = text.to_string();
    if config.reserved.iter().any(|r| r == text) {
        slug.push_str(&config.reserved_suffix);
    }

    let slug = DOMAIN_REGEX.replace_all(&slug, "");
    let slug: String = slug
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '.'))
        .collect();
    let slug = NON_ALNUM_REGEX.replace_all(&slug, "_");
    let slug = slug.to_lowercase().trim_matches('_').to_string();

    tracing::trace!(input = text, %slug, "generated slug");
    slug
}

pub fn validate_slug(slug: &str) -> bool {
    validate_slug_with(slug, &SlugConfig::default())
}

pub fn validate_slug_with(slug: &str, config: &SlugConfig) -> bool {
    if slug.is_empty() || slug.len() > config.max_length {
        return false;
    }
    if slug.starts_with('_') || slug.ends_with('_') {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
