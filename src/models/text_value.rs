use crate::config::{ColorConfig, HashtagConfig, TruncateConfig};
use crate::models::GeneratedColor;
use crate::services::{color, encoding, hashtags, html, whitespace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single piece of user text plus the transforms the content layer runs over it.
///
/// `sanitize`, `truncate` and `remove_whitespace` rewrite the value in place and can be
/// chained in any order; `extract_hashtags` and `generate_color` only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextValue {
    val: String,
}

impl TextValue {
    pub fn new(val: impl Into<String>) -> Self {
        Self { val: val.into() }
    }

    /// Build from bytes of unknown encoding, repairing them to UTF-8 first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            val: encoding::force_utf8(bytes),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.val
    }

    pub fn into_inner(self) -> String {
        self.val
    }

    pub fn extract_hashtags(&self, pad_for_search: bool) -> Vec<String> {
        self.extract_hashtags_with(pad_for_search, &HashtagConfig::default())
    }

    pub fn extract_hashtags_with(
        &self,
        pad_for_search: bool,
        config: &HashtagConfig,
    ) -> Vec<String> {
        let tags = hashtags::extract_hashtags(&self.val);
        if pad_for_search {
            tags.into_iter()
                .map(|tag| hashtags::pad_for_search(&tag, config))
                .collect()
        } else {
            tags
        }
    }

    /// Escape the value for HTML output. Numeric values are left untouched.
    pub fn sanitize(&mut self, strip_tags: bool) {
        if html::is_numeric(&self.val) {
            return;
        }
        self.val = if strip_tags {
            html::encode_special_chars(&html::strip_tags(&self.val))
        } else {
            html::encode_all_entities(&self.val)
        };
    }

    pub fn truncate(&mut self, length: i64) {
        self.truncate_with(length, &TruncateConfig::default());
    }

    /// Decode entities, then cut to `length` characters plus the ellipsis.
    ///
    /// Decoding happens even when nothing is cut. A zero or negative length leaves only
    /// the ellipsis.
    pub fn truncate_with(&mut self, length: i64, config: &TruncateConfig) {
        let decoded = html::decode_entities(&self.val);
        let count = i64::try_from(decoded.chars().count()).unwrap_or(i64::MAX);

        self.val = if count > length {
            let limit = usize::try_from(length).unwrap_or(0);
            let mut cut: String = decoded.chars().take(limit).collect();
            cut.push_str(&config.ellipsis);
            cut
        } else {
            decoded
        };
    }

    pub fn remove_whitespace(&mut self) {
        self.val = whitespace::remove_whitespace(&self.val);
    }

    pub fn generate_color(&self, as_hex: bool) -> GeneratedColor {
        self.generate_color_with(as_hex, &ColorConfig::default())
    }

    pub fn generate_color_with(&self, as_hex: bool, config: &ColorConfig) -> GeneratedColor {
        let rgb = color::color_from_text(&self.val, config);
        if as_hex {
            GeneratedColor::Hex(rgb.to_hex())
        } else {
            GeneratedColor::Rgb(rgb)
        }
    }
}

impl fmt::Display for TextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.val)
    }
}

impl AsRef<str> for TextValue {
    fn as_ref(&self) -> &str {
        &self.val
    }
}

impl From<String> for TextValue {
    fn from(val: String) -> Self {
        Self::new(val)
    }
}

impl From<&str> for TextValue {
    fn from(val: &str) -> Self {
        Self::new(val)
    }
}

impl From<&[u8]> for TextValue {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for TextValue {
    fn from(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(val) => Self::new(val),
            Err(e) => Self::from_bytes(e.as_bytes()),
        }
    }
}

/// Legacy scripting convention: `true` renders as `"1"`, `false` as the empty string.
impl From<bool> for TextValue {
    fn from(b: bool) -> Self {
        Self::new(if b { "1" } else { "" })
    }
}

impl<T: Into<TextValue>> From<Option<T>> for TextValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

macro_rules! text_value_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TextValue {
                fn from(n: $t) -> Self {
                    Self::new(n.to_string())
                }
            }
        )*
    };
}

text_value_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerces_numbers_and_bools() {
        assert_eq!(TextValue::from(42).as_str(), "42");
        assert_eq!(TextValue::from(-7i64).as_str(), "-7");
        assert_eq!(TextValue::from(1.5).as_str(), "1.5");
        assert_eq!(TextValue::from(true).as_str(), "1");
        assert_eq!(TextValue::from(false).as_str(), "");
        assert_eq!(TextValue::from(None::<&str>).as_str(), "");
        assert_eq!(TextValue::from(Some("x")).as_str(), "x");
    }

    #[test]
    fn test_invalid_bytes_are_repaired() {
        let value = TextValue::from(vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(value.as_str(), "café");
    }

    #[test]
    fn test_truncate_zero_length() {
        let mut value = TextValue::new("hello");
        value.truncate(0);
        assert_eq!(value.as_str(), "...");

        let mut value = TextValue::new("hello");
        value.truncate(-3);
        assert_eq!(value.as_str(), "...");
    }

    #[test]
    fn test_truncate_empty_value() {
        let mut value = TextValue::new("");
        value.truncate(0);
        assert_eq!(value.as_str(), "");

        let mut value = TextValue::new("");
        value.truncate(-1);
        assert_eq!(value.as_str(), "...");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let mut value = TextValue::new("héllo wörld");
        value.truncate(4);
        assert_eq!(value.as_str(), "héll...");
    }

    #[test]
    fn test_truncate_exact_length_untouched() {
        let mut value = TextValue::new("hello");
        value.truncate(5);
        assert_eq!(value.as_str(), "hello");
    }

    #[test]
    fn test_truncate_custom_ellipsis() {
        let mut value = TextValue::new("hello world");
        let config = TruncateConfig {
            ellipsis: "…".to_string(),
        };
        value.truncate_with(5, &config);
        assert_eq!(value.as_str(), "hello…");
    }

    #[test]
    fn test_sanitize_keep_tags_escapes_markup() {
        let mut value = TextValue::new("<em>café</em>");
        value.sanitize(false);
        assert_eq!(value.as_str(), "&lt;em&gt;caf&eacute;&lt;/em&gt;");
    }

    #[test]
    fn test_serde_is_transparent() {
        let value = TextValue::new("hi");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"hi\"");
        let back: TextValue = serde_json::from_str("\"yo\"").unwrap();
        assert_eq!(back.as_str(), "yo");
    }
}
