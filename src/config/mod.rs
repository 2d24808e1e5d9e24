use crate::error::{Result, TextError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub hashtags: HashtagConfig,
    #[serde(default)]
    pub truncate: TruncateConfig,
    #[serde(default)]
    pub color: ColorConfig,
    #[serde(default)]
    pub slug: SlugConfig,
    #[serde(default)]
    pub sanitize: SanitizeConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HashtagConfig {
    /// Minimum length of a search-padded tag, `#` included
    #[serde(default = "default_pad_width")]
    pub pad_width: usize,
    #[serde(default = "default_pad_char")]
    pub pad_char: char,
}

impl Default for HashtagConfig {
    fn default() -> Self {
        Self {
            pad_width: default_pad_width(),
            pad_char: default_pad_char(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TruncateConfig {
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            ellipsis: default_ellipsis(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColorConfig {
    /// Upper bound applied to every generated channel
    #[serde(default = "default_max_channel")]
    pub max_channel: u8,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            max_channel: default_max_channel(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlugConfig {
    /// Inputs that collide with reserved route segments
    #[serde(default = "default_reserved")]
    pub reserved: Vec<String>,
    #[serde(default = "default_reserved_suffix")]
    pub reserved_suffix: String,
    /// Longest slug `validate_slug` accepts. `make_slug` never cuts to it.
    #[serde(default = "default_slug_max_length")]
    pub max_length: usize,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            reserved: default_reserved(),
            reserved_suffix: default_reserved_suffix(),
            max_length: default_slug_max_length(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SanitizeConfig {
    #[serde(default = "default_true")]
    pub strip_tags: bool,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self { strip_tags: true }
    }
}

fn default_pad_width() -> usize {
    6
}

fn default_pad_char() -> char {
    '-'
}

fn default_ellipsis() -> String {
    "...".to_string()
}

fn default_max_channel() -> u8 {
    200
}

fn default_reserved() -> Vec<String> {
    vec!["me".to_string(), "type".to_string()]
}

fn default_reserved_suffix() -> String {
    "_1".to_string()
}

fn default_slug_max_length() -> usize {
    200
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TextError::Config(format!(
                "could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hashtags.pad_width == 0 || self.hashtags.pad_width > 64 {
            return Err(TextError::Config(
                "hashtags.pad_width must be between 1 and 64".to_string(),
            ));
        }
        if self.color.max_channel == 0 {
            return Err(TextError::Config(
                "color.max_channel must be greater than 0".to_string(),
            ));
        }
        if self.slug.reserved_suffix.is_empty() {
            return Err(TextError::Config(
                "slug.reserved_suffix must not be empty".to_string(),
            ));
        }
        if self.slug.max_length == 0 {
            return Err(TextError::Config(
                "slug.max_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
