use serde::{Deserialize, Serialize};
use std::fmt;

/// Avatar background color. Channels never exceed the configured cap (200 by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Minimal-digit hex form: each channel uses one or two digits, no separators.
    pub fn to_hex(&self) -> String {
        format!("{:x}{:x}{:x}", self.r, self.g, self.b)
    }

    /// Zero-padded `#rrggbb` form for stylesheets.
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedColor {
    Rgb(Rgb),
    Hex(String),
}

impl GeneratedColor {
    pub fn as_rgb(&self) -> Option<Rgb> {
        match self {
            GeneratedColor::Rgb(rgb) => Some(*rgb),
            GeneratedColor::Hex(_) => None,
        }
    }

    pub fn as_hex(&self) -> Option<&str> {
        match self {
            GeneratedColor::Hex(hex) => Some(hex),
            GeneratedColor::Rgb(_) => None,
        }
    }
}

impl fmt::Display for GeneratedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedColor::Rgb(rgb) => write!(f, "rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
            GeneratedColor::Hex(hex) => f.write_str(hex),
        }
    }
}
