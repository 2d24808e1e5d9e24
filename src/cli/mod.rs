pub mod color;
pub mod encoding;
pub mod hashtags;
pub mod slug;
pub mod text;

use crate::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pebble-text")]
#[command(version)]
#[command(about = "Text helpers used by the Pebble content layer", long_about = None)]
pub struct Cli {
    #[arg(short, long, env = "PEBBLE_TEXT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the slug for the input text
    Slug {
        text: Option<String>,
    },
    /// Print the avatar color derived from the input text
    Color {
        text: Option<String>,
        #[arg(long)]
        hex: bool,
        /// Print a CSS `#rrggbb` value instead
        #[arg(long, conflicts_with = "hex")]
        css: bool,
    },
    /// List hashtags found in the input text, one per line
    Hashtags {
        text: Option<String>,
        #[arg(long)]
        pad: bool,
        #[arg(long)]
        unique: bool,
    },
    /// Escape the input text for HTML output
    Sanitize {
        text: Option<String>,
        #[arg(long)]
        keep_tags: bool,
    },
    /// Decode entities and cut the input to a number of characters
    Truncate {
        #[arg(allow_negative_numbers = true)]
        length: i64,
        text: Option<String>,
    },
    /// Remove spaces and control characters
    StripWhitespace {
        text: Option<String>,
    },
    /// Re-encode stdin as UTF-8
    ForceUtf8,
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => Ok(Config::default()),
    }
}

/// The positional argument, or all of stdin when it is absent.
pub fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            let text = crate::force_utf8(&bytes);
            Ok(text.strip_suffix('\n').map(String::from).unwrap_or(text))
        }
    }
}
