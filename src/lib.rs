pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{Result, TextError};
pub use models::{GeneratedColor, RawValue, Rgb, TextValue};
pub use services::encoding::{force_utf8, force_utf8_map};
pub use services::slug::make_slug;
