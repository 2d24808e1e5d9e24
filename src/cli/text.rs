use anyhow::Result;

use crate::{Config, TextValue};

pub fn sanitize(config: &Config, text: Option<String>, keep_tags: bool) -> Result<()> {
    let mut value = TextValue::new(super::read_input(text)?);
    value.sanitize(config.sanitize.strip_tags && !keep_tags);
    println!("{}", value);
    Ok(())
}

pub fn truncate(config: &Config, text: Option<String>, length: i64) -> Result<()> {
    let mut value = TextValue::new(super::read_input(text)?);
    value.truncate_with(length, &config.truncate);
    println!("{}", value);
    Ok(())
}

pub fn strip_whitespace(text: Option<String>) -> Result<()> {
    let mut value = TextValue::new(super::read_input(text)?);
    value.remove_whitespace();
    println!("{}", value);
    Ok(())
}
