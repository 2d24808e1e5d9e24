use anyhow::Result;

use crate::services::slug::make_slug_with;
use crate::Config;

pub fn run(config: &Config, text: Option<String>) -> Result<()> {
    let text = super::read_input(text)?;
    println!("{}", make_slug_with(&text, &config.slug));
    Ok(())
}
