use anyhow::Result;

use crate::services::hashtags::{pad_for_search, unique_hashtags};
use crate::{Config, TextValue};

pub fn run(config: &Config, text: Option<String>, pad: bool, unique: bool) -> Result<()> {
    let text = super::read_input(text)?;
    let tags = if unique {
        let tags = unique_hashtags(&text);
        if pad {
            tags.iter()
                .map(|tag| pad_for_search(tag, &config.hashtags))
                .collect()
        } else {
            tags
        }
    } else {
        TextValue::new(text).extract_hashtags_with(pad, &config.hashtags)
    };
    for tag in tags {
        println!("{}", tag);
    }
    Ok(())
}
