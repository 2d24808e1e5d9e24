use anyhow::Result;

use crate::{Config, GeneratedColor, TextValue};

pub fn run(config: &Config, text: Option<String>, hex: bool, css: bool) -> Result<()> {
    let value = TextValue::new(super::read_input(text)?);
    match value.generate_color_with(hex, &config.color) {
        GeneratedColor::Hex(hex) => println!("{}", hex),
        GeneratedColor::Rgb(rgb) if css => println!("{}", rgb.to_css()),
        color @ GeneratedColor::Rgb(_) => println!("{}", serde_json::to_string(&color)?),
    }
    Ok(())
}
