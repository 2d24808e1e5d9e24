use anyhow::Result;
use std::io::{Read, Write};

use crate::force_utf8;

pub fn run() -> Result<()> {
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    let text = force_utf8(&bytes);
    tracing::info!(bytes_in = bytes.len(), bytes_out = text.len(), "normalized input");
    std::io::stdout().write_all(text.as_bytes())?;
    Ok(())
}
