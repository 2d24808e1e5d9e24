use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TextError>;
