//! Error types for deck loading and Chatfile reading.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading slide content.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read an input file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// A deck file is not valid TOML or does not match the slide layout.
    #[error("Deck parsing error: {0}")]
    DeckParseError(String),

    /// A deck file was parsed but contains no slides.
    #[error("Deck contains no slides")]
    EmptyDeck,
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::DeckParseError(err.to_string())
    }
}
