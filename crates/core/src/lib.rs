//! Chatfile parsing, transcript slide generation, and deck assembly
//! for terminal presentations.

pub mod chatfile;
pub mod deck;
pub mod error;
pub mod markup;
pub mod slides;
pub mod types;

pub use chatfile::{ChatfileParser, LineKind};
pub use deck::{assemble, build_deck, DeckAssembler};
pub use error::{Error, Result};
pub use slides::{SlideBuilder, DEFAULT_MAX_MESSAGES};
pub use types::{Chatfile, Deck, SlideRecord, TranscriptEntry};
