//! Domain types for transcripts, slides, and decks.

use serde::{Deserialize, Serialize};

/// One `speaker: message` line from a Chatfile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Who said it. Never empty, never padded, never contains a colon.
    pub speaker: String,

    /// What was said, trimmed. Always a single line.
    pub message: String,
}

impl TranscriptEntry {
    /// Create a new entry.
    pub fn new(speaker: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            message: message.into(),
        }
    }
}

/// A parsed Chatfile: free-form header followed by the transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chatfile {
    /// Lines preceding the first message, verbatim (blank lines included).
    pub header: Vec<String>,

    /// Messages in document order.
    pub entries: Vec<TranscriptEntry>,

    /// Non-message lines seen after the first message. These are dropped.
    pub skipped_lines: usize,
}

impl Chatfile {
    /// The header joined back into a single block of text.
    pub fn header_text(&self) -> String {
        self.header.join("\n")
    }

    /// Whether the document contained any message lines.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One screen of content. Each block is inline markup, styled independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Large illustration or main content, shown first.
    pub art: String,

    /// Heading shown below the art.
    pub title: String,

    /// Trailing text, usually a navigation hint.
    pub body: String,
}

impl SlideRecord {
    /// Create a new slide from its three blocks.
    pub fn new(art: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            art: art.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// The three blocks composed into the markup of a full screen.
    pub fn compose(&self) -> String {
        format!("{}\n\n{}\n{}", self.art, self.title, self.body)
    }
}

/// An ordered sequence of slides, fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Slides in presentation order.
    pub slides: Vec<SlideRecord>,
}

impl Deck {
    /// Create a deck from slides in presentation order.
    pub fn new(slides: Vec<SlideRecord>) -> Self {
        Self { slides }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&SlideRecord> {
        self.slides.get(index)
    }

    /// Iterate over slides in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlideRecord> {
        self.slides.iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a SlideRecord;
    type IntoIter = std::slice::Iter<'a, SlideRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
