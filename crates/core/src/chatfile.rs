//! Chatfile parsing.
//!
//! A Chatfile is a plain text document: a free-form header, then one
//! `speaker: message` line per message. Lines are classified one at a time:
//!
//! - A message line has a colon-free speaker, a colon, and a non-blank message.
//!   It must not start with `=`, `-`, a space, or a tab (rules, underlines and
//!   indented prose often contain colons).
//! - Only the first colon splits, so messages may contain colons.
//! - Anything else is header while no message has been seen, and is dropped
//!   afterwards.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::{Chatfile, Result, TranscriptEntry};

/// Regex for a `speaker: message` line. The message must contain a
/// non-whitespace character.
static MESSAGE_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+):\s*(\S.*)$").unwrap());

/// Line prefixes that disqualify a line from being a message.
const EXCLUDED_PREFIXES: &[char] = &['=', '-', ' ', '\t'];

/// The explanatory sentence every Chatfile opens with. It contains a colon
/// but belongs to the header.
pub const BRIDGE_SENTINEL: &str = "This file is a communication bridge between";

/// Classification of a single Chatfile line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A `speaker: message` line.
    Message(TranscriptEntry),
    /// A message-shaped line whose speaker is a header sentinel.
    Sentinel,
    /// Anything else.
    Text,
}

/// Parser for the Chatfile transcript format.
#[derive(Debug, Clone)]
pub struct ChatfileParser {
    /// Speakers that mark a header line rather than a message.
    sentinels: Vec<String>,
}

impl Default for ChatfileParser {
    fn default() -> Self {
        Self {
            sentinels: vec![BRIDGE_SENTINEL.to_string()],
        }
    }
}

impl ChatfileParser {
    /// Create a parser that knows the standard bridge sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add another speaker phrase to treat as header text.
    pub fn with_header_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinels.push(sentinel.into());
        self
    }

    /// Classify one line of a Chatfile.
    pub fn classify(&self, line: &str) -> LineKind {
        if line.starts_with(EXCLUDED_PREFIXES) {
            return LineKind::Text;
        }

        let Some(caps) = MESSAGE_LINE_REGEX.captures(line) else {
            return LineKind::Text;
        };

        let speaker = caps[1].trim();
        let message = caps[2].trim();
        if speaker.is_empty() || message.is_empty() {
            return LineKind::Text;
        }

        if self.sentinels.iter().any(|s| s == speaker) {
            return LineKind::Sentinel;
        }

        LineKind::Message(TranscriptEntry::new(speaker, message))
    }

    /// Parse a Chatfile document into its header and transcript.
    pub fn parse(&self, content: &str) -> Chatfile {
        let mut chatfile = Chatfile::default();

        for line in content.trim().lines() {
            match self.classify(line) {
                LineKind::Message(entry) => chatfile.entries.push(entry),
                LineKind::Sentinel => chatfile.header.push(line.to_string()),
                LineKind::Text if chatfile.entries.is_empty() => {
                    chatfile.header.push(line.to_string());
                }
                LineKind::Text => chatfile.skipped_lines += 1,
            }
        }

        log::debug!(
            "Parsed Chatfile: {} header lines, {} messages, {} skipped",
            chatfile.header.len(),
            chatfile.entries.len(),
            chatfile.skipped_lines
        );

        chatfile
    }

    /// Read a Chatfile from disk and parse it.
    pub fn parse_file(&self, path: &Path) -> Result<Chatfile> {
        let content = std::fs::read_to_string(path)?;
        Ok(self.parse(&content))
    }
}
