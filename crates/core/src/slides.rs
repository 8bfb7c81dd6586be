//! Transcript slide generation.
//!
//! Turns a Chatfile into a "reveal one more message" sequence: slide `i`
//! shows the header and messages `0..=i`, with the newest message
//! highlighted and the older ones dimmed and shortened.

use crate::markup::escape;
use crate::{Chatfile, SlideRecord, TranscriptEntry};

/// Default number of messages turned into slides.
pub const DEFAULT_MAX_MESSAGES: usize = 6;

/// Older messages are cut to this many characters.
pub const PREVIEW_CHARS: usize = 50;

/// Title shown on every transcript slide.
pub const DEFAULT_TITLE: &str = "[bold cyan]v0/Chatfile[/]";

const TAGLINE: &str = "[dim italic]Simple. Dumb. Works.[/]";
const CONTINUE_HINT: &str = "[dim]⏎  ENTER to continue[/]";

/// Builder for transcript slides.
#[derive(Debug, Clone)]
pub struct SlideBuilder {
    /// Maximum number of messages (and therefore slides).
    max_messages: usize,

    /// Title markup for every generated slide.
    title: String,
}

impl Default for SlideBuilder {
    fn default() -> Self {
        Self {
            max_messages: DEFAULT_MAX_MESSAGES,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl SlideBuilder {
    /// Create a builder with the default message limit and title.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit how many messages are revealed. Zero disables generation.
    pub fn with_max_messages(mut self, max_messages: usize) -> Self {
        self.max_messages = max_messages;
        self
    }

    /// Replace the title markup.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The accumulated prefixes revealed one slide at a time.
    ///
    /// Prefix `i` holds entries `0..=i`; there are at most `max_messages`.
    pub fn reveal_steps<'a>(
        &self,
        entries: &'a [TranscriptEntry],
    ) -> impl Iterator<Item = &'a [TranscriptEntry]> {
        let shown = entries.len().min(self.max_messages);
        (1..=shown).map(move |n| &entries[..n])
    }

    /// Build one slide per revealed message.
    pub fn build(&self, header: &[String], entries: &[TranscriptEntry]) -> Vec<SlideRecord> {
        let header = header.join("\n");
        let total = entries.len().min(self.max_messages);

        let slides: Vec<SlideRecord> = self
            .reveal_steps(entries)
            .map(|revealed| {
                let is_last = revealed.len() == total;
                SlideRecord::new(
                    render_art(&header, revealed),
                    self.title.clone(),
                    render_body(is_last),
                )
            })
            .collect();

        log::debug!(
            "Built {} transcript slides from {} messages (limit {})",
            slides.len(),
            entries.len(),
            self.max_messages
        );

        slides
    }

    /// Build slides from a parsed Chatfile.
    pub fn build_from(&self, chatfile: &Chatfile) -> Vec<SlideRecord> {
        self.build(&chatfile.header, &chatfile.entries)
    }
}

/// Header (dimmed), older messages (dimmed, shortened), newest (highlighted).
fn render_art(header: &str, revealed: &[TranscriptEntry]) -> String {
    let mut art = format!("[dim cyan]{}[/]\n", escape(header));

    if let Some((current, earlier)) = revealed.split_last() {
        for entry in earlier {
            art.push_str(&format!(
                "\n[dim white]{}: {}[/]",
                escape(&entry.speaker),
                escape(&shorten(&entry.message))
            ));
        }
        art.push_str(&format!(
            "\n[bold cyan]{}:[/] [white]{}[/]",
            escape(&current.speaker),
            escape(&current.message)
        ));
    }

    art
}

fn render_body(is_last: bool) -> String {
    if is_last {
        format!("\n{TAGLINE}\n\n{CONTINUE_HINT}")
    } else {
        format!("\n\n{CONTINUE_HINT}")
    }
}

/// Cut a message to [`PREVIEW_CHARS`] characters, marking the cut with `...`.
pub fn shorten(message: &str) -> String {
    match message.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::strip;

    fn transcript() -> Vec<TranscriptEntry> {
        vec![
            TranscriptEntry::new("Claude", "hello"),
            TranscriptEntry::new("Claude", "how are you"),
            TranscriptEntry::new("Main", "fine"),
        ]
    }

    fn header() -> Vec<String> {
        vec!["This file is a communication bridge between".to_string()]
    }

    #[test]
    fn test_slide_count_is_min_of_limit_and_length() {
        let entries = transcript();
        for limit in 0..6 {
            let slides = SlideBuilder::new()
                .with_max_messages(limit)
                .build(&header(), &entries);
            assert_eq!(slides.len(), limit.min(entries.len()), "limit {limit}");
        }
    }

    #[test]
    fn test_empty_transcript_yields_no_slides() {
        let slides = SlideBuilder::new().build(&header(), &[]);
        assert!(slides.is_empty());
    }

    #[test]
    fn test_reveal_steps_grow_by_one() {
        let entries = transcript();
        let builder = SlideBuilder::new();
        let steps: Vec<_> = builder.reveal_steps(&entries).collect();

        assert_eq!(steps.len(), 3);
        for pair in steps.windows(2) {
            assert_eq!(pair[1].len(), pair[0].len() + 1);
            assert_eq!(&pair[1][..pair[0].len()], pair[0]);
        }
    }

    #[test]
    fn test_single_message_limit_is_last_slide() {
        let slides = SlideBuilder::new()
            .with_max_messages(1)
            .build(&header(), &transcript());

        assert_eq!(slides.len(), 1);
        let art = strip(&slides[0].art);
        assert!(art.contains("Claude: hello"));
        assert!(!art.contains("how are you"));
        assert!(slides[0].body.contains("Simple. Dumb. Works."));
        assert!(slides[0].body.contains("ENTER to continue"));
    }

    #[test]
    fn test_only_last_slide_has_tagline() {
        let slides = SlideBuilder::new().build(&header(), &transcript());

        assert!(!slides[0].body.contains("Simple. Dumb. Works."));
        assert!(!slides[1].body.contains("Simple. Dumb. Works."));
        assert!(slides[2].body.contains("Simple. Dumb. Works."));
        assert!(slides.iter().all(|s| s.title == DEFAULT_TITLE));
    }

    #[test]
    fn test_art_layout() {
        let slides = SlideBuilder::new().build(&header(), &transcript());
        let art = &slides[1].art;

        assert_eq!(
            art,
            "[dim cyan]This file is a communication bridge between[/]\n\
             \n[dim white]Claude: hello[/]\
             \n[bold cyan]Claude:[/] [white]how are you[/]"
        );
    }

    #[test]
    fn test_long_message_shortened_only_when_not_current() {
        let long = "x".repeat(60);
        let entries = vec![
            TranscriptEntry::new("Win", long.clone()),
            TranscriptEntry::new("Main", "ok"),
        ];
        let slides = SlideBuilder::new().build(&[], &entries);

        let first = strip(&slides[0].art);
        assert!(first.contains(&format!("Win: {long}")));

        let second = strip(&slides[1].art);
        assert!(second.contains(&format!("Win: {}...", "x".repeat(50))));
        assert!(!second.contains(&long));
    }

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("short"), "short");
        assert_eq!(shorten(&"a".repeat(50)), "a".repeat(50));
        assert_eq!(shorten(&"a".repeat(51)), format!("{}...", "a".repeat(50)));
        // Multi-byte characters count once each.
        let accented = "é".repeat(55);
        assert_eq!(shorten(&accented), format!("{}...", "é".repeat(50)));
    }

    #[test]
    fn test_transcript_text_is_escaped() {
        let entries = vec![TranscriptEntry::new("Win", "use [bold] here")];
        let slides = SlideBuilder::new().build(&["[dim]".to_string()], &entries);
        let art = strip(&slides[0].art);

        assert!(art.starts_with("[dim]\n"));
        assert!(art.ends_with("Win: use [bold] here"));
    }

    #[test]
    fn test_custom_title() {
        let slides = SlideBuilder::new()
            .with_title("[bold]Demo[/]")
            .build(&[], &transcript());
        assert!(slides.iter().all(|s| s.title == "[bold]Demo[/]"));
    }

    #[test]
    fn test_build_from_chatfile() {
        let chatfile = crate::ChatfileParser::new()
            .parse("This file is a communication bridge between\nClaude: hello\nClaude: how are you");
        let slides = SlideBuilder::new().build_from(&chatfile);
        assert_eq!(slides.len(), 2);
        assert!(strip(&slides[1].art).starts_with("This file is a communication bridge between\n"));
    }
}
