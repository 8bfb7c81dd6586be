//! Deck loading and assembly.
//!
//! The static slides are data: a TOML file with one `[[slides]]` table per
//! slide. Generated transcript slides are spliced in just before the last
//! static slide, which closes the presentation.

use std::path::Path;

use crate::{ChatfileParser, Deck, Error, Result, SlideBuilder, SlideRecord};

/// The deck shipped with the binary.
const BUILTIN_DECK: &str = include_str!("../assets/deck.toml");

impl Deck {
    /// Parse a deck from TOML. A deck without slides is rejected.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let deck: Deck = toml::from_str(content)?;
        if deck.is_empty() {
            return Err(Error::EmptyDeck);
        }
        Ok(deck)
    }

    /// Read and parse a deck file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let deck = Self::from_toml_str(&content)?;
        log::debug!("Loaded {} slides from {}", deck.len(), path.display());
        Ok(deck)
    }

    /// The built-in deck.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_DECK)
    }
}

/// Splice generated slides in front of the closing (last) static slide.
///
/// With no generated slides the static slides come back unchanged.
pub fn assemble(static_slides: &[SlideRecord], generated: Vec<SlideRecord>) -> Vec<SlideRecord> {
    let Some((closing, opening)) = static_slides.split_last() else {
        return generated;
    };

    let mut slides = Vec::with_capacity(static_slides.len() + generated.len());
    slides.extend_from_slice(opening);
    slides.extend(generated);
    slides.push(closing.clone());
    slides
}

/// Combines a static deck with slides generated from a Chatfile.
#[derive(Debug, Clone)]
pub struct DeckAssembler {
    static_deck: Deck,
    parser: ChatfileParser,
    builder: SlideBuilder,
}

impl DeckAssembler {
    /// Create an assembler around a static deck with default parsing and
    /// slide building.
    pub fn new(static_deck: Deck) -> Self {
        Self {
            static_deck,
            parser: ChatfileParser::new(),
            builder: SlideBuilder::new(),
        }
    }

    /// Use a custom slide builder.
    pub fn with_builder(mut self, builder: SlideBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Use a custom Chatfile parser.
    pub fn with_parser(mut self, parser: ChatfileParser) -> Self {
        self.parser = parser;
        self
    }

    /// Splice `generated` into the static deck.
    pub fn assemble(&self, generated: Vec<SlideRecord>) -> Deck {
        Deck::new(assemble(&self.static_deck.slides, generated))
    }

    /// Build the final deck, generating transcript slides from `chatfile`.
    ///
    /// A missing path, or a file that cannot be read, falls back to the
    /// static deck.
    pub fn build(&self, chatfile: Option<&Path>) -> Deck {
        let Some(path) = chatfile else {
            log::debug!("No Chatfile given, using static deck");
            return self.static_deck.clone();
        };

        if !path.exists() {
            log::info!("Chatfile {} not found, using static deck", path.display());
            return self.static_deck.clone();
        }

        let chatfile = match self.parser.parse_file(path) {
            Ok(chatfile) => chatfile,
            Err(e) => {
                log::warn!("Could not read Chatfile {}: {}", path.display(), e);
                return self.static_deck.clone();
            }
        };

        let generated = self.builder.build_from(&chatfile);
        log::info!(
            "Generated {} slides from {}",
            generated.len(),
            path.display()
        );

        self.assemble(generated)
    }
}

/// Build the presentation deck from the built-in static slides.
///
/// Fails only if the built-in deck itself is invalid.
pub fn build_deck(chatfile: Option<&Path>, max_messages: usize) -> Result<Deck> {
    let builder = SlideBuilder::new().with_max_messages(max_messages);
    Ok(DeckAssembler::new(Deck::builtin()?)
        .with_builder(builder)
        .build(chatfile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::strip;
    use std::io::Write;

    const CHATFILE: &str = "This file is a communication bridge between\n\
                            Claude (win): can you reach the whisper service?\n\
                            Claude (main): no, connection refused\n\
                            Claude (win): try port 9000";

    fn slide(name: &str) -> SlideRecord {
        SlideRecord::new(name, name, name)
    }

    fn static_deck() -> Deck {
        Deck::new(vec![slide("intro"), slide("rules"), slide("closing")])
    }

    fn chatfile_on_disk(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_assemble_inserts_before_closing() {
        let deck = static_deck();
        let result = assemble(&deck.slides, vec![slide("gen1"), slide("gen2")]);
        let names: Vec<_> = result.iter().map(|s| s.art.as_str()).collect();

        assert_eq!(names, vec!["intro", "rules", "gen1", "gen2", "closing"]);
    }

    #[test]
    fn test_assemble_with_nothing_generated_is_identity() {
        let deck = static_deck();
        assert_eq!(assemble(&deck.slides, Vec::new()), deck.slides);

        let single = vec![slide("only")];
        assert_eq!(assemble(&single, Vec::new()), single);
    }

    #[test]
    fn test_assemble_single_static_slide() {
        let result = assemble(&[slide("closing")], vec![slide("gen")]);
        let names: Vec<_> = result.iter().map(|s| s.art.as_str()).collect();
        assert_eq!(names, vec!["gen", "closing"]);
    }

    #[test]
    fn test_assemble_without_static_slides() {
        let result = assemble(&[], vec![slide("gen")]);
        assert_eq!(result, vec![slide("gen")]);
    }

    #[test]
    fn test_build_without_chatfile_is_static_deck() {
        let assembler = DeckAssembler::new(static_deck());
        assert_eq!(assembler.build(None), static_deck());
    }

    #[test]
    fn test_build_with_missing_chatfile_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let assembler = DeckAssembler::new(static_deck());
        assert_eq!(
            assembler.build(Some(&dir.path().join("Chatfile"))),
            static_deck()
        );
    }

    #[test]
    fn test_build_with_unreadable_chatfile_falls_back() {
        // A directory exists but cannot be read as a file.
        let dir = tempfile::tempdir().unwrap();
        let assembler = DeckAssembler::new(static_deck());
        assert_eq!(assembler.build(Some(dir.path())), static_deck());
    }

    #[test]
    fn test_build_with_chatfile() {
        let file = chatfile_on_disk(CHATFILE);
        let assembler = DeckAssembler::new(static_deck());
        let deck = assembler.build(Some(file.path()));

        assert_eq!(deck.len(), 6);
        assert_eq!(deck.get(0).map(|s| s.art.as_str()), Some("intro"));
        assert_eq!(deck.get(5).map(|s| s.art.as_str()), Some("closing"));
        let last_generated = deck.get(4).map(|s| strip(&s.art)).unwrap();
        assert!(last_generated.ends_with("Claude (win): try port 9000"));
    }

    #[test]
    fn test_build_respects_message_limit() {
        let file = chatfile_on_disk(CHATFILE);
        let assembler = DeckAssembler::new(static_deck())
            .with_builder(SlideBuilder::new().with_max_messages(2));
        assert_eq!(assembler.build(Some(file.path())).len(), 5);

        let assembler = DeckAssembler::new(static_deck())
            .with_builder(SlideBuilder::new().with_max_messages(0));
        assert_eq!(assembler.build(Some(file.path())), static_deck());
    }

    #[test]
    fn test_build_with_custom_parser() {
        let file = chatfile_on_disk("Note: speaker notes\nWin: ping");
        let assembler = DeckAssembler::new(static_deck())
            .with_parser(ChatfileParser::new().with_header_sentinel("Note"));
        let deck = assembler.build(Some(file.path()));

        assert_eq!(deck.len(), 4);
        let generated = strip(&deck.slides[2].art);
        assert!(generated.starts_with("Note: speaker notes\n"));
    }

    #[test]
    fn test_build_with_message_free_chatfile() {
        let file = chatfile_on_disk("just notes\nno messages here");
        let assembler = DeckAssembler::new(static_deck());
        assert_eq!(assembler.build(Some(file.path())), static_deck());
    }

    #[test]
    fn test_builtin_deck_loads() {
        let deck = Deck::builtin().unwrap();
        assert!(deck.len() >= 2);
        let closing = deck.slides.last().unwrap();
        assert!(strip(&closing.body).contains("launch demo"));
    }

    #[test]
    fn test_build_deck_uses_builtin() {
        let builtin = Deck::builtin().unwrap();
        assert_eq!(build_deck(None, 6).unwrap(), builtin);

        let file = chatfile_on_disk(CHATFILE);
        let deck = build_deck(Some(file.path()), 6).unwrap();
        assert_eq!(deck.len(), builtin.len() + 3);
        assert_eq!(deck.slides.last(), builtin.slides.last());
    }

    #[test]
    fn test_deck_from_toml() {
        let toml = r#"
            [[slides]]
            art = "[cyan]box[/]"
            title = "[bold]One[/]"
            body = "hint"

            [[slides]]
            art = "end"
            title = "Two"
            body = ""
        "#;
        let deck = Deck::from_toml_str(toml).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.slides[0], SlideRecord::new("[cyan]box[/]", "[bold]One[/]", "hint"));
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert!(matches!(
            Deck::from_toml_str("slides = []"),
            Err(Error::EmptyDeck)
        ));
    }

    #[test]
    fn test_malformed_deck_rejected() {
        let result = Deck::from_toml_str("[[slides]]\nart = \"missing title\"");
        assert!(matches!(result, Err(Error::DeckParseError(_))));
    }

    #[test]
    fn test_load_deck_file() {
        let file = chatfile_on_disk("[[slides]]\nart = \"a\"\ntitle = \"b\"\nbody = \"c\"\n");
        let deck = Deck::load(file.path()).unwrap();
        assert_eq!(deck.slides, vec![SlideRecord::new("a", "b", "c")]);
    }
}
