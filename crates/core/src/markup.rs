//! Inline style markup for slide text.
//!
//! Slide blocks are written with bracket tags:
//!
//! ```text
//! [bold cyan]Chatfile[/] is [dim italic]simple[/dim italic]
//! ```
//!
//! - `[words]` opens a style made of `bold`, `dim`, `italic` and colour names.
//!   Styles nest: an inner tag adds to the outer one.
//! - `[/]` closes the innermost open tag, `[/words]` the most recent tag
//!   spelled the same way.
//! - `\[` is a literal `[` and `\\` a literal backslash.
//! - Brackets that do not form a known tag are kept as text.
//!
//! Parsing never fails. The output is renderer-agnostic; the TUI maps
//! [`Style`] onto terminal styles.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching an escape sequence or a candidate tag.
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[\\\[]|\[(/?[a-z_]+(?: [a-z_]+)*|/)\]").unwrap());

/// Foreground colours understood by the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Look up a colour by its markup name.
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "gray" | "grey" => Self::Gray,
            "bright_red" => Self::BrightRed,
            "bright_green" => Self::BrightGreen,
            "bright_yellow" => Self::BrightYellow,
            "bright_blue" => Self::BrightBlue,
            "bright_magenta" => Self::BrightMagenta,
            "bright_cyan" => Self::BrightCyan,
            "bright_white" => Self::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

/// Text attributes for a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
}

impl Style {
    /// Layer the style words of a tag on top of `self`.
    ///
    /// Returns `None` if any word is unknown.
    fn with_words(mut self, words: &str) -> Option<Self> {
        for word in words.split(' ') {
            match word {
                "bold" => self.bold = true,
                "dim" => self.dim = true,
                "italic" => self.italic = true,
                other => self.fg = Some(Color::from_name(other)?),
            }
        }
        Some(self)
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

/// One rendered line made of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub spans: Vec<Span>,
}

impl StyledLine {
    /// The line's text without styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    fn push(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.spans.push(Span {
                text: text.to_string(),
                style,
            }),
        }
    }
}

/// Accumulates spans into lines, breaking on `\n`.
#[derive(Default)]
struct LineBuilder {
    lines: Vec<StyledLine>,
    current: StyledLine,
}

impl LineBuilder {
    fn push_text(&mut self, text: &str, style: Style) {
        for (i, piece) in text.split('\n').enumerate() {
            if i > 0 {
                self.lines.push(std::mem::take(&mut self.current));
            }
            self.current.push(piece, style);
        }
    }

    fn finish(mut self) -> Vec<StyledLine> {
        self.lines.push(self.current);
        self.lines
    }
}

/// Open tags, innermost last. Each frame keeps the tag text for `[/words]`.
#[derive(Default)]
struct StyleStack {
    frames: Vec<(String, Style)>,
}

impl StyleStack {
    fn current(&self) -> Style {
        self.frames.last().map(|(_, style)| *style).unwrap_or_default()
    }

    /// Apply a tag. Returns false if the tag should be kept as literal text.
    fn apply(&mut self, tag: &str) -> bool {
        if tag == "/" {
            return self.frames.pop().is_some();
        }

        if let Some(name) = tag.strip_prefix('/') {
            return match self.frames.iter().rposition(|(open, _)| open == name) {
                Some(pos) => {
                    self.frames.truncate(pos);
                    true
                }
                None => false,
            };
        }

        match self.current().with_words(tag) {
            Some(style) => {
                self.frames.push((tag.to_string(), style));
                true
            }
            None => false,
        }
    }
}

/// Parse markup into styled lines. There is always at least one line.
pub fn parse(markup: &str) -> Vec<StyledLine> {
    let mut out = LineBuilder::default();
    let mut stack = StyleStack::default();
    let mut last = 0;

    for caps in TAG_REGEX.captures_iter(markup) {
        let Some(token) = caps.get(0) else {
            continue;
        };
        out.push_text(&markup[last..token.start()], stack.current());
        last = token.end();

        match caps.get(1) {
            // `\[` or `\\`: keep the second character.
            None => out.push_text(&token.as_str()[1..], stack.current()),
            Some(tag) => {
                if !stack.apply(tag.as_str()) {
                    out.push_text(token.as_str(), stack.current());
                }
            }
        }
    }
    out.push_text(&markup[last..], stack.current());

    out.finish()
}

/// Remove all markup, returning the text a reader would see.
pub fn strip(markup: &str) -> String {
    parse(markup)
        .iter()
        .map(StyledLine::plain)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape text so that it renders literally inside markup.
pub fn escape(text: &str) -> String {
    text.replace('\\', r"\\").replace('[', r"\[")
}
