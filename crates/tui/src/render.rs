//! Pure render functions for the slide viewer.
//!
//! Functions here take the presenter by shared reference, draw to a ratatui
//! frame and never mutate state.

use chatdeck_core::markup;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::presenter::Presenter;

/// Screen background.
const BACKGROUND: Color = Color::Rgb(10, 10, 18);

/// Slide counter colour.
const COUNTER_FG: Color = Color::Rgb(85, 85, 85);

/// Height of the counter row at the bottom.
const COUNTER_HEIGHT: u16 = 1;

/// Renders the current slide and the counter.
pub fn render(presenter: &Presenter, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);

    let [content, counter] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(COUNTER_HEIGHT)]).areas(area);

    if let Some(slide) = presenter.current() {
        let text = to_text(&slide.compose());
        let height = u16::try_from(text.height()).unwrap_or(u16::MAX);
        let [slide_area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(content);
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            slide_area,
        );
    }

    frame.render_widget(
        Paragraph::new(presenter.counter())
            .style(Style::default().fg(COUNTER_FG))
            .alignment(Alignment::Center),
        counter,
    );
}

/// Convert slide markup to ratatui text.
pub fn to_text(source: &str) -> Text<'static> {
    let lines: Vec<Line<'static>> = markup::parse(source)
        .into_iter()
        .map(|line| {
            let spans: Vec<Span<'static>> = line
                .spans
                .into_iter()
                .map(|span| Span::styled(span.text, to_style(span.style)))
                .collect();
            Line::from(spans)
        })
        .collect();
    Text::from(lines)
}

fn to_style(style: markup::Style) -> Style {
    let mut out = Style::default();
    if let Some(fg) = style.fg {
        out = out.fg(to_color(fg));
    }
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.dim {
        out = out.add_modifier(Modifier::DIM);
    }
    if style.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    out
}

fn to_color(color: markup::Color) -> Color {
    match color {
        markup::Color::Black => Color::Black,
        markup::Color::Red => Color::Red,
        markup::Color::Green => Color::Green,
        markup::Color::Yellow => Color::Yellow,
        markup::Color::Blue => Color::Blue,
        markup::Color::Magenta => Color::Magenta,
        markup::Color::Cyan => Color::Cyan,
        markup::Color::White => Color::Gray,
        markup::Color::Gray => Color::DarkGray,
        markup::Color::BrightRed => Color::LightRed,
        markup::Color::BrightGreen => Color::LightGreen,
        markup::Color::BrightYellow => Color::LightYellow,
        markup::Color::BrightBlue => Color::LightBlue,
        markup::Color::BrightMagenta => Color::LightMagenta,
        markup::Color::BrightCyan => Color::LightCyan,
        markup::Color::BrightWhite => Color::White,
    }
}
