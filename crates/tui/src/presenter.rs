//! Navigation state for a running presentation.
//!
//! `Presenter` is pure: key events map to [`Action`]s, actions move the
//! index, and the final action yields an [`Outcome`]. The runtime in
//! `lib.rs` owns the terminal and the event loop.

use chatdeck_core::{Deck, SlideRecord};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    Quit,
}

/// How the presentation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user stepped past the last slide.
    Completed,
    /// The user quit early.
    Quit,
}

impl Outcome {
    /// Whether the follow-up process should be launched.
    pub fn launch_requested(self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

/// Map a key press to an action.
///
/// Enter, Space, Right and `l` advance; Left, Backspace and `h` go back;
/// Esc, `q` and Ctrl+C quit.
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => {
            Some(Action::Next)
        }
        KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') => Some(Action::Previous),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// The deck being shown and the index of the current slide.
#[derive(Debug, Clone)]
pub struct Presenter {
    deck: Deck,
    index: usize,
}

impl Presenter {
    /// Start a presentation at the first slide.
    pub fn new(deck: Deck) -> Self {
        Self { deck, index: 0 }
    }

    /// Zero-based index of the current slide.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// The slide on screen.
    pub fn current(&self) -> Option<&SlideRecord> {
        self.deck.get(self.index)
    }

    /// `current / total`, one-based.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.deck.len())
    }

    /// Apply an action. Returns the outcome once the presentation is over.
    pub fn apply(&mut self, action: Action) -> Option<Outcome> {
        match action {
            Action::Next => self.next(),
            Action::Previous => {
                self.previous();
                None
            }
            Action::Quit => Some(Outcome::Quit),
        }
    }

    /// Advance one slide; past the last slide the presentation completes.
    pub fn next(&mut self) -> Option<Outcome> {
        if self.index + 1 < self.deck.len() {
            self.index += 1;
            log::debug!("Slide {}", self.counter());
            None
        } else {
            Some(Outcome::Completed)
        }
    }

    /// Go back one slide, staying on the first.
    pub fn previous(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            log::debug!("Slide {}", self.counter());
        }
    }
}
