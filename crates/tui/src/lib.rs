//! Full-screen terminal slide viewer.

pub mod presenter;
pub mod render;
pub mod terminal;

use std::io::{stdout, IsTerminal};

use anyhow::{Context, Result};
use chatdeck_core::Deck;
use crossterm::event::{self, Event, KeyEventKind};

pub use presenter::{action_for_key, Action, Outcome, Presenter};

/// Shows `deck` full-screen until the user finishes or quits.
pub fn run(deck: Deck) -> Result<Outcome> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The slide viewer requires a terminal.\n\
             Use `chatdeck --print` to dump the deck as text."
        );
    }

    terminal::install_panic_hook();
    let mut term = terminal::setup_terminal().context("Failed to setup terminal")?;

    let result = event_loop(&mut term, Presenter::new(deck));

    terminal::restore_terminal()?;
    result
}

fn event_loop(term: &mut terminal::SlideTerminal, mut presenter: Presenter) -> Result<Outcome> {
    log::debug!("Presenting {} slides", presenter.len());

    loop {
        term.draw(|frame| render::render(&presenter, frame))?;

        // Anything other than a key press (resize, focus) just redraws.
        let Event::Key(key) = event::read().context("Failed to read terminal event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let Some(outcome) = action_for_key(&key).and_then(|action| presenter.apply(action)) {
            log::debug!("Presentation ended: {outcome:?}");
            return Ok(outcome);
        }
    }
}
