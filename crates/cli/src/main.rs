//! Terminal presentation that turns a Chatfile into slides.

use anyhow::{Context, Result};
use chatdeck_core::markup::strip;
use chatdeck_core::{Deck, DeckAssembler, SlideBuilder, DEFAULT_MAX_MESSAGES};
use clap::Parser;
use std::path::PathBuf;
use std::process::Command;

/// Present a slide deck in the terminal, revealing a Chatfile one message at a time.
#[derive(Parser, Debug)]
#[command(name = "chatdeck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chatfile to turn into transcript slides (skipped if missing)
    #[arg(short, long, default_value = "v0/Chatfile")]
    chatfile: PathBuf,

    /// Show only the static slides
    #[arg(long)]
    no_chatfile: bool,

    /// Maximum number of Chatfile messages to reveal
    #[arg(short, long, default_value_t = DEFAULT_MAX_MESSAGES)]
    max_messages: usize,

    /// Static deck TOML file (default: built-in deck)
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Print the deck as plain text instead of presenting it
    #[arg(short, long, conflicts_with = "json")]
    print: bool,

    /// Print the deck as JSON instead of presenting it
    #[arg(long)]
    json: bool,

    /// Program to launch after the last slide
    #[arg(long, default_value = "claude")]
    launch: String,

    /// Do not launch anything after the last slide
    #[arg(long)]
    no_launch: bool,

    /// Arguments for the launched program (after `--`)
    #[arg(last = true)]
    launch_args: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let deck = load_deck(&args)?;
    log::info!("Deck ready with {} slides", deck.len());

    if args.json {
        let json = serde_json::to_string_pretty(&deck).context("Failed to serialize deck")?;
        println!("{}", json);
        return Ok(());
    }

    if args.print {
        print!("{}", format_plain(&deck));
        return Ok(());
    }

    let outcome = chatdeck_tui::run(deck)?;

    if outcome.launch_requested() && !args.no_launch {
        launch(&args.launch, &args.launch_args)?;
    }

    Ok(())
}

/// Build the final deck from the static slides and the Chatfile.
fn load_deck(args: &Args) -> Result<Deck> {
    let static_deck = match &args.deck {
        Some(path) => Deck::load(path)
            .with_context(|| format!("Failed to load deck {}", path.display()))?,
        None => Deck::builtin().context("Built-in deck is invalid")?,
    };

    let builder = SlideBuilder::new().with_max_messages(args.max_messages);
    let assembler = DeckAssembler::new(static_deck).with_builder(builder);

    let chatfile = (!args.no_chatfile).then_some(args.chatfile.as_path());
    Ok(assembler.build(chatfile))
}

/// Render every slide as plain text with a numbered separator.
fn format_plain(deck: &Deck) -> String {
    let mut out = String::new();

    for (idx, slide) in deck.iter().enumerate() {
        out.push_str(&format!("--- {} / {} ---\n", idx + 1, deck.len()));
        out.push_str(&strip(&slide.compose()));
        out.push('\n');
    }

    out
}

/// Run the follow-up program in the foreground.
fn launch(program: &str, program_args: &[String]) -> Result<()> {
    println!("\n\x1b[1;36m✨ Launching {}...\x1b[0m\n", program);

    let status = Command::new(program)
        .args(program_args)
        .status()
        .with_context(|| format!("Failed to launch {}", program))?;

    if !status.success() {
        log::warn!("{} exited with {}", program, status);
    }

    Ok(())
}
