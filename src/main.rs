//! Neon Tic-Tac-Toe - terminal front end
//!
//! Plays the engine interactively and manages saved settings and scores.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, HELP, Input, parse_input};
use neon_tictactoe::{
    Canvas, GameConfig, JsonFileStore, PARTICLE_COUNT, Preferences, Session, TracingFeedback,
    palette, parse_mode, parse_size, parse_theme, render, spawn, step,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let store = JsonFileStore::new(&cli.store);

    match cli.command {
        Command::Play => run_play(store, cli.config.as_deref(), rng),
        Command::Scores => show_scores(store),
        Command::ResetScores => reset_scores(store, rng),
        Command::Settings { size, mode, theme } => run_settings(store, rng, size, mode, theme),
        Command::Particles {
            frames,
            width,
            height,
        } => run_particles(store, rng, frames, width, height),
    }
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,neon_tictactoe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Opens a session, seeding the store from a TOML config on first run.
#[instrument(skip(store, rng))]
fn open_session(
    store: JsonFileStore,
    config_path: Option<&std::path::Path>,
    rng: StdRng,
) -> Result<Session<JsonFileStore, TracingFeedback>> {
    let first_run = Preferences::new(store.clone()).is_empty();
    match config_path {
        Some(path) if first_run => {
            let config = GameConfig::from_file(path)?;
            info!(path = %path.display(), "Seeding settings from config file");
            Ok(Session::with_config(config, store, TracingFeedback, rng))
        }
        Some(path) => {
            info!(path = %path.display(), "Saved settings exist, ignoring config file");
            Ok(Session::open_with_rng(store, TracingFeedback, rng))
        }
        None => Ok(Session::open_with_rng(store, TracingFeedback, rng)),
    }
}

/// Interactive game loop on stdin/stdout.
#[instrument(skip(store, rng))]
fn run_play(
    store: JsonFileStore,
    config_path: Option<&std::path::Path>,
    rng: StdRng,
) -> Result<()> {
    let mut session = open_session(store, config_path, rng)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("Neon Tic-Tac-Toe ({} theme). Type 'help' for commands.", session.theme().label());
    draw(&session);

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let Some(input) = parse_input(&line) else {
            println!("Unrecognized input. Type 'help' for commands.");
            continue;
        };

        match input {
            Input::Quit => break,
            Input::Help => {
                println!("{HELP}");
                continue;
            }
            Input::Scores => {
                println!("{}", session.engine().scores());
                continue;
            }
            Input::Hint => {
                let mut preview = session.engine().clone();
                match preview.suggest_move() {
                    Some((index, reason)) => println!("Try cell {} ({reason})", index + 1),
                    None => println!("The game is over."),
                }
                continue;
            }
            Input::Move(number) => {
                if let Err(e) = session.play(number - 1) {
                    println!("{e}");
                    continue;
                }
            }
            Input::Reset => session.reset(),
            Input::Size(raw) => match parse_size(&raw) {
                Ok(size) => session.change_size(size),
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
            Input::Mode(raw) => match parse_mode(&raw) {
                Ok(mode) => session.change_mode(mode),
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
            Input::Theme(raw) => match parse_theme(&raw) {
                Ok(theme) => {
                    session.change_theme(theme);
                    println!("Theme: {}", theme.label());
                    continue;
                }
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
        }

        draw(&session);
        stdout.flush()?;
    }

    info!(scores = %session.engine().scores(), "Leaving game");
    Ok(())
}

fn draw(session: &Session<JsonFileStore, TracingFeedback>) {
    println!();
    print!("{}", session.view());
    println!("{}", render::status_line(session.engine()));
    println!("{}", session.engine().scores());
}

#[instrument(skip(store))]
fn show_scores(store: JsonFileStore) -> Result<()> {
    let config = Preferences::new(store).load();
    println!("{}", config.scores);
    Ok(())
}

#[instrument(skip(store, rng))]
fn reset_scores(store: JsonFileStore, rng: StdRng) -> Result<()> {
    let mut session = Session::open_with_rng(store, TracingFeedback, rng);
    session.reset_scores();
    println!("{}", session.engine().scores());
    Ok(())
}

#[instrument(skip(store, rng))]
fn run_settings(
    store: JsonFileStore,
    rng: StdRng,
    size: Option<String>,
    mode: Option<String>,
    theme: Option<String>,
) -> Result<()> {
    let mut session = Session::open_with_rng(store, TracingFeedback, rng);

    if let Some(raw) = size {
        session.change_size(parse_size(&raw)?);
    }
    if let Some(raw) = mode {
        session.change_mode(parse_mode(&raw)?);
    }
    if let Some(raw) = theme {
        session.change_theme(parse_theme(&raw)?);
    }

    let config = session.config();
    println!("size  = {}", config.size);
    println!("mode  = {}", config.mode);
    println!("theme = {}", config.theme);
    Ok(())
}

#[instrument(skip(store, rng))]
fn run_particles(
    store: JsonFileStore,
    mut rng: StdRng,
    frames: usize,
    width: f64,
    height: f64,
) -> Result<()> {
    let theme = Preferences::new(store).load().theme;
    let canvas = Canvas { width, height };
    if width <= 0.0 || height <= 0.0 {
        warn!(width, height, "Canvas has no area");
    }

    let mut particles = spawn(PARTICLE_COUNT, canvas, &mut rng);
    for frame_number in 0..frames {
        let frame = step(&particles, canvas, palette(theme), &mut rng);
        println!("# frame {frame_number} ({} theme)", theme.label());
        for command in &frame.commands {
            println!("{}", serde_json::to_string(command)?);
        }
        particles = frame.particles;
    }
    Ok(())
}
