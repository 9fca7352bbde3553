use std::fs::File;
use std::io::{stdout, BufWriter};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use space_invaders::buffer::PixelBuffer;
use space_invaders::compute::{init_state, tick};
use space_invaders::config::Config;
use space_invaders::display::{Hud, Present, TerminalPresenter};
use space_invaders::entities::{GameState, GameStatus};
use space_invaders::input::{InputState, KeyTracker};
use space_invaders::render::{compose, C_BACKGROUND};

/// Frames a key stays held without a fresh press or repeat event, on
/// terminals that never report releases.
const HOLD_WINDOW: u64 = 4;

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input → simulate → compose → present, once per frame, until quit.
fn game_loop<P: Present>(
    presenter: &mut P,
    config: &Config,
    rx: &mpsc::Receiver<Event>,
    mut keys: KeyTracker,
) -> anyhow::Result<GameState> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = init_state(config.level);
    let mut input = InputState::default();
    let mut buffer = PixelBuffer::new(state.width as usize, state.height as usize, C_BACKGROUND);
    let frame_time = config.frame_duration();
    let mut frame: u64 = 0;

    while input.running() {
        let frame_start = Instant::now();
        frame += 1;

        // Drain all pending input events (non-blocking)
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                if let Some(event) = keys.key_event(&key, frame) {
                    input.apply(event);
                }
            }
        }
        for event in keys.expire(frame) {
            input.apply(event);
        }

        if input.take_restart() && state.status != GameStatus::Playing {
            info!(score = state.score, "restarting");
            state = init_state(config.level);
        }

        tick(&mut state, &mut input, &mut rng);
        compose(&mut buffer, &state);
        presenter.present(&buffer, &Hud::from_state(&state))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
    Ok(state)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;
    info!(?config, "starting");

    let mut presenter = TerminalPresenter::new(BufWriter::new(stdout()), C_BACKGROUND)?;
    let hold_window = (!presenter.keyboard_enhanced()).then_some(HOLD_WINDOW);

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(&mut presenter, &config, &rx, KeyTracker::new(hold_window));

    // Always restore the terminal
    presenter.restore();

    let state = result?;
    info!(score = state.score, frames = state.frame, "shutdown");
    println!("Final score: {}", state.score);
    Ok(())
}
