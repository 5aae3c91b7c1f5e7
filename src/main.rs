//! Terminal lawn runner (default binary).
//!
//! Polls crossterm key events once per tick, advances the simulation through
//! the fixed-step driver and draws with the framebuffer renderer.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_lawn::core::GameSnapshot;
use tui_lawn::engine::{DriverConfig, TickDriver};
use tui_lawn::input::{handle_key_event, KeyCommand};
use tui_lawn::term::{FrameBuffer, GameView, TerminalRenderer};
use tui_lawn::types::{GameAction, GameOverReason, DEFAULT_TICK_MS};
use tui_lawn::{GameSummary, ShutdownFlag};

/// How long the final frame stays up after Ctrl-C.
const INTERRUPT_LINGER: Duration = Duration::from_millis(1500);

/// Poll interval while the defeat frame waits for a key.
const KEY_WAIT_POLL: Duration = Duration::from_millis(100);

#[derive(Debug, Parser)]
#[command(name = "tui-lawn", version, about = "Defend the lawn in your terminal")]
struct Cli {
    /// Simulation tick length in milliseconds (floored at 10)
    #[arg(long, env = "LAWN_TICK_MS", default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u32,

    /// Spawn seed; derived from the clock when omitted
    #[arg(long, env = "LAWN_SEED")]
    seed: Option<u32>,

    /// Print the final result as one JSON line after the terminal is restored
    #[arg(long)]
    json_summary: bool,

    /// Append structured logs to this file
    #[arg(long, env = "LAWN_LOG_PATH")]
    log_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_path.as_ref())?;

    let mut driver = TickDriver::new(DriverConfig::new(cli.tick_ms, cli.seed));

    let shutdown = ShutdownFlag::new();
    shutdown
        .register()
        .context("failed to install signal handlers")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut driver, &shutdown);

    // Always try to restore terminal state.
    let restored = term.exit();
    result?;
    restored?;

    let summary = GameSummary::from_driver(&driver);
    info!(
        reason = summary.reason.unwrap_or("none"),
        score = summary.score,
        ticks = summary.ticks,
        "run finished"
    );
    if cli.json_summary {
        println!("{}", summary.to_json_line()?);
    }
    Ok(())
}

/// Install a file-backed subscriber. The terminal belongs to the renderer, so
/// without a log path nothing is installed.
fn init_tracing(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    driver: &mut TickDriver,
    shutdown: &ShutdownFlag,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut actions: Vec<GameAction> = Vec::with_capacity(8);

    while !driver.game_over() {
        let started = Instant::now();
        if shutdown.apply(driver) {
            info!("termination signal received");
            break;
        }

        // Drain everything that arrived since the last tick.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match handle_key_event(key) {
                    Some(KeyCommand::Action(action)) => actions.push(action),
                    Some(KeyCommand::Interrupt) => driver.interrupt(),
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        driver.frame(actions.drain(..))?;

        driver.snapshot_into(&mut snap);
        view.render_into(&snap, term.viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        std::thread::sleep(driver.sleep_budget(started.elapsed()));
    }

    driver.snapshot_into(&mut snap);
    view.render_into(&snap, term.viewport(), &mut fb);
    term.draw_swap(&mut fb)?;

    match driver.state().game_over_reason() {
        Some(GameOverReason::Defeat) => wait_for_key(shutdown)?,
        Some(GameOverReason::Interrupted) => std::thread::sleep(INTERRUPT_LINGER),
        Some(GameOverReason::Quit) | None => {}
    }
    Ok(())
}

fn wait_for_key(shutdown: &ShutdownFlag) -> Result<()> {
    while !shutdown.is_raised() {
        if !event::poll(KEY_WAIT_POLL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                break;
            }
        }
    }
    Ok(())
}
