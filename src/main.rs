//! Terminal Simon Says runner (default binary).
//!
//! Drives the deterministic core on a fixed 60 Hz logical tick: poll input
//! until the next tick deadline, sample held keys once per tick, advance the
//! machine, render the snapshot.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_simon::core::{GameSnapshot, GameState};
use tui_simon::input::{should_quit, HeldInput};
use tui_simon::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_simon::types::{Symbol, TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Config {
    seed: u32,
    debug_overlay: bool,
}

fn parse_args(args: &[String]) -> Result<Config> {
    let mut config = Config {
        seed: default_seed(),
        debug_overlay: false,
    };
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--debug" => {
                config.debug_overlay = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

/// Wall clock only picks the session seed; everything after is deterministic.
fn default_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    info!(seed = config.seed, "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: Config) -> Result<()> {
    let mut game = GameState::new(config.seed);
    let view = GameView::new().with_debug_overlay(config.debug_overlay);
    let mut held = HeldInput::new();

    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    // Entered-history for the debug overlay, fed by the core's observer events.
    let mut trace: Vec<Symbol> = Vec::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, &trace, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        held.key_press(key);
                    }
                    KeyEventKind::Release => {
                        held.key_release(key);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            held.update(TICK_MS);

            let events = game.advance(&held.tick_input());

            for cue in &events.cues {
                debug!(?cue, "audio cue");
            }
            if let Some(symbol) = events.recorded {
                trace.push(symbol);
            }
            if events.trace_cleared {
                trace.clear();
            }
            if events.quit {
                info!("quit from fail screen");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_parses_seed_and_debug() {
        let args = vec![
            "--seed".to_string(),
            "12345".to_string(),
            "--debug".to_string(),
        ];
        let config = parse_args(&args).unwrap();
        assert_eq!(config.seed, 12345);
        assert!(config.debug_overlay);
    }

    #[test]
    fn parse_args_defaults() {
        let config = parse_args(&[]).unwrap();
        assert!(!config.debug_overlay);
    }

    #[test]
    fn parse_args_rejects_unknown() {
        let args = vec!["--bogus".to_string()];
        assert!(parse_args(&args).is_err());
    }

    #[test]
    fn parse_args_rejects_bad_seed() {
        let args = vec!["--seed".to_string(), "not-a-number".to_string()];
        assert!(parse_args(&args).is_err());
        let args = vec!["--seed".to_string()];
        assert!(parse_args(&args).is_err());
    }
}
