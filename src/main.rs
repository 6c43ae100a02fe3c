//! Hoop Duel terminal runner (default binary).
//!
//! crossterm input, a framebuffer diff renderer, and a fire-and-forget
//! commentary gateway polled once per tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use hoop_duel::core::Game;
use hoop_duel::gateway::{Gateway, RESET_LINE, WELCOME_LINE};
use hoop_duel::input::{should_quit, InputTracker};
use hoop_duel::term::{GameView, TerminalRenderer, Viewport};
use hoop_duel::types::{ThrowAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn seed_from_env() -> u32 {
    std::env::var("HOOP_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos())
                .unwrap_or(1)
        })
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(seed_from_env());
    let mut gateway = Gateway::start_from_env();
    let mut commentary = WELCOME_LINE.to_string();

    let view = GameView::new();
    let mut tracker = InputTracker::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, &commentary, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = tracker.handle_key_press(key.code) {
                            apply(&mut game, &mut tracker, &mut commentary, action);
                        }
                    }
                    KeyEventKind::Repeat => {
                        tracker.refresh_hold(key.code);
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = tracker.handle_key_release(key.code) {
                            apply(&mut game, &mut tracker, &mut commentary, action);
                        }
                    }
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in tracker.update(TICK_MS) {
                apply(&mut game, &mut tracker, &mut commentary, action);
            }

            game.tick(TICK_MS);

            if let Some(event) = game.take_last_event() {
                gateway.describe(event);
            }
            if let Some(line) = gateway.try_recv() {
                commentary = line;
            }
        }
    }
}

fn apply(game: &mut Game, tracker: &mut InputTracker, commentary: &mut String, action: ThrowAction) {
    let applied = game.apply_action(action);
    if applied && action == ThrowAction::Reset {
        tracker.reset();
        *commentary = RESET_LINE.to_string();
    }
}
