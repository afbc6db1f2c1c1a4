//! Terminal falling-words runner (default binary).
//!
//! This is the primary gameplay entrypoint. It wires the word deck into the
//! round engine, the engine's spawns into the fall field, and the fall
//! field's boundary crossings back into the engine, at a fixed timestep.
//! Digit keys tap the correspondingly numbered falling word.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{debug, info, warn};

use tui_wordfall::core::{EngineEvent, RoundEngine, WordDeck};
use tui_wordfall::dataset;
use tui_wordfall::sim::FallField;
use tui_wordfall::term::{GameView, TerminalRenderer, Viewport};
use tui_wordfall::types::{ResultEvent, ResultKind, SPAWN_INTERVAL_MS, TICK_MS};

/// The result currently flashing center-field.
#[derive(Debug, Clone, Copy)]
struct Flash {
    event: ResultEvent,
    shown_at: Instant,
}

impl Flash {
    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= Duration::from_millis(self.event.duration_ms as u64)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let pairs = match std::env::args().nth(1) {
        Some(path) => dataset::load_pairs(&path)?,
        None => dataset::builtin_pairs(),
    };
    info!("loaded {} word pairs", pairs.len());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut engine = RoundEngine::new(Box::new(WordDeck::new(pairs, seed)));

    // Presentation subscribes to the engine's event stream; the runner never
    // interprets resolution returns itself.
    let flash: Arc<Mutex<Option<Flash>>> = Arc::new(Mutex::new(None));
    {
        let flash = Arc::clone(&flash);
        engine.subscribe(move |event| match event {
            EngineEvent::Spawned(word) => {
                debug!("spawned {} for '{}'", word.id, word.pair.source);
            }
            EngineEvent::Result(result) => {
                info!("result: {}", result.text);
                *flash.lock().unwrap() = Some(Flash {
                    event: *result,
                    shown_at: Instant::now(),
                });
            }
            EngineEvent::State(snap) => {
                debug!("lives={} score={} active={}", snap.lives, snap.score, snap.active.len());
            }
        });
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, &flash);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    engine: &mut RoundEngine,
    flash: &Arc<Mutex<Option<Flash>>>,
) -> Result<()> {
    let view = GameView;
    let mut field = FallField::new();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut spawn_timer_ms = SPAWN_INTERVAL_MS;

    loop {
        // Advance simulation once per fixed tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if !engine.is_terminal() {
                spawn_timer_ms += TICK_MS;
                if spawn_timer_ms >= SPAWN_INTERVAL_MS || engine.active_words().is_empty() {
                    spawn_timer_ms = 0;
                    match engine.spawn_word() {
                        Ok(word) => {
                            field.attach(&word);
                        }
                        Err(err) => {
                            // Deck exhausted or round already over; the
                            // engine has published whatever mattered.
                            info!("spawn stopped: {}", err);
                            field.clear();
                        }
                    }
                }

                for id in field.tick(TICK_MS) {
                    match engine.resolve_boundary(id) {
                        Ok(result) => {
                            if result.kind == ResultKind::GameOver {
                                field.clear();
                            }
                        }
                        Err(err) if err.is_race_loss() => {}
                        Err(err) => warn!("boundary resolution failed: {}", err),
                    }
                }
            }
        }

        // Render.
        let snap = engine.snapshot();
        let positions: Vec<_> = field.positions().collect();
        let current_flash = {
            let mut slot = flash.lock().unwrap();
            if slot.map_or(false, |f| f.expired()) {
                let finished = slot.take();
                // The game-over flash ran its full course; the round can be
                // dismissed now.
                if finished.map_or(false, |f| f.event.kind == ResultKind::GameOver) {
                    return Ok(());
                }
            }
            *slot
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(
            &snap,
            &positions,
            current_flash.as_ref().map(|f| &f.event),
            Viewport::new(w, h),
        );
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(ch) if ('1'..='9').contains(&ch) => {
                        tap(engine, &mut field, ch as usize - '1' as usize);
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Tap the `index`-th on-screen word (0-based).
///
/// A tap that loses the race against a boundary crossing is discarded with
/// no user-visible feedback.
fn tap(engine: &mut RoundEngine, field: &mut FallField, index: usize) {
    let Some(word) = engine.active_words().get(index).cloned() else {
        return;
    };

    match engine.resolve_tap(word.id, &word.candidate) {
        Ok(result) => {
            if result.kind == ResultKind::GameOver {
                field.clear();
            } else {
                field.detach(word.id);
            }
        }
        Err(err) if err.is_race_loss() => {}
        Err(err) => warn!("tap resolution failed: {}", err),
    }
}
