//! Terminal 2048 runner (default binary).
//!
//! Crossterm input and a framebuffer renderer; the board only redraws
//! between events, so frames are cheap full redraws.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::GameState;
use tui_2048::events::{EventTracker, GameEvent};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::services::{achievements, RecordsStore};
use tui_2048::term::{GameView, HudInfo, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, GridSize};

struct Options {
    size: GridSize,
    seed: u64,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut size = GridSize::FourByFour;
    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(1);

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --size"))?;
                let cells = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --size value: {}", v))?;
                size = GridSize::from_cells(cells)
                    .ok_or_else(|| anyhow!("unsupported --size {} (use 4, 5, or 6)", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Options { size, seed })
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, options);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, options: Options) -> Result<()> {
    let mut store = RecordsStore::open(RecordsStore::default_path());
    let mut game = GameState::new(options.size.cells(), options.seed)?;
    let mut tracker = EventTracker::new();
    let view = GameView::default();

    unlock_for_event(tracker.start(), &mut store);
    let _ = store.save();

    // Per-game clock, plus the persistent total that drives the
    // play-time achievements.
    let mut game_secs: u64 = 0;
    let mut play_clock = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = HudInfo {
            high_score: store.high_score(options.size),
            play_time_secs: game_secs,
        };
        let fb = view.render(&game.snapshot(), &hud, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with a short timeout so the clock advances while idle.
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        break;
                    }

                    if let Some(action) = handle_key_event(key) {
                        match action {
                            GameAction::Move(direction) => {
                                let outcome = game.apply_move(direction);
                                if outcome.effective {
                                    store.submit_score(options.size, game.score());
                                    for ev in
                                        tracker.after_move(&outcome, game.board().max_tile())
                                    {
                                        unlock_for_event(ev, &mut store);
                                    }
                                }
                            }
                            GameAction::NewGame => {
                                store.submit_score(options.size, game.score());
                                game.new_game();
                                unlock_for_event(tracker.start(), &mut store);
                                game_secs = 0;
                                play_clock = Instant::now();
                            }
                            GameAction::ContinueEndless => {
                                if game.game_won() {
                                    game.set_endless_mode(true);
                                }
                            }
                        }

                        // Records writes are best-effort; a failed save
                        // never interrupts play.
                        let _ = store.save();
                    }
                }
            }
        }

        // Accumulate play time while the game is live.
        if game.game_over() {
            play_clock = Instant::now();
        } else {
            let elapsed = play_clock.elapsed().as_secs();
            if elapsed > 0 {
                game_secs += elapsed;
                play_clock += Duration::from_secs(elapsed);
                let total = store.add_play_time(elapsed);
                for id in achievements::for_play_time(total) {
                    store.unlock(id);
                }
            }
        }
    }

    store.submit_score(options.size, game.score());
    store.save()?;
    Ok(())
}

fn unlock_for_event(event: GameEvent, store: &mut RecordsStore) {
    if let Some(id) = achievements::for_event(event) {
        store.unlock(id);
    }
}
