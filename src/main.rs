mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        MouseButton, MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use alien_invasion::config::Config;
use alien_invasion::session::{Session, TickEvent};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Smallest terminal that still fits a fleet, the HUD and the menu.
const MIN_COLUMNS: u16 = 40;
const MIN_ROWS: u16 = 20;

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// Min frames between shots while Space is held.
/// 8 frames @ 30 FPS ≈ 3.75 shots/sec (keeps the 3-bullet cap meaningful).
const SHOOT_COOLDOWN: u32 = 8;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let (columns, rows) = terminal::size()?;
    if columns < MIN_COLUMNS || rows < MIN_ROWS {
        eprintln!(
            "Terminal too small: need at least {}x{}, got {}x{}",
            MIN_COLUMNS, MIN_ROWS, columns, rows
        );
        return Ok(());
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(event::EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx, columns, rows);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(event::DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until an explicit quit.  One terminal session hosts any number
/// of games: the session goes Inactive on game over and the play button
/// starts the next game with the high score intact.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key.  Each frame the directional keys
/// still "fresh" (within `HOLD_WINDOW` frames) become the ship's
/// movement flags, so Space + A/D can be held simultaneously with no
/// interference on both enhancement-capable and classic terminals.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    columns: u16,
    rows: u16,
) -> std::io::Result<()> {
    // Borders eat two columns; HUD, two border rows and the hint eat four rows.
    let cfg = Config::new(columns as i32 - 2, rows as i32 - 4);
    let respawn_pause = cfg.respawn_pause;
    let mut session = Session::new(cfg);

    let stars = display::scatter_stars(&mut thread_rng(), columns, rows);
    let button = display::play_button(columns, rows);

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut shoot_cooldown: u32 = 0;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    // Press: record key + handle one-shot actions
                    KeyEventKind::Press => {
                        key_frame.insert(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => {
                                if !session.stats.game_active {
                                    start_game(out, &mut session)?;
                                }
                            }
                            _ => {}
                        }
                    }
                    // Repeat: refresh timestamp so key stays "held"
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                    }
                    // Release: remove key immediately (keyboard-enhancement path)
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    if !session.stats.game_active && button.contains(column as i32, row as i32) {
                        start_game(out, &mut session)?;
                    }
                }
                _ => {}
            }
        }

        // ── Held keys become the ship's movement flags ────────────────────────
        session.ship.moving_left = is_held(&key_frame, &KeyCode::Left, frame)
            || is_held(&key_frame, &KeyCode::Char('a'), frame)
            || is_held(&key_frame, &KeyCode::Char('A'), frame);
        session.ship.moving_right = is_held(&key_frame, &KeyCode::Right, frame)
            || is_held(&key_frame, &KeyCode::Char('d'), frame)
            || is_held(&key_frame, &KeyCode::Char('D'), frame);

        // Firing is throttled so holding Space doesn't drain all three
        // bullet slots in a single burst.
        if session.stats.game_active
            && shoot_cooldown == 0
            && is_held(&key_frame, &KeyCode::Char(' '), frame)
        {
            session.fire();
            shoot_cooldown = SHOOT_COOLDOWN;
        }
        shoot_cooldown = shoot_cooldown.saturating_sub(1);

        let outcome = session.advance();

        display::render(out, &session, &stars, &button)?;

        match outcome {
            TickEvent::ShipHit => {
                // Respawn pause: the loop blocks, then anything the player
                // pressed during the freeze is thrown away.
                thread::sleep(respawn_pause);
                while rx.try_recv().is_ok() {}
                key_frame.clear();
                session.ship.moving_left = false;
                session.ship.moving_right = false;
            }
            TickEvent::GameOver => {
                out.execute(cursor::Show)?;
            }
            TickEvent::None => {}
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

fn start_game<W: Write>(out: &mut W, session: &mut Session) -> std::io::Result<()> {
    session.start();
    out.execute(cursor::Hide)?;
    Ok(())
}
