//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! session; no game logic is performed.  The play area occupies the
//! terminal interior: row 0 is the HUD, rows 1 and height-2 are the
//! border, the last row is the controls hint.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use rand::Rng;

use alien_invasion::entities::{Rect, Sprite};
use alien_invasion::session::Session;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_STAR: Color = Color::DarkGrey;
const C_SHIP: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;
const C_SCORE: Color = Color::Yellow;
const C_LIVES: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;
const C_BUTTON: Color = Color::Green;
const C_TITLE: Color = Color::Cyan;

/// One background star: terminal column, row, glyph.
pub type Star = (u16, u16, char);

/// Scatter a sparse starfield over the play rows.  Presentation only;
/// generated once at startup so the sky holds still between frames.
pub fn scatter_stars(rng: &mut impl Rng, columns: u16, rows: u16) -> Vec<Star> {
    let count = (columns as usize * rows as usize) / 40;
    (0..count)
        .map(|_| {
            let col = rng.gen_range(1..columns.saturating_sub(1));
            let row = rng.gen_range(2..rows.saturating_sub(2));
            let glyph = if rng.gen_bool(0.15) { '✦' } else { '·' };
            (col, row, glyph)
        })
        .collect()
}

/// The clickable play control, in terminal coordinates.
pub fn play_button(columns: u16, rows: u16) -> Rect {
    let w = 14;
    let h = 3;
    Rect::new(
        (columns as i32 - w) / 2,
        (rows as i32 - h) / 2,
        w,
        h,
    )
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    session: &Session,
    stars: &[Star],
    button: &Rect,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let tw = session.cfg.screen_width as u16 + 2;
    let th = session.cfg.screen_height as u16 + 4;

    draw_stars(out, stars)?;
    draw_border(out, tw, th)?;
    draw_hud(out, session, tw)?;

    // Painter's order: bullets behind the ship, fleet on top, overlays last.
    for bullet in &session.bullets {
        draw_bullet(out, &bullet.bounds())?;
    }
    draw_ship(out, &session.ship.bounds())?;
    for alien in &session.fleet.aliens {
        draw_alien(out, &alien.bounds(), session.cfg.screen_height)?;
    }

    if !session.stats.game_active {
        if session.stats.ships_left == 0 {
            draw_game_over(out, session, tw, button)?;
        } else {
            draw_title(out, tw, button)?;
        }
        draw_play_button(out, button)?;
    }

    draw_controls_hint(out, th)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, th.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Play-area cell → terminal cell (1 column of border, HUD + border rows).
fn term(x: i32, y: i32) -> (u16, u16) {
    ((x + 1).max(0) as u16, (y + 2).max(0) as u16)
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_stars<W: Write>(out: &mut W, stars: &[Star]) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STAR))?;
    for &(col, row, glyph) in stars {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, tw: u16, th: u16) -> std::io::Result<()> {
    let inner = tw.saturating_sub(2) as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(inner))))?;
    out.queue(cursor::MoveTo(0, th.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(inner))))?;

    for row in 2..th.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(tw.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

/// Score readout: rounded to the nearest ten and grouped with
/// thousands separators.
fn format_score(score: u32) -> String {
    let rounded = (score + 5) / 10 * 10;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn draw_hud<W: Write>(out: &mut W, session: &Session, tw: u16) -> std::io::Result<()> {
    let stats = &session.stats;

    // Ships left as a row of ship icons, top left
    let ships: String = "▲ ".repeat(stats.ships_left as usize);
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_LIVES))?;
    out.queue(Print(ships.trim_end()))?;

    // High score, centered
    let high = format!("High Score: {}", format_score(stats.high_score));
    let hx = (tw / 2).saturating_sub(high.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(hx, 0))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(&high))?;

    // Score and stage, right-aligned
    let right = format!(
        "Score: {}  Stage: {}",
        format_score(stats.score),
        stats.level
    );
    let rx = tw.saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&right))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(out: &mut W, at: &Rect) -> std::io::Result<()> {
    // 2-row, 3-column sprite:
    //    ▲      ← tip
    //   /█\     ← fuselage + wings
    out.queue(style::SetForegroundColor(C_SHIP))?;

    let (tip_col, tip_row) = term(at.center_x(), at.y);
    out.queue(cursor::MoveTo(tip_col, tip_row))?;
    out.queue(Print("▲"))?;

    let (col, row) = term(at.x, at.y + 1);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("/█\\"))?;

    Ok(())
}

fn draw_alien<W: Write>(out: &mut W, at: &Rect, play_height: i32) -> std::io::Result<()> {
    // 2-row, 3-column sprite:
    //   ◢█◣    ← hull
    //   ▌ ▐    ← landing struts
    out.queue(style::SetForegroundColor(C_ALIEN))?;

    let (col, row) = term(at.x, at.y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("◢█◣"))?;

    if at.y + 1 < play_height {
        let (col, row) = term(at.x, at.y + 1);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("▌ ▐"))?;
    }
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, at: &Rect) -> std::io::Result<()> {
    let (col, row) = term(at.x, at.y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_BULLET))?;
    out.queue(Print("║"))?;
    Ok(())
}

// ── Menu overlays ─────────────────────────────────────────────────────────────

fn draw_title<W: Write>(out: &mut W, tw: u16, button: &Rect) -> std::io::Result<()> {
    let title = "★  ALIEN  INVASION  ★";
    let col = (tw / 2).saturating_sub(title.chars().count() as u16 / 2);
    let row = (button.y as u16).saturating_sub(3);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;
    Ok(())
}

fn draw_play_button<W: Write>(out: &mut W, button: &Rect) -> std::io::Result<()> {
    let inner = button.w.saturating_sub(2) as usize;
    let label = "PLAY";
    let pad_left = (inner - label.len()) / 2;
    let pad_right = inner - label.len() - pad_left;

    out.queue(style::SetForegroundColor(C_BUTTON))?;
    out.queue(cursor::MoveTo(button.x as u16, button.y as u16))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(inner))))?;
    out.queue(cursor::MoveTo(button.x as u16, button.y as u16 + 1))?;
    out.queue(Print(format!(
        "│{}{}{}│",
        " ".repeat(pad_left),
        label,
        " ".repeat(pad_right)
    )))?;
    out.queue(cursor::MoveTo(button.x as u16, button.y as u16 + 2))?;
    out.queue(Print(format!("└{}┘", "─".repeat(inner))))?;

    let prompt = "Click PLAY or press P to start";
    let col = (button.x as u16 + button.w as u16 / 2).saturating_sub(prompt.len() as u16 / 2);
    out.queue(cursor::MoveTo(col, button.bottom() as u16 + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(prompt))?;
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    session: &Session,
    tw: u16,
    button: &Rect,
) -> std::io::Result<()> {
    let stats = &session.stats;
    let score_line = format!("Final Score: {:>6}", stats.score);
    let new_best = stats.score >= stats.high_score && stats.score > 0;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>6} ★", stats.high_score)
    } else {
        format!("Best Score:  {:>6}", stats.high_score)
    };

    let box_lines = [
        "╔════════════════════╗",
        "║     GAME  OVER     ║",
        "╚════════════════════╝",
    ];

    let cx = tw / 2;
    let start_row = (button.y as u16).saturating_sub(6);

    for (i, msg) in box_lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(Color::Red))?;
        out.queue(Print(*msg))?;
    }

    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, start_row + 3))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(&score_line))?;

    let col = cx.saturating_sub(best_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, start_row + 4))?;
    out.queue(style::SetForegroundColor(if new_best {
        C_SCORE
    } else {
        C_HINT
    }))?;
    out.queue(Print(&best_line))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, th: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, th.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Fire   P : Play   Q : Quit"))?;
    Ok(())
}
