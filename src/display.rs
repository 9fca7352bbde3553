//! Presentation layer — all terminal I/O lives here.
//!
//! The pixel buffer is shown with one upper-half-block glyph per terminal
//! cell: the foreground colour is the upper pixel, the background colour the
//! lower one.  Buffers larger than the terminal are downsampled by an integer
//! factor.

use std::io::Write;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::buffer::{unpack, PixelBuffer};
use crate::entities::{GameState, GameStatus, Level};

/// Accepts a finished frame once per tick.
pub trait Present {
    fn present(&mut self, buffer: &PixelBuffer, hud: &Hud) -> anyhow::Result<()>;
}

/// Text shown under the playfield.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub lives: u32,
    pub level: Level,
    pub status: GameStatus,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            lives: state.player.lives,
            level: state.level,
            status: state.status.clone(),
        }
    }
}

pub fn hud_line(hud: &Hud) -> String {
    let level = match hud.level {
        Level::Easy => "[ EASY ]",
        Level::Medium => "[ MEDIUM ]",
        Level::Hard => "[ HARD ]",
    };
    let status = match hud.status {
        GameStatus::Playing => "",
        GameStatus::GameOver => "  GAME OVER - R: play again  Q: quit",
        GameStatus::Cleared => "  WAVE CLEARED - R: play again  Q: quit",
    };
    format!(
        "Score:{:>6}  Lives:{}  {}{}",
        hud.score,
        "♥".repeat(hud.lives as usize),
        level,
        status
    )
}

// ── Scaling ──────────────────────────────────────────────────────────────────

/// Smallest integer scale at which a `width`×`height` buffer fits into
/// `cols`×`pixel_rows` output pixels.
pub fn fit_scale(width: usize, height: usize, cols: usize, pixel_rows: usize) -> usize {
    let largest = width.max(height).max(1);
    (1..largest)
        .find(|&s| width.div_ceil(s) <= cols && height.div_ceil(s) <= pixel_rows)
        .unwrap_or(largest)
}

/// Shrink the buffer by `scale` in both axes, returning rows top-down.
///
/// Each output pixel takes the first pixel in its block that is not
/// `background`, so single-pixel bullets stay visible.
pub fn downsample(buffer: &PixelBuffer, scale: usize, background: u32) -> Vec<u32> {
    let (w, h) = (buffer.width(), buffer.height());
    let (out_w, out_h) = (w.div_ceil(scale), h.div_ceil(scale));
    let mut out = Vec::with_capacity(out_w * out_h);

    for oy in 0..out_h {
        for ox in 0..out_w {
            let color = (oy * scale..((oy + 1) * scale).min(h))
                .flat_map(|ty| {
                    // Buffer row 0 is the bottom of the screen.
                    let y = h - 1 - ty;
                    (ox * scale..((ox + 1) * scale).min(w)).filter_map(move |x| buffer.get(x, y))
                })
                .find(|&p| p != background)
                .unwrap_or(background);
            out.push(color);
        }
    }
    out
}

fn to_color(pixel: u32) -> Color {
    let (r, g, b) = unpack(pixel);
    Color::Rgb { r, g, b }
}

// ── Terminal presenter ───────────────────────────────────────────────────────

pub struct TerminalPresenter<W: Write> {
    out: W,
    background: u32,
    scale: usize,
    keyboard_enhanced: bool,
    restored: bool,
}

impl<W: Write> TerminalPresenter<W> {
    /// Switch the terminal into raw mode on the alternate screen.
    pub fn new(mut out: W, background: u32) -> anyhow::Result<Self> {
        terminal::enable_raw_mode()?;
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;

        // Request key-release (and key-repeat) events where the terminal
        // supports them; others only ever send presses.
        let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
            && out
                .execute(PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
                ))
                .is_ok();

        Ok(Self {
            out,
            background,
            scale: 0,
            keyboard_enhanced,
            restored: false,
        })
    }

    /// Whether the terminal reports key releases.
    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }

    /// Put the terminal back the way we found it.  Safe to call twice.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(style::ResetColor);
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }

    fn draw_pixels(&mut self, pixels: &[u32], w: usize, h: usize) -> std::io::Result<()> {
        let mut fg = None;
        let mut bg = None;

        for cy in 0..h.div_ceil(2) {
            self.out.queue(cursor::MoveTo(0, cy as u16))?;
            for cx in 0..w {
                let upper = pixels[2 * cy * w + cx];
                let lower = if 2 * cy + 1 < h {
                    pixels[(2 * cy + 1) * w + cx]
                } else {
                    self.background
                };
                // Only emit colour changes.
                if fg != Some(upper) {
                    self.out.queue(style::SetForegroundColor(to_color(upper)))?;
                    fg = Some(upper);
                }
                if bg != Some(lower) {
                    self.out.queue(style::SetBackgroundColor(to_color(lower)))?;
                    bg = Some(lower);
                }
                self.out.queue(Print('▀'))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        Ok(())
    }

    fn draw_hud(&mut self, hud: &Hud, row: u16) -> std::io::Result<()> {
        let color = match hud.status {
            GameStatus::Playing => Color::Yellow,
            GameStatus::GameOver => Color::Red,
            GameStatus::Cleared => Color::Green,
        };
        self.out.queue(cursor::MoveTo(0, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(hud_line(hud)))?;
        self.out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        self.out.queue(style::ResetColor)?;
        Ok(())
    }
}

impl<W: Write> Present for TerminalPresenter<W> {
    fn present(&mut self, buffer: &PixelBuffer, hud: &Hud) -> anyhow::Result<()> {
        let (cols, rows) = terminal::size()?;
        // Reserve the last row for the HUD.
        let pixel_rows = rows.saturating_sub(1) as usize * 2;
        let scale = fit_scale(buffer.width(), buffer.height(), cols as usize, pixel_rows);
        if scale != self.scale {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            self.scale = scale;
        }

        let (w, h) = (buffer.width().div_ceil(scale), buffer.height().div_ceil(scale));
        let pixels = downsample(buffer, scale, self.background);
        self.draw_pixels(&pixels, w, h)?;
        self.draw_hud(hud, h.div_ceil(2) as u16)?;

        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalPresenter<W> {
    fn drop(&mut self) {
        self.restore();
    }
}
