/// Rendering surface — all terminal I/O lives here.
///
/// Tasks draw through the `Canvas` trait, never through crossterm directly,
/// so the whole game runs against a fake canvas in tests.  The terminal
/// implementation clips out-of-range coordinates silently; the core never
/// has to defend against boundary drift beyond its own clamping.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Attribute, Print},
    QueueableCommand,
};

use crate::frames::Frame;

/// Display attribute for a glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Attr {
    Dim,
    Normal,
    Bold,
}

pub trait Canvas {
    /// (rows, cols) of the whole surface.
    fn dimensions(&self) -> (u16, u16);

    /// Draw one glyph.  Out-of-range coordinates are ignored.
    fn draw_glyph(&mut self, row: i32, col: i32, symbol: char, attr: Attr) -> io::Result<()>;

    /// Blank one cell.  Out-of-range coordinates are ignored.
    fn erase_glyph(&mut self, row: i32, col: i32) -> io::Result<()>;

    /// One discrete audible cue.
    fn beep(&mut self) -> io::Result<()>;

    /// Flush the frame to the display.
    fn present(&mut self) -> io::Result<()>;
}

// ── Sprite helpers ────────────────────────────────────────────────────────────

/// Draw a frame with its top-left corner at (row, col).  Space cells are
/// transparent and leave the surface untouched.
pub fn draw_sprite(canvas: &mut dyn Canvas, row: i32, col: i32, frame: &Frame) -> io::Result<()> {
    for (dr, dc, ch) in frame.glyphs() {
        canvas.draw_glyph(row + dr as i32, col + dc as i32, ch, Attr::Normal)?;
    }
    Ok(())
}

/// Blank every cell a frame drew (its non-space glyphs only).
pub fn erase_sprite(canvas: &mut dyn Canvas, row: i32, col: i32, frame: &Frame) -> io::Result<()> {
    for (dr, dc, _) in frame.glyphs() {
        canvas.erase_glyph(row + dr as i32, col + dc as i32)?;
    }
    Ok(())
}

/// Draw a text line starting at (row, col).
pub fn draw_text(canvas: &mut dyn Canvas, row: i32, col: i32, text: &str) -> io::Result<()> {
    for (i, ch) in text.chars().enumerate() {
        canvas.draw_glyph(row, col + i as i32, ch, Attr::Normal)?;
    }
    Ok(())
}

/// Blank a text line's cells.
pub fn erase_text(canvas: &mut dyn Canvas, row: i32, col: i32, len: usize) -> io::Result<()> {
    for i in 0..len {
        canvas.erase_glyph(row, col + i as i32)?;
    }
    Ok(())
}

/// Draw the static field border: a box from row 1 to the second-to-last row,
/// leaving row 0 free for the caption ticker.
pub fn draw_border(canvas: &mut dyn Canvas) -> io::Result<()> {
    let (rows, cols) = canvas.dimensions();
    let (rows, cols) = (rows as i32, cols as i32);

    canvas.draw_glyph(1, 0, '┌', Attr::Normal)?;
    canvas.draw_glyph(1, cols - 1, '┐', Attr::Normal)?;
    canvas.draw_glyph(rows - 2, 0, '└', Attr::Normal)?;
    canvas.draw_glyph(rows - 2, cols - 1, '┘', Attr::Normal)?;
    for col in 1..cols - 1 {
        canvas.draw_glyph(1, col, '─', Attr::Normal)?;
        canvas.draw_glyph(rows - 2, col, '─', Attr::Normal)?;
    }
    for row in 2..rows - 2 {
        canvas.draw_glyph(row, 0, '│', Attr::Normal)?;
        canvas.draw_glyph(row, cols - 1, '│', Attr::Normal)?;
    }
    Ok(())
}

// ── Terminal canvas ───────────────────────────────────────────────────────────

/// Crossterm-backed canvas.  Commands are queued on the writer and flushed
/// once per tick by `present`.
pub struct TermCanvas<W: Write> {
    out: W,
    rows: u16,
    cols: u16,
}

impl<W: Write> TermCanvas<W> {
    pub fn new(out: W, rows: u16, cols: u16) -> TermCanvas<W> {
        TermCanvas { out, rows, cols }
    }

    fn in_range(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows as i32 && col >= 0 && col < self.cols as i32
    }
}

impl<W: Write> Canvas for TermCanvas<W> {
    fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    fn draw_glyph(&mut self, row: i32, col: i32, symbol: char, attr: Attr) -> io::Result<()> {
        if !self.in_range(row, col) {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(col as u16, row as u16))?;
        match attr {
            Attr::Dim => {
                self.out.queue(style::SetAttribute(Attribute::Dim))?;
            }
            Attr::Bold => {
                self.out.queue(style::SetAttribute(Attribute::Bold))?;
            }
            Attr::Normal => {}
        }
        self.out.queue(Print(symbol))?;
        if attr != Attr::Normal {
            self.out.queue(style::SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    fn erase_glyph(&mut self, row: i32, col: i32) -> io::Result<()> {
        if !self.in_range(row, col) {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(col as u16, row as u16))?;
        self.out.queue(Print(' '))?;
        Ok(())
    }

    fn beep(&mut self) -> io::Result<()> {
        self.out.queue(Print('\u{7}'))?;
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        // Park the cursor somewhere harmless before flushing
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
