/// Textual sprite frames — pure data, no terminal I/O.
///
/// A `Frame` is a rectangular-ish grid of glyphs parsed from newline-
/// separated text.  Lines may be ragged; the frame width is the widest
/// line.  Space cells are transparent when drawn.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("frame text is empty")]
    Empty,
    #[error("frame text contains a control character at row {0}")]
    ControlChar(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    lines: Vec<Vec<char>>,
    rows: u16,
    cols: u16,
}

impl Frame {
    /// Parse sprite text into a frame.  Leading/trailing blank lines are
    /// dropped; interior blank lines are kept (they are transparent rows).
    pub fn parse(text: &str) -> Result<Frame, FrameError> {
        let raw: Vec<&str> = text.lines().collect();
        let first = raw.iter().position(|l| !l.trim().is_empty());
        let last = raw.iter().rposition(|l| !l.trim().is_empty());
        let (first, last) = match (first, last) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(FrameError::Empty),
        };

        let mut lines = Vec::with_capacity(last - first + 1);
        for (i, line) in raw[first..=last].iter().enumerate() {
            if line.chars().any(|c| c.is_control()) {
                return Err(FrameError::ControlChar(i));
            }
            lines.push(line.chars().collect::<Vec<char>>());
        }

        let rows = lines.len() as u16;
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0) as u16;
        if cols == 0 {
            return Err(FrameError::Empty);
        }
        Ok(Frame { lines, rows, cols })
    }

    /// Row/column extent of the sprite.
    pub fn size(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Iterate every non-space glyph as (row offset, col offset, glyph).
    pub fn glyphs(&self) -> impl Iterator<Item = (u16, u16, char)> + '_ {
        self.lines.iter().enumerate().flat_map(|(r, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, &c)| c != ' ')
                .map(move |(c, &ch)| (r as u16, c as u16, ch))
        })
    }
}
