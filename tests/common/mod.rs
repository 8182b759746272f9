//! Shared test doubles: an in-memory canvas recording every drawn glyph.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io;

use space_patrol::display::{Attr, Canvas};

pub struct FakeCanvas {
    rows: u16,
    cols: u16,
    pub cells: HashMap<(i32, i32), (char, Attr)>,
    pub beeps: u32,
}

impl FakeCanvas {
    pub fn new(rows: u16, cols: u16) -> FakeCanvas {
        FakeCanvas {
            rows,
            cols,
            cells: HashMap::new(),
            beeps: 0,
        }
    }

    pub fn glyph_at(&self, row: i32, col: i32) -> Option<char> {
        self.cells.get(&(row, col)).map(|&(ch, _)| ch)
    }

    pub fn attr_at(&self, row: i32, col: i32) -> Option<Attr> {
        self.cells.get(&(row, col)).map(|&(_, attr)| attr)
    }

    fn in_range(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows as i32 && col >= 0 && col < self.cols as i32
    }
}

impl Canvas for FakeCanvas {
    fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    fn draw_glyph(&mut self, row: i32, col: i32, symbol: char, attr: Attr) -> io::Result<()> {
        // Clip silently, like the terminal canvas
        if self.in_range(row, col) {
            self.cells.insert((row, col), (symbol, attr));
        }
        Ok(())
    }

    fn erase_glyph(&mut self, row: i32, col: i32) -> io::Result<()> {
        self.cells.remove(&(row, col));
        Ok(())
    }

    fn beep(&mut self) -> io::Result<()> {
        self.beeps += 1;
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}
