/// Cosmetic tasks: explosions, the game-over banner, and blinking stars.
/// None of these touch shared state.

use std::io;
use std::rc::Rc;

use crate::display::{draw_sprite, erase_sprite, Attr, Canvas};
use crate::frames::Frame;
use crate::input::Intent;
use crate::scheduler::{Control, Task};
use crate::world::World;

/// Ticks each explosion frame stays on screen.
const EXPLOSION_HOLD: u32 = 2;

/// A short fixed frame sequence drawn centered on the blast point, then done.
pub struct ExplosionTask {
    center_row: i32,
    center_col: i32,
    frames: Rc<Vec<Frame>>,
    index: usize,
    hold: u32,
}

impl ExplosionTask {
    pub fn new(center_row: i32, center_col: i32, frames: Rc<Vec<Frame>>) -> ExplosionTask {
        ExplosionTask {
            center_row,
            center_col,
            frames,
            index: 0,
            hold: 0,
        }
    }

    fn corner(&self, frame: &Frame) -> (i32, i32) {
        (
            self.center_row - frame.rows() as i32 / 2,
            self.center_col - frame.cols() as i32 / 2,
        )
    }
}

impl Task for ExplosionTask {
    fn step(
        &mut self,
        _world: &mut World,
        canvas: &mut dyn Canvas,
        _intent: Intent,
    ) -> io::Result<Control> {
        if self.index >= self.frames.len() {
            return Ok(Control::Done);
        }

        let frame = &self.frames[self.index];
        let (row, col) = self.corner(frame);
        if self.hold == 0 {
            draw_sprite(canvas, row, col, frame)?;
        }
        self.hold += 1;

        if self.hold >= EXPLOSION_HOLD {
            erase_sprite(canvas, row, col, frame)?;
            self.hold = 0;
            self.index += 1;
            if self.index >= self.frames.len() {
                return Ok(Control::Done);
            }
        }
        Ok(Control::Suspend)
    }
}

/// Redraws the centered banner every tick, forever, so falling sprites can
/// never wipe it.
pub struct GameOverTask {
    banner: Rc<Frame>,
}

impl GameOverTask {
    pub fn new(banner: Rc<Frame>) -> GameOverTask {
        GameOverTask { banner }
    }
}

impl Task for GameOverTask {
    fn step(
        &mut self,
        world: &mut World,
        canvas: &mut dyn Canvas,
        _intent: Intent,
    ) -> io::Result<Control> {
        let (center_row, center_col) = world.field.center();
        let row = center_row - self.banner.rows() as i32 / 2;
        let col = center_col - self.banner.cols() as i32 / 2;
        draw_sprite(canvas, row, col, &self.banner)?;
        Ok(Control::Suspend)
    }
}

// ── Background star ───────────────────────────────────────────────────────────

const BLINK_PHASES: [(Attr, u32); 4] = [
    (Attr::Dim, 20),
    (Attr::Normal, 3),
    (Attr::Bold, 5),
    (Attr::Normal, 3),
];

/// One decorative star cycling dim/normal/bold.  The initial offset
/// desynchronizes the field so the stars don't pulse in lockstep.
pub struct BlinkTask {
    row: i32,
    col: i32,
    symbol: char,
    wait: u32,
    phase: usize,
}

impl BlinkTask {
    pub fn new(row: i32, col: i32, symbol: char, offset: u32) -> BlinkTask {
        BlinkTask {
            row,
            col,
            symbol,
            wait: offset,
            phase: 0,
        }
    }
}

impl Task for BlinkTask {
    fn step(
        &mut self,
        _world: &mut World,
        canvas: &mut dyn Canvas,
        _intent: Intent,
    ) -> io::Result<Control> {
        if self.wait > 0 {
            self.wait -= 1;
            return Ok(Control::Suspend);
        }

        let (attr, hold) = BLINK_PHASES[self.phase];
        canvas.draw_glyph(self.row, self.col, self.symbol, attr)?;
        self.wait = hold - 1;
        self.phase = (self.phase + 1) % BLINK_PHASES.len();
        Ok(Control::Suspend)
    }
}
