/// The difficulty clock and its caption ticker.

use std::io;

use crate::clock::{self, TICKS_PER_EPOCH};
use crate::display::{draw_text, erase_text, Canvas};
use crate::input::Intent;
use crate::scheduler::{Control, Task};
use crate::world::World;

/// Advances the shared epoch once every `TICKS_PER_EPOCH` ticks, forever.
/// The only writer of `world.epoch`.
pub struct EpochClockTask {
    ticks: u32,
}

impl EpochClockTask {
    pub fn new() -> EpochClockTask {
        EpochClockTask { ticks: 0 }
    }
}

impl Default for EpochClockTask {
    fn default() -> EpochClockTask {
        EpochClockTask::new()
    }
}

impl Task for EpochClockTask {
    fn step(
        &mut self,
        world: &mut World,
        _canvas: &mut dyn Canvas,
        _intent: Intent,
    ) -> io::Result<Control> {
        self.ticks += 1;
        if self.ticks % TICKS_PER_EPOCH == 0 {
            world.epoch += 1;
        }
        Ok(Control::Suspend)
    }
}

/// Redraws the epoch caption centered on the top row, erasing the previous
/// text first so a shrinking caption leaves no smear.
pub struct CaptionTask {
    drawn: Option<(i32, usize)>,
}

impl CaptionTask {
    pub fn new() -> CaptionTask {
        CaptionTask { drawn: None }
    }
}

impl Default for CaptionTask {
    fn default() -> CaptionTask {
        CaptionTask::new()
    }
}

impl Task for CaptionTask {
    fn step(
        &mut self,
        world: &mut World,
        canvas: &mut dyn Canvas,
        _intent: Intent,
    ) -> io::Result<Control> {
        if let Some((col, len)) = self.drawn.take() {
            erase_text(canvas, 0, col, len)?;
        }

        let text = clock::caption(world.epoch);
        let len = text.chars().count();
        let (_, cols) = canvas.dimensions();
        let col = (cols as i32 / 2 - len as i32 / 2).max(0);
        draw_text(canvas, 0, col, &text)?;
        self.drawn = Some((col, len));
        Ok(Control::Suspend)
    }
}
