/// Projectile — flies along a fixed sub-unit velocity vector until it leaves
/// the field or lands inside an obstacle's box.

use std::io;

use crate::display::{Attr, Canvas};
use crate::input::Intent;
use crate::scheduler::{Control, Task};
use crate::world::World;

/// Default climb rate, rows per tick.
const DEFAULT_ROW_SPEED: f32 = -0.3;

pub struct FireTask {
    row: f32,
    col: f32,
    row_speed: f32,
    col_speed: f32,
    symbol: char,
    drawn: Option<(i32, i32)>,
}

impl FireTask {
    /// A shot travelling straight up.
    pub fn new(row: f32, col: f32) -> FireTask {
        FireTask::with_speed(row, col, DEFAULT_ROW_SPEED, 0.0)
    }

    pub fn with_speed(row: f32, col: f32, row_speed: f32, col_speed: f32) -> FireTask {
        FireTask {
            row,
            col,
            row_speed,
            col_speed,
            symbol: if col_speed != 0.0 { '-' } else { '|' },
            drawn: None,
        }
    }
}

impl Task for FireTask {
    fn step(
        &mut self,
        world: &mut World,
        canvas: &mut dyn Canvas,
        _intent: Intent,
    ) -> io::Result<Control> {
        if let Some((row, col)) = self.drawn.take() {
            canvas.erase_glyph(row, col)?;
            self.row += self.row_speed;
            self.col += self.col_speed;
        }

        let row = self.row.round() as i32;
        let col = self.col.round() as i32;

        if !world.field.contains(row, col) {
            return Ok(Control::Done);
        }

        // Consumed on the first obstacle hit; never marks more than one.
        if let Some(id) = world.obstacle_at(row, col) {
            world.mark_destroyed(id);
            return Ok(Control::Done);
        }

        canvas.draw_glyph(row, col, self.symbol, Attr::Normal)?;
        self.drawn = Some((row, col));
        Ok(Control::Suspend)
    }
}
