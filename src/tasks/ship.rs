/// Ship controller — a two-state machine: `Flying` until the first obstacle
/// overlap, then `Destroyed` and no further ticks.

use std::io;
use std::rc::Rc;

use crate::clock;
use crate::collide::Rect;
use crate::display::{draw_sprite, erase_sprite, Canvas};
use crate::frames::Frame;
use crate::input::Intent;
use crate::physics::{clamp, update_speed};
use crate::scheduler::{Control, Task};
use crate::tasks::{ExplosionTask, FireTask, GameOverTask};
use crate::world::{Field, World};

#[derive(Clone, Copy, Debug, PartialEq)]
enum ShipState {
    Flying,
    Destroyed,
}

pub struct ShipTask {
    state: ShipState,
    row: i32,
    col: i32,
    row_speed: i32,
    col_speed: i32,
    /// Two poses, alternated every other tick.
    poses: [Frame; 2],
    explosion: Rc<Vec<Frame>>,
    banner: Rc<Frame>,
    ticks: u64,
    drawn: Option<(i32, i32, usize)>,
}

impl ShipTask {
    /// Place the ship at the center of the field.
    pub fn new(
        field: &Field,
        poses: [Frame; 2],
        explosion: Rc<Vec<Frame>>,
        banner: Rc<Frame>,
    ) -> ShipTask {
        let (rows, cols) = poses[0].size();
        let (center_row, center_col) = field.center();
        ShipTask {
            state: ShipState::Flying,
            row: center_row - rows as i32 / 2,
            col: center_col - cols as i32 / 2,
            row_speed: 0,
            col_speed: 0,
            poses,
            explosion,
            banner,
            ticks: 0,
            drawn: None,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.row_speed, self.col_speed)
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == ShipState::Destroyed
    }

    pub fn bounding_box(&self) -> Rect {
        let (rows, cols) = self.poses[0].size();
        Rect::new(self.row as f32, self.col, rows, cols)
    }
}

impl Task for ShipTask {
    fn step(
        &mut self,
        world: &mut World,
        canvas: &mut dyn Canvas,
        intent: Intent,
    ) -> io::Result<Control> {
        if let Some((row, col, pose)) = self.drawn.take() {
            erase_sprite(canvas, row, col, &self.poses[pose])?;
        }

        let (row_speed, col_speed) = update_speed(
            self.row_speed,
            self.col_speed,
            intent.row_direction,
            intent.col_direction,
        );

        let field = world.field;
        let (rows, cols) = self.poses[0].size();
        let new_row = clamp(
            self.row + row_speed,
            field.top(),
            field.bottom() - rows as i32,
        );
        let new_col = clamp(
            self.col + col_speed,
            field.left(),
            field.right() - cols as i32,
        );
        // Re-derive velocity from the clamp: hugging a wall zeroes motion
        // into it without zeroing motion away from it.
        self.row_speed = new_row - self.row;
        self.col_speed = new_col - self.col;
        self.row = new_row;
        self.col = new_col;

        if world.any_overlap(&self.bounding_box()) {
            self.state = ShipState::Destroyed;
            let (center_row, center_col) = self.bounding_box().center();
            world.spawn(Box::new(ExplosionTask::new(
                center_row,
                center_col,
                self.explosion.clone(),
            )));
            world.spawn(Box::new(GameOverTask::new(self.banner.clone())));
            return Ok(Control::Done);
        }

        if intent.fire && world.epoch >= clock::WEAPON_EPOCH {
            canvas.beep()?;
            world.spawn(Box::new(FireTask::new(
                (self.row - 1) as f32,
                (self.col + cols as i32 / 2) as f32,
            )));
        }

        let pose = ((self.ticks / 2) % 2) as usize;
        draw_sprite(canvas, self.row, self.col, &self.poses[pose])?;
        self.drawn = Some((self.row, self.col, pose));
        self.ticks += 1;
        Ok(Control::Suspend)
    }
}
