/// Falling obstacles and their spawner.
///
/// Each live obstacle is owned by exactly one `GarbageTask`; the task
/// registers the bounding box when it is created and removes it on either
/// exit path (destroyed by a shot, or fallen past the field bottom).

use std::io;
use std::rc::Rc;

use rand::Rng;

use crate::clock;
use crate::collide::Rect;
use crate::display::{draw_sprite, erase_sprite, Canvas};
use crate::frames::Frame;
use crate::input::Intent;
use crate::scheduler::{Control, Task};
use crate::tasks::ExplosionTask;
use crate::world::{ObstacleId, World};

/// Fall rate, rows per tick.
const FALL_SPEED: f32 = 0.5;

pub struct GarbageTask {
    id: ObstacleId,
    frame: Rc<Frame>,
    explosion: Rc<Vec<Frame>>,
    row: f32,
    col: i32,
    speed: f32,
    drawn: Option<i32>,
}

impl GarbageTask {
    /// Register the obstacle in the world and build its owning task.  The
    /// caller is responsible for admitting the task to the scheduler.
    pub fn register(
        world: &mut World,
        col: i32,
        frame: Rc<Frame>,
        explosion: Rc<Vec<Frame>>,
    ) -> GarbageTask {
        GarbageTask::register_with_speed(world, col, frame, explosion, FALL_SPEED)
    }

    pub fn register_with_speed(
        world: &mut World,
        col: i32,
        frame: Rc<Frame>,
        explosion: Rc<Vec<Frame>>,
        speed: f32,
    ) -> GarbageTask {
        let (rows, cols) = frame.size();
        let row = world.field.top() as f32;
        let id = world.add_obstacle(Rect::new(row, col, rows, cols));
        GarbageTask {
            id,
            frame,
            explosion,
            row,
            col,
            speed,
            drawn: None,
        }
    }

    pub fn id(&self) -> ObstacleId {
        self.id
    }

    pub fn row(&self) -> f32 {
        self.row
    }
}

impl Task for GarbageTask {
    fn step(
        &mut self,
        world: &mut World,
        canvas: &mut dyn Canvas,
        _intent: Intent,
    ) -> io::Result<Control> {
        // Destroyed-by-projectile path: consume the mark, explode in place.
        if world.take_mark(self.id) {
            if let Some(row) = self.drawn.take() {
                erase_sprite(canvas, row, self.col, &self.frame)?;
            }
            world.remove_obstacle(self.id);
            let rect = Rect::new(self.row, self.col, self.frame.rows(), self.frame.cols());
            let (center_row, center_col) = rect.center();
            world.spawn(Box::new(ExplosionTask::new(
                center_row,
                center_col,
                self.explosion.clone(),
            )));
            return Ok(Control::Done);
        }

        if let Some(row) = self.drawn.take() {
            erase_sprite(canvas, row, self.col, &self.frame)?;
        }

        // Off-field path: cleanup is unconditional, so neither exit leaks
        // a registry entry.
        if self.row >= world.field.bottom() as f32 {
            world.remove_obstacle(self.id);
            return Ok(Control::Done);
        }

        let row = self.row.round() as i32;
        draw_sprite(canvas, row, self.col, &self.frame)?;
        self.drawn = Some(row);

        self.row += self.speed;
        world.set_obstacle_row(self.id, self.row);
        Ok(Control::Suspend)
    }
}

// ── Spawner ───────────────────────────────────────────────────────────────────

/// Admits a new garbage task on the clock-derived interval.  Idles one tick
/// at a time while the epoch is still below the spawning threshold.
pub struct SpawnerTask {
    garbage: Vec<Rc<Frame>>,
    explosion: Rc<Vec<Frame>>,
    countdown: u32,
}

impl SpawnerTask {
    pub fn new(garbage: Vec<Rc<Frame>>, explosion: Rc<Vec<Frame>>) -> SpawnerTask {
        SpawnerTask {
            garbage,
            explosion,
            countdown: 0,
        }
    }
}

impl Task for SpawnerTask {
    fn step(
        &mut self,
        world: &mut World,
        _canvas: &mut dyn Canvas,
        _intent: Intent,
    ) -> io::Result<Control> {
        let interval = match clock::spawn_interval(world.epoch) {
            Some(interval) => interval,
            None => return Ok(Control::Suspend),
        };

        if self.countdown == 0 {
            let frame = self.garbage[world.rng.gen_range(0..self.garbage.len())].clone();
            let field = world.field;
            let max_col = (field.right() - frame.cols() as i32).max(field.left());
            let col = world.rng.gen_range(field.left()..=max_col);
            let task = GarbageTask::register(world, col, frame, self.explosion.clone());
            world.spawn(Box::new(task));
            self.countdown = interval;
        }
        self.countdown -= 1;
        Ok(Control::Suspend)
    }
}
