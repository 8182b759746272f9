/// Cooperative task scheduler.
///
/// One tick resumes every task that was live at the start of that tick,
/// exactly once, in registration order.  Tasks spawned during a tick sit in
/// the world's pending buffer and join the list at the tick boundary, so the
/// live list is never mutated while it is being walked.

use std::io;

use crate::display::Canvas;
use crate::input::Intent;
use crate::world::World;

/// What a resumed task wants next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    /// Run again next tick.
    Suspend,
    /// Remove this task; it will never be resumed.
    Done,
}

/// A resumable unit of behavior, advanced once per tick.
///
/// `step` must return promptly — there is no preemption, so a stalled task
/// stalls the whole frame.  New tasks are spawned through `world.spawn`,
/// never by touching the scheduler directly.  Errors propagate: a failing
/// task is a defect, and masking it would desynchronize the registry.
pub trait Task {
    fn step(
        &mut self,
        world: &mut World,
        canvas: &mut dyn Canvas,
        intent: Intent,
    ) -> io::Result<Control>;
}

pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
}

impl Scheduler {
    pub fn new() -> Scheduler {
        Scheduler { tasks: Vec::new() }
    }

    /// Seed a task directly; it runs starting with the next tick.
    pub fn admit(&mut self, task: Box<dyn Task>) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Resume every task live at tick start, drop completed ones, then admit
    /// everything spawned during the tick.
    pub fn tick(
        &mut self,
        world: &mut World,
        canvas: &mut dyn Canvas,
        intent: Intent,
    ) -> io::Result<()> {
        // Snapshot: only indices that existed at tick start are resumed.
        let live = self.tasks.len();
        let mut done = vec![false; live];

        for (i, flag) in done.iter_mut().enumerate() {
            if self.tasks[i].step(world, canvas, intent)? == Control::Done {
                *flag = true;
            }
        }

        let mut i = 0;
        self.tasks.retain(|_| {
            let keep = !done[i];
            i += 1;
            keep
        });

        let mut admitted = world.drain_pending();
        self.tasks.append(&mut admitted);
        Ok(())
    }
}

impl Default for Scheduler {
    fn default() -> Scheduler {
        Scheduler::new()
    }
}
