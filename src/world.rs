/// Shared game state — the one value every task receives by reference.
///
/// Exactly three things are shared across behaviors: the obstacle registry,
/// the collision-mark set, and the difficulty epoch.  Everything else a task
/// keeps to itself.  The spawn buffer is how tasks admit new tasks without
/// ever touching the scheduler's live list mid-tick.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collide::{rect_contains, rects_overlap, Rect};
use crate::scheduler::Task;

/// Identity of a live obstacle, stable across its whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObstacleId(u64);

/// Playable field geometry.  The caption row (0) and the border box are
/// outside the interior; all clamping and exit tests use the interior.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub rows: u16,
    pub cols: u16,
}

impl Field {
    /// First interior row (below the caption row and the top border).
    pub fn top(&self) -> i32 {
        2
    }

    /// One past the last interior row.
    pub fn bottom(&self) -> i32 {
        self.rows as i32 - 2
    }

    /// First interior column.
    pub fn left(&self) -> i32 {
        1
    }

    /// One past the last interior column.
    pub fn right(&self) -> i32 {
        self.cols as i32 - 1
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= self.top() && row < self.bottom() && col >= self.left() && col < self.right()
    }

    pub fn center(&self) -> (i32, i32) {
        (
            (self.top() + self.bottom()) / 2,
            (self.left() + self.right()) / 2,
        )
    }
}

pub struct World {
    pub field: Field,
    /// Difficulty epoch; written only by the clock task.
    pub epoch: u32,
    /// All gameplay randomness flows through here so tests can seed it.
    pub rng: StdRng,
    registry: HashMap<ObstacleId, Rect>,
    marks: HashSet<ObstacleId>,
    pending: Vec<Box<dyn Task>>,
    next_id: u64,
}

impl World {
    pub fn new(rows: u16, cols: u16, seed: u64) -> World {
        World {
            field: Field { rows, cols },
            epoch: crate::clock::START_EPOCH,
            rng: StdRng::seed_from_u64(seed),
            registry: HashMap::new(),
            marks: HashSet::new(),
            pending: Vec::new(),
            next_id: 0,
        }
    }

    // ── Obstacle registry ────────────────────────────────────────────────

    pub fn add_obstacle(&mut self, rect: Rect) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.registry.insert(id, rect);
        id
    }

    /// Remove an obstacle and any stale mark on it.  A no-op when the entry
    /// is already gone, so both termination paths can call it unconditionally.
    pub fn remove_obstacle(&mut self, id: ObstacleId) {
        self.registry.remove(&id);
        self.marks.remove(&id);
    }

    /// Keep the registry's row in step with the owning task's trajectory.
    pub fn set_obstacle_row(&mut self, id: ObstacleId, row: f32) {
        if let Some(rect) = self.registry.get_mut(&id) {
            rect.row = row;
        }
    }

    pub fn obstacle(&self, id: ObstacleId) -> Option<&Rect> {
        self.registry.get(&id)
    }

    pub fn obstacle_count(&self) -> usize {
        self.registry.len()
    }

    /// First obstacle whose box contains the cell, if any.
    pub fn obstacle_at(&self, row: i32, col: i32) -> Option<ObstacleId> {
        self.registry
            .iter()
            .find(|(_, rect)| rect_contains(rect, row, col))
            .map(|(&id, _)| id)
    }

    /// Does any live obstacle overlap this box?
    pub fn any_overlap(&self, rect: &Rect) -> bool {
        self.registry.values().any(|r| rects_overlap(r, rect))
    }

    // ── Collision marks ──────────────────────────────────────────────────

    pub fn mark_destroyed(&mut self, id: ObstacleId) {
        self.marks.insert(id);
    }

    /// Consume the mark for `id`, reporting whether one was present.
    pub fn take_mark(&mut self, id: ObstacleId) -> bool {
        self.marks.remove(&id)
    }

    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    // ── Spawn buffer ─────────────────────────────────────────────────────

    /// Request that a new task be admitted at the next tick boundary.
    pub fn spawn(&mut self, task: Box<dyn Task>) {
        self.pending.push(task);
    }

    pub fn drain_pending(&mut self) -> Vec<Box<dyn Task>> {
        std::mem::take(&mut self.pending)
    }
}
