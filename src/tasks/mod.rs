/// Entity behaviors — each a `Task` template advanced once per tick.

mod clock;
mod effects;
mod fire;
mod garbage;
mod ship;

pub use clock::{CaptionTask, EpochClockTask};
pub use effects::{BlinkTask, ExplosionTask, GameOverTask};
pub use fire::FireTask;
pub use garbage::{GarbageTask, SpawnerTask};
pub use ship::ShipTask;
