/// Difficulty pacing — pure lookups keyed by the epoch counter.

/// Ticks per epoch increment (one "year" every 1.5 s at 100 ms/tick).
pub const TICKS_PER_EPOCH: u32 = 15;

/// The epoch the game opens on.
pub const START_EPOCH: u32 = 1957;

/// Firing is disabled until this epoch.
pub const WEAPON_EPOCH: u32 = 2020;

/// Ticks between garbage spawns for a given epoch; `None` means spawning is
/// not enabled yet.  Monotonically non-increasing once enabled.
pub fn spawn_interval(epoch: u32) -> Option<u32> {
    match epoch {
        e if e < 1961 => None,
        e if e < 1969 => Some(20),
        e if e < 1981 => Some(14),
        e if e < 1995 => Some(10),
        e if e < 2010 => Some(8),
        e if e < 2020 => Some(6),
        _ => Some(2),
    }
}

/// Milestone caption for an exact epoch, if one exists.
pub fn milestone(epoch: u32) -> Option<&'static str> {
    match epoch {
        1957 => Some("Sputnik opens the space age"),
        1961 => Some("Gagarin orbits the Earth"),
        1969 => Some("Apollo 11 lands on the Moon"),
        1971 => Some("First probe reaches Mars"),
        1981 => Some("The Shuttle takes flight"),
        1998 => Some("ISS assembly begins"),
        2011 => Some("Messenger circles Mercury"),
        2020 => Some("Plasma gun online - clear the debris!"),
        _ => None,
    }
}

/// The caption line shown for an epoch: the milestone text when there is an
/// exact match, otherwise the bare number.
pub fn caption(epoch: u32) -> String {
    match milestone(epoch) {
        Some(text) => format!("{}: {}", epoch, text),
        None => epoch.to_string(),
    }
}
