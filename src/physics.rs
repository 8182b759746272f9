/// Ship kinematics — the accelerate/decay velocity rule and the field clamp.

/// Maximum velocity magnitude per axis, in cells per tick.
pub const SPEED_LIMIT: i32 = 2;

fn nudge(speed: i32, direction: i32) -> i32 {
    if direction > 0 {
        (speed + 1).min(SPEED_LIMIT)
    } else if direction < 0 {
        (speed - 1).max(-SPEED_LIMIT)
    } else if speed > 0 {
        // No intent: decay toward zero, never overshooting
        speed - 1
    } else if speed < 0 {
        speed + 1
    } else {
        0
    }
}

/// Integrate directional intent into velocity.  Each active direction nudges
/// the matching component by one cell/tick up to `SPEED_LIMIT`; an idle axis
/// decays toward zero by one cell/tick.
pub fn update_speed(
    row_speed: i32,
    col_speed: i32,
    row_direction: i32,
    col_direction: i32,
) -> (i32, i32) {
    (nudge(row_speed, row_direction), nudge(col_speed, col_direction))
}

/// Clamp `value` into `[low, high]`.  `high` may be below `low` on absurdly
/// small fields; the low bound wins so the sprite pins to the top-left.
pub fn clamp(value: i32, low: i32, high: i32) -> i32 {
    value.min(high).max(low)
}
