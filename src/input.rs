use crate::error::Result;
use crate::snake::Direction;

/// Raw button state. One bit per direction line, see [`Direction::bits`].
pub type RawInput = u8;

pub const NO_INPUT: RawInput = 0;

/// Source of button state, sampled once per tick.
pub trait InputReader {
    /// Returns the buttons held (or pressed) since the previous read.
    /// Must not block.
    fn read_raw_input(&mut self) -> Result<RawInput>;
}

/// Decodes a raw read into a single direction. Idle reads, unknown lines and
/// simultaneous presses (more than one bit away from idle) decode to `None`.
pub fn decode_input(raw: RawInput) -> Option<Direction> {
    if (raw ^ NO_INPUT).count_ones() != 1 {
        return None;
    }

    Direction::from_bits(raw)
}

pub fn resolve_direction(current: Direction, raw: RawInput) -> Direction {
    match decode_input(raw) {
        Some(dir) if dir != current.opposite() => dir,
        _ => current,
    }
}
