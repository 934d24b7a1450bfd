use std::time::Duration;

use crate::render::{Palette, Rgb565};
use crate::snake::Direction;
use crate::{Cell, GridInt};

pub const DISPLAY_W: GridInt = 320;
pub const DISPLAY_H: GridInt = 240;
pub const CELL_SIZE: GridInt = 10;

pub const COLOR_BG: Rgb565 = Rgb565(0x4a8b);
pub const COLOR_SNAKE_BODY: Rgb565 = Rgb565(0x3522);
pub const COLOR_SNAKE_HEAD: Rgb565 = Rgb565(0x6ec3);
pub const COLOR_FEED: Rgb565 = Rgb565(0xe882);
pub const COLOR_FRAME: Rgb565 = Rgb565(0xffff);

pub const TICK_INTERVAL_MS: u64 = 200;
pub const SCORE_PER_FEED: u32 = 100;

pub const INITIAL_HEAD: Cell = (14, 12);
pub const INITIAL_SNAKE_LENGTH: usize = 4;
/// The starting body trails to the left of the head...
pub const INITIAL_FACING: Direction = Direction::Right;
/// ...but the first move goes up.
pub const INITIAL_DIRECTION: Direction = Direction::Up;

/// Game settings. `Default` gives the build-time constants above.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub display_width: GridInt,
    pub display_height: GridInt,
    pub cell_size: GridInt,
    pub palette: Palette,
    pub tick_interval: Duration,
    pub score_per_feed: u32,
    pub initial_head: Cell,
    pub initial_length: usize,
    pub initial_facing: Direction,
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            display_width: DISPLAY_W,
            display_height: DISPLAY_H,
            cell_size: CELL_SIZE,
            palette: Palette {
                background: COLOR_BG,
                snake_head: COLOR_SNAKE_HEAD,
                snake_body: COLOR_SNAKE_BODY,
                feed: COLOR_FEED,
                frame: COLOR_FRAME,
            },
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            score_per_feed: SCORE_PER_FEED,
            initial_head: INITIAL_HEAD,
            initial_length: INITIAL_SNAKE_LENGTH,
            initial_facing: INITIAL_FACING,
            initial_direction: INITIAL_DIRECTION,
        }
    }
}

impl GameConfig {
    pub fn grid_width(&self) -> GridInt {
        self.display_width / self.cell_size
    }

    pub fn grid_height(&self) -> GridInt {
        self.display_height / self.cell_size
    }

    /// Segments the snake storage is sized for: every cell, plus the one
    /// duplicate left when the snake grows into the cell its tail just left.
    pub fn snake_capacity(&self) -> usize {
        (self.grid_width() * self.grid_height()) as usize + 1
    }
}
