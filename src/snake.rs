use crate::error::{Result, SnakeError};
use crate::{Cell, GridInt};
use Direction::*;

/// Heading of the snake. The discriminants are the button lines that select it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    Right = 0b0001,
    Up = 0b0010,
    Down = 0b0100,
    Left = 0b1000,
}

impl Direction {
    pub fn from_bits(bits: u8) -> Option<Direction> {
        match bits {
            0b0001 => Some(Right),
            0b0010 => Some(Up),
            0b0100 => Some(Down),
            0b1000 => Some(Left),
            _ => None,
        }
    }

    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn opposite(self) -> Direction {
        match self {
            Right => Left,
            Up => Down,
            Down => Up,
            Left => Right,
        }
    }

    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Right => (1, 0),
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
        }
    }
}

/// Snake body in pre-sized storage. `cells[..len]` are live, head first.
#[derive(Debug, Clone)]
pub struct Snake {
    cells: Box<[Cell]>,
    len: usize,
}

impl Snake {
    /// Lays out `size` segments starting at `head` and trailing away from
    /// `facing`. The size is clamped to `1..=capacity`.
    pub fn new(head: Cell, size: usize, facing: Direction, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let size = size.max(1).min(capacity);
        let (dx, dy) = facing.delta();

        let mut cells = vec![head; capacity].into_boxed_slice();
        for (i, cell) in cells.iter_mut().take(size).enumerate() {
            let i = i as GridInt;
            *cell = (head.0 - dx * i, head.1 - dy * i);
        }

        Snake { cells, len: size }
    }

    pub fn body(&self) -> &[Cell] {
        &self.cells[..self.len]
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn tail(&self) -> Cell {
        self.cells[self.len - 1]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Shifts every segment onto its predecessor and moves the head one cell
    /// towards `direction`. Returns where the tail was before the move.
    pub fn advance(&mut self, direction: Direction) -> Cell {
        let old_tail = self.tail();

        self.cells.copy_within(0..self.len - 1, 1);

        let (dx, dy) = direction.delta();
        let head = &mut self.cells[0];
        head.0 += dx;
        head.1 += dy;

        old_tail
    }

    /// Appends `tail` as the new last segment.
    pub fn grow(&mut self, tail: Cell) -> Result<()> {
        if self.len == self.capacity() {
            return Err(SnakeError::SnakeFull {
                capacity: self.capacity(),
            });
        }

        self.cells[self.len] = tail;
        self.len += 1;
        Ok(())
    }

    /// True when the head left the `width` x `height` board or sits on
    /// another segment.
    pub fn is_game_over(&self, width: GridInt, height: GridInt) -> bool {
        let (x, y) = self.head();

        if x < 0 || y < 0 || x >= width || y >= height {
            return true;
        }

        self.body()[1..].contains(&(x, y))
    }

    pub fn is_get_feed(&self, feed: Cell) -> bool {
        self.head() == feed
    }
}
