use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal is {width}x{height} but the board needs at least {min_width}x{min_height}")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("snake storage is full ({capacity} segments)")]
    SnakeFull { capacity: usize },

    /// The player asked to quit (Ctrl+C) before the game ended.
    #[error("interrupted")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, SnakeError>;
