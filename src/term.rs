use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};

use crate::config::GameConfig;
use crate::error::{Result, SnakeError};
use crate::input::{InputReader, RawInput, NO_INPUT};
use crate::render::{Palette, Renderer, Rgb565};
use crate::snake::Direction;
use crate::{Cell, GridInt};

/// Terminal columns per grid cell; terminal characters are about twice as
/// tall as they are wide.
const CELL_COLUMNS: u16 = 2;
const CELL_FILL: &str = "  ";

/// Switches the terminal into game mode.
pub fn setup() -> Result<()> {
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    execute!(out, cursor::Hide, cursor::DisableBlinking)?;
    Ok(())
}

/// Undoes [`setup`]. Every step is attempted; the first failure is returned.
pub fn restore() -> Result<()> {
    let mut out = stdout();
    let raw = terminal::disable_raw_mode();
    let shown = execute!(out, ResetColor, cursor::Show, cursor::EnableBlinking);
    let screen = execute!(out, LeaveAlternateScreen);

    raw?;
    shown?;
    screen?;
    Ok(())
}

/// Runs `body` between `setup` and `restore`. `restore` runs whenever setup
/// was attempted, even if it failed halfway. The first error wins.
pub fn in_session<T>(
    setup: impl FnOnce() -> Result<()>,
    restore: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let result = setup().and_then(|_| body());
    let restored = restore();

    let value = result?;
    restored?;
    Ok(value)
}

/// Board, frame and status line drawn into the terminal.
///
/// Grid cell `(x, y)` covers columns `1 + 2x ..= 2 + 2x` of row `1 + y`; the
/// frame surrounds the board and the score sits on the row below it.
pub struct TermRenderer {
    stdout: Stdout,
    grid_width: GridInt,
    grid_height: GridInt,
    palette: Palette,
}

impl TermRenderer {
    /// Fails if the terminal cannot fit the board.
    pub fn open(config: &GameConfig) -> Result<Self> {
        let (width, height) = terminal::size()?;
        let (min_width, min_height) = required_size(config.grid_width(), config.grid_height());

        if width < min_width || height < min_height {
            return Err(SnakeError::TerminalTooSmall {
                width,
                height,
                min_width,
                min_height,
            });
        }

        Ok(TermRenderer {
            stdout: stdout(),
            grid_width: config.grid_width(),
            grid_height: config.grid_height(),
            palette: config.palette,
        })
    }

    ///////////////////////////////////////////////////////////////////////////

    fn paint(&mut self, cell: Cell, color: Rgb565) -> Result<()> {
        // Cells off the board (a head that just crashed) are not drawn.
        let (col, row) = match cell_origin(cell, self.grid_width, self.grid_height) {
            Some(pos) => pos,
            None => return Ok(()),
        };

        queue!(
            self.stdout,
            cursor::MoveTo(col, row),
            SetBackgroundColor(term_color(color)),
            Print(CELL_FILL),
            ResetColor
        )?;
        Ok(())
    }

    fn print_at(&mut self, pos: (u16, u16), ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), Print(ch))?;
        Ok(())
    }
}

impl Renderer for TermRenderer {
    fn draw_cell(&mut self, cell: Cell, color: Rgb565) -> Result<()> {
        self.paint(cell, color)
    }

    fn clear_cell(&mut self, cell: Cell) -> Result<()> {
        let background = self.palette.background;
        self.paint(cell, background)
    }

    fn draw_frame(&mut self) -> Result<()> {
        let (end_x, end_y) = frame_corner(self.grid_width, self.grid_height);
        let color = term_color(self.palette.frame);

        queue!(self.stdout, SetForegroundColor(color))?;

        for x in 0..=end_x {
            let ch = if x == 0 || x == end_x { '+' } else { '-' };
            self.print_at((x, 0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        queue!(self.stdout, ResetColor)?;
        Ok(())
    }

    fn draw_background(&mut self) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;

        for y in 0..self.grid_height {
            for x in 0..self.grid_width {
                self.clear_cell((x, y))?;
            }
        }

        Ok(())
    }

    fn print_score(&mut self, score: u32) -> Result<()> {
        let row = self.grid_height as u16 + 2;
        queue!(
            self.stdout,
            cursor::MoveTo(1, row),
            Print(score_line(score)),
            terminal::Clear(ClearType::UntilNewLine)
        )?;
        Ok(())
    }

    fn draw_game_over(&mut self, score: u32) -> Result<()> {
        let (width, height) = terminal::size()?;
        let (center_x, center_y) = (width / 2, height / 2);
        let hint = "Press any key to exit";

        queue!(
            self.stdout,
            ResetColor,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(center_x.saturating_sub(4), center_y),
            Print("Game Over"),
            cursor::MoveTo(center_x.saturating_sub(5), center_y + 3),
            Print(score_line(score)),
            cursor::MoveTo(center_x.saturating_sub(hint.len() as u16 / 2), center_y + 5),
            Print(hint)
        )?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

/// Arrow keys and WASD read as the four direction buttons.
#[derive(Debug, Default)]
pub struct TermKeys;

impl TermKeys {
    pub fn new() -> Self {
        TermKeys
    }

    /// Blocks until a key is pressed.
    pub fn wait_for_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }
}

impl InputReader for TermKeys {
    /// Drains the keys queued since the last read and reports the latest
    /// direction among them.
    fn read_raw_input(&mut self) -> Result<RawInput> {
        let mut keys = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                if is_ctrl_c(&ev) {
                    return Err(SnakeError::Interrupted);
                }
                keys.push(ev);
            }
        }

        Ok(keys_to_raw(&keys))
    }
}

/// A keyboard holds one key at a time: the last direction key wins, and a
/// tick with no direction key reads idle.
pub fn keys_to_raw(keys: &[KeyEvent]) -> RawInput {
    keys.iter()
        .rev()
        .map(key_bits)
        .find(|bits| *bits != NO_INPUT)
        .unwrap_or(NO_INPUT)
}

pub fn key_bits(ev: &KeyEvent) -> RawInput {
    let dir = match ev.code {
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left,
        _ => return NO_INPUT,
    };

    dir.bits()
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

/// Terminal size needed for a board: two columns per cell plus the frame,
/// and one extra row for the score.
pub fn required_size(grid_width: GridInt, grid_height: GridInt) -> (u16, u16) {
    (
        grid_width as u16 * CELL_COLUMNS + 2,
        grid_height as u16 + 3,
    )
}

/// Screen position of a grid cell, or `None` off the board.
fn cell_origin((x, y): Cell, grid_width: GridInt, grid_height: GridInt) -> Option<(u16, u16)> {
    if x < 0 || y < 0 || x >= grid_width || y >= grid_height {
        return None;
    }

    Some((1 + x as u16 * CELL_COLUMNS, 1 + y as u16))
}

/// Bottom-right corner of the frame; the top-left one is `(0, 0)`.
fn frame_corner(grid_width: GridInt, grid_height: GridInt) -> (u16, u16) {
    let (width, height) = required_size(grid_width, grid_height);
    (width - 1, height - 2)
}

fn term_color(color: Rgb565) -> Color {
    let (r, g, b) = color.to_rgb();
    Color::Rgb { r, g, b }
}

fn score_line(score: u32) -> String {
    format!("Score: {}", score)
}
