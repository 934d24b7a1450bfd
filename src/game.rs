use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::Result;
use crate::input::{decode_input, resolve_direction, InputReader, NO_INPUT};
use crate::render::Renderer;
use crate::snake::{Direction, Snake};
use crate::ticker::Ticker;
use crate::{Cell, GridInt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Init,
    Running,
    GameOver,
}

/// One game of Snake, driving a borrowed display and button port.
pub struct SnakeGame<'a, R, I, G> {
    config: GameConfig,
    renderer: &'a mut R,
    input: &'a mut I,
    rng: G,
    ticker: Ticker,
    phase: Phase,
    snake: Snake,
    feed: Cell,
    direction: Direction,
    score: u32,
}

impl<'a, R, I, G> SnakeGame<'a, R, I, G>
where
    R: Renderer,
    I: InputReader,
    G: Rng,
{
    pub fn new(config: GameConfig, renderer: &'a mut R, input: &'a mut I, rng: G) -> Self {
        let snake = Snake::new(
            config.initial_head,
            config.initial_length,
            config.initial_facing,
            config.snake_capacity(),
        );
        let ticker = Ticker::start(config.tick_interval);
        let direction = config.initial_direction;

        SnakeGame {
            config,
            renderer,
            input,
            rng,
            ticker,
            phase: Phase::Init,
            snake,
            feed: (0, 0),
            direction,
            score: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn feed(&self) -> Cell {
        self.feed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Runs the game to the end and returns the final score.
    pub fn play(&mut self) -> Result<u32> {
        if self.phase == Phase::Init {
            self.initialize()?;
        }

        while self.phase == Phase::Running {
            self.tick()?;
        }

        self.renderer.draw_game_over(self.score)?;
        self.renderer.flush()?;

        info!(
            score = self.score,
            length = self.snake.len(),
            head = ?self.snake.head(),
            "game over"
        );

        Ok(self.score)
    }

    /// Paints the empty board, places the starting snake and the first feed.
    pub fn initialize(&mut self) -> Result<()> {
        self.renderer.draw_background()?;

        self.snake = Snake::new(
            self.config.initial_head,
            self.config.initial_length,
            self.config.initial_facing,
            self.config.snake_capacity(),
        );
        self.direction = self.config.initial_direction;
        self.score = 0;
        self.feed = self.spawn_feed();
        self.ticker = Ticker::start(self.config.tick_interval);
        self.phase = Phase::Running;

        info!(
            width = self.config.grid_width(),
            height = self.config.grid_height(),
            feed = ?self.feed,
            "game started"
        );

        Ok(())
    }

    /// Draws the current frame, waits for the tick deadline, then applies
    /// one step of input, movement and collision checks.
    pub fn tick(&mut self) -> Result<Phase> {
        if self.phase != Phase::Running {
            return Ok(self.phase);
        }

        self.draw_feed()?;
        self.draw_snake()?;
        self.renderer.draw_frame()?;
        self.renderer.print_score(self.score)?;
        self.renderer.flush()?;

        if !self.ticker.wait() {
            debug!(interval = ?self.ticker.interval(), "tick overran its deadline");
        }

        let raw = self.input.read_raw_input()?;
        if raw != NO_INPUT && decode_input(raw).is_none() {
            debug!(raw, "ignoring button read");
        }
        self.direction = resolve_direction(self.direction, raw);

        self.clear_snake()?;
        let tail = self.snake.advance(self.direction);

        if self.snake.is_game_over(self.grid_width(), self.grid_height()) {
            self.phase = Phase::GameOver;
            return Ok(self.phase);
        }

        if self.snake.is_get_feed(self.feed) {
            self.snake.grow(tail)?;
            self.renderer.clear_cell(self.feed)?;
            self.feed = self.spawn_feed();
            self.score += self.config.score_per_feed;

            debug!(score = self.score, length = self.snake.len(), feed = ?self.feed, "feed eaten");
        }

        Ok(self.phase)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn grid_width(&self) -> GridInt {
        self.config.grid_width()
    }

    fn grid_height(&self) -> GridInt {
        self.config.grid_height()
    }

    // May land on the snake; it shows up once the body moves off it.
    fn spawn_feed(&mut self) -> Cell {
        let x = self.rng.gen_range(0..self.grid_width());
        let y = self.rng.gen_range(0..self.grid_height());
        (x, y)
    }

    fn draw_feed(&mut self) -> Result<()> {
        self.renderer.draw_cell(self.feed, self.config.palette.feed)
    }

    fn draw_snake(&mut self) -> Result<()> {
        let palette = self.config.palette;

        for (i, cell) in self.snake.body().iter().enumerate() {
            let color = if i == 0 { palette.snake_head } else { palette.snake_body };
            self.renderer.draw_cell(*cell, color)?;
        }

        Ok(())
    }

    fn clear_snake(&mut self) -> Result<()> {
        for cell in self.snake.body() {
            self.renderer.clear_cell(*cell)?;
        }

        Ok(())
    }
}
