//! Snake for a framebuffer + push-button board, played in a terminal.
//!
//! The game core (`game`, `snake`, `input`, `ticker`) only talks to the
//! display and the buttons through the [`render::Renderer`] and
//! [`input::InputReader`] traits. The `term` module implements both on top of
//! crossterm.

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod snake;
pub mod term;
pub mod ticker;

pub use error::{Result, SnakeError};

pub type GridInt = i32;
pub type Cell = (GridInt, GridInt);
