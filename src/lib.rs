//! Bounded-grid snake: simulation core plus the terminal plumbing around it.
//!
//! The simulation (`snake`, `fruit`, `game`) is free of any I/O so it can be
//! driven deterministically from tests; everything terminal-shaped lives in
//! `input`, `renderer`, `terminal_runtime`, and `ui`.

pub mod config;
pub mod fruit;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
