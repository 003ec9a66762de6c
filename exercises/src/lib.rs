//! Shared pieces of the exercise programs: the LCD grid the matrix game
//! draws into, the game state machine itself, and the drawing glue
//! between them.

pub mod draw;
pub mod game;
pub mod grid;
pub mod mirror;
