//! State management module for Piezas.
//!
//! This module provides the core state types:
//!
//! - `piece` - Player, stored cell and returned piece values
//! - `board` - The board itself: drops, queries and game status
//!
//! # Board Layout
//!
//! ```text
//!          col 0  col 1  col 2  col 3
//! row 2   [2,0]  [2,1]  [2,2]  [2,3]
//! row 1   [1,0]  [1,1]  [1,2]  [1,3]
//! row 0   [0,0]  [0,1]  [0,2]  [0,3]    <- pieces land here first
//! ```
//!
//! # Game Phases
//!
//! ```text
//! ┌─────────────┐  last blank cell filled  ┌──────────────┐
//! │ InProgress  │─────────────────────────▶│ Won / Tie    │
//! └─────────────┘                          └──────┬───────┘
//!        ▲                 reset                  │
//!        └────────────────────────────────────────┘
//! ```
//!
//! The phase is never stored; `Board::status` derives it from the grid.

pub mod board;
pub mod piece;

// Re-export commonly used types
pub use board::{Board, DropError, GameStatus};
pub use piece::{Cell, Piece, Player};

/// Number of rows on the board.
pub const ROWS: usize = 3;

/// Number of columns on the board.
pub const COLS: usize = 4;
