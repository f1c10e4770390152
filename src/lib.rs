//! Piezas State Library
//!
//! This crate provides the board state engine for Piezas, a two-player
//! vertical-drop game played on a fixed 3-row by 4-column grid.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Board** - Owns the grid and the turn indicator. Pieces fall to the
//!   lowest blank cell of a column; every drop attempt passes the turn.
//!
//! - **Pieces** - `Player` (whose turn), `Cell` (what the board stores) and
//!   `Piece` (what queries return, including the `Invalid` sentinel).
//!
//! - **Game status** - Once the board is full, the player with the longest
//!   horizontal or vertical run wins. Equal runs are a tie.
//!
//! # Design Principles
//!
//! 1. **Sentinels, not panics** - Out-of-range input comes back as
//!    `Piece::Invalid`; a full column comes back as `Piece::Blank`.
//!
//! 2. **Storage excludes `Invalid`** - The grid is made of `Cell`s, which have
//!    no invalid variant.
//!
//! 3. **No UI, no networking** - This crate is pure state.
//!
//! # Example
//!
//! ```rust
//! use piezas_state::{Board, Piece, COLS, ROWS};
//!
//! let mut board = Board::new();
//!
//! assert_eq!(board.drop_piece(0), Piece::PlayerA);
//! assert_eq!(board.drop_piece(0), Piece::PlayerB);
//! assert_eq!(board.piece_at(1, 0), Piece::PlayerB);
//!
//! // Off the board
//! assert_eq!(board.piece_at(ROWS as i32, 0), Piece::Invalid);
//! assert_eq!(board.drop_piece(COLS as i32), Piece::Invalid);
//!
//! // Not finished yet
//! assert_eq!(board.game_state(), Piece::Invalid);
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
