//! Board state management.
//!
//! Tracks the grid and whose turn it is, places dropped pieces and scores a
//! finished board.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::piece::{Cell, Piece, Player};
use super::{COLS, ROWS};

/// Game status derived from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "winner", rename_all = "snake_case")]
pub enum GameStatus {
    /// At least one blank cell remains
    InProgress,
    /// Board full, this player has the strictly longest run
    Won(Player),
    /// Board full, both players' longest runs are equal
    Tie,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Won(_) => "won",
            Self::Tie => "tie",
        }
    }

    /// Check if the game is over (board full).
    pub fn is_complete(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Self::Won(player) => Some(*player),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({"status": self.as_str()});
        if let Some(winner) = self.winner() {
            obj["winner"] = serde_json::json!(winner.as_str());
        }
        obj
    }
}

impl From<GameStatus> for Piece {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => Piece::Invalid,
            GameStatus::Won(player) => player.into(),
            GameStatus::Tie => Piece::Blank,
        }
    }
}

/// Reasons a drop attempt placed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropError {
    ColumnOutOfRange(i32),
    ColumnFull(usize),
}

impl fmt::Display for DropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnOutOfRange(column) => {
                write!(f, "Column {} is off the board (0..{})", column, COLS)
            }
            Self::ColumnFull(column) => write!(f, "Column {} is full", column),
        }
    }
}

impl std::error::Error for DropError {}

/// The Piezas board.
///
/// Row 0 is the bottom row. The turn passes on every drop attempt,
/// including attempts that place nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Indexed `[row][col]`, bottom row first
    cells: [[Cell; COLS]; ROWS],

    /// Player whose piece the next drop uses
    turn: Player,
}

impl Board {
    /// Create an empty board with player A to move.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Blank; COLS]; ROWS],
            turn: Player::A,
        }
    }

    /// Clear every cell. The turn is left as it is.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Blank; COLS]; ROWS];
        log::debug!("board reset, {} to move", self.turn);
    }

    /// Player whose piece the next drop attempt uses.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Returns the piece placed, `Piece::Blank` if the column is full, or
    /// `Piece::Invalid` if the column is off the board. The turn passes
    /// in every case.
    pub fn drop_piece(&mut self, column: i32) -> Piece {
        match self.try_drop_piece(column) {
            Ok((player, _)) => player.into(),
            Err(DropError::ColumnOutOfRange(_)) => Piece::Invalid,
            Err(DropError::ColumnFull(_)) => Piece::Blank,
        }
    }

    /// Drop the current player's piece into `column`, returning the player
    /// placed and the row it landed on.
    ///
    /// The turn passes even when this returns an error.
    pub fn try_drop_piece(&mut self, column: i32) -> Result<(Player, usize), DropError> {
        let current = self.turn;
        self.turn = current.other();

        let col = column_index(column).ok_or_else(|| {
            log::debug!("{} dropped off the board at column {}", current, column);
            DropError::ColumnOutOfRange(column)
        })?;

        let row = (0..ROWS)
            .find(|&row| self.cells[row][col].is_blank())
            .ok_or_else(|| {
                log::debug!("{} dropped into full column {}", current, col);
                DropError::ColumnFull(col)
            })?;

        self.cells[row][col] = current.into();
        log::trace!("{} placed at [{},{}]", current, row, col);

        Ok((current, row))
    }

    /// Get what is at `(row, column)`, or `Piece::Invalid` if that is off
    /// the board.
    pub fn piece_at(&self, row: i32, column: i32) -> Piece {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(column)) else {
            return Piece::Invalid;
        };
        self.cell(row, col).map_or(Piece::Invalid, Piece::from)
    }

    /// Get the stored cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Check if a column has no blank cell left. Columns off the board
    /// count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        !self.cells[ROWS - 1][col].is_blank()
    }

    /// Check if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_blank())
    }

    /// Longest run of `player`'s pieces along any single row or column.
    ///
    /// Rows are read left to right, columns bottom to top. Anything that is
    /// not `player`'s piece ends the run.
    pub fn longest_run(&self, player: Player) -> usize {
        let across = (0..ROWS)
            .map(|row| run_length((0..COLS).map(|col| self.cells[row][col]), player));
        let up = (0..COLS)
            .map(|col| run_length((0..ROWS).map(|row| self.cells[row][col]), player));

        across.chain(up).max().unwrap_or(0)
    }

    /// Evaluate the board.
    pub fn status(&self) -> GameStatus {
        if !self.is_full() {
            return GameStatus::InProgress;
        }

        let a = self.longest_run(Player::A);
        let b = self.longest_run(Player::B);
        log::trace!("longest runs: A={} B={}", a, b);

        match a.cmp(&b) {
            Ordering::Greater => GameStatus::Won(Player::A),
            Ordering::Less => GameStatus::Won(Player::B),
            Ordering::Equal => GameStatus::Tie,
        }
    }

    /// Get the winning piece, `Piece::Blank` for a tie, or `Piece::Invalid`
    /// while any cell is still blank.
    pub fn game_state(&self) -> Piece {
        self.status().into()
    }

    /// Convert board to JSON snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        let rows: Vec<serde_json::Value> = self
            .cells
            .iter()
            .map(|row| {
                let cells: Vec<serde_json::Value> =
                    row.iter().map(|c| serde_json::json!(c.as_str())).collect();
                serde_json::Value::Array(cells)
            })
            .collect();

        serde_json::json!({
            "rows": rows,
            "turn": self.turn.as_str(),
            "status": self.status().to_json()
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the top row first, so the picture matches the physical board.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter().rev() {
            let line: String = row.iter().map(Cell::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn column_index(column: i32) -> Option<usize> {
    usize::try_from(column).ok().filter(|&col| col < COLS)
}

/// Longest stretch of consecutive `player` cells in `line`.
fn run_length(line: impl Iterator<Item = Cell>, player: Player) -> usize {
    let mut best = 0;
    let mut current = 0;
    for cell in line {
        if cell.player() == Some(player) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}
