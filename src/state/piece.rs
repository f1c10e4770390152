//! Player, cell and piece values.
//!
//! Three closely related types with different jobs:
//!
//! - `Player` is whose turn it is.
//! - `Cell` is what the board stores. It has no invalid variant.
//! - `Piece` is what queries return. It adds the `Invalid` sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Moves first
    #[default]
    A,
    B,
}

impl Player {
    /// Get the other player.
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }

    /// Single-character marker used when drawing the board.
    pub fn symbol(&self) -> char {
        match self {
            Self::A => 'X',
            Self::B => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "PlayerA"),
            Self::B => write!(f, "PlayerB"),
        }
    }
}

/// A stored board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Blank,
    Occupied(Player),
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Get the occupying player, if any.
    pub fn player(&self) -> Option<Player> {
        match self {
            Self::Blank => None,
            Self::Occupied(player) => Some(*player),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Occupied(player) => player.as_str(),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Blank => '.',
            Self::Occupied(player) => player.symbol(),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Self::Occupied(player)
    }
}

/// Value returned by board queries.
///
/// `Invalid` only ever comes back from a query; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Piece {
    Blank,
    PlayerA,
    PlayerB,
    Invalid,
}

impl Piece {
    /// Get the player this piece belongs to, if it is a player piece.
    pub fn player(&self) -> Option<Player> {
        match self {
            Self::PlayerA => Some(Player::A),
            Self::PlayerB => Some(Player::B),
            Self::Blank | Self::Invalid => None,
        }
    }
}

impl From<Player> for Piece {
    fn from(player: Player) -> Self {
        match player {
            Player::A => Self::PlayerA,
            Player::B => Self::PlayerB,
        }
    }
}

impl From<Cell> for Piece {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Blank => Self::Blank,
            Cell::Occupied(player) => player.into(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "Blank"),
            Self::PlayerA => write!(f, "PlayerA"),
            Self::PlayerB => write!(f, "PlayerB"),
            Self::Invalid => write!(f, "Invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::A.other(), Player::B);
        assert_eq!(Player::B.other(), Player::A);
        assert_eq!(Player::default(), Player::A);
    }

    #[test]
    fn test_cell_to_piece() {
        assert_eq!(Piece::from(Cell::Blank), Piece::Blank);
        assert_eq!(Piece::from(Cell::Occupied(Player::A)), Piece::PlayerA);
        assert_eq!(Piece::from(Cell::Occupied(Player::B)), Piece::PlayerB);
    }

    #[test]
    fn test_piece_player() {
        assert_eq!(Piece::PlayerA.player(), Some(Player::A));
        assert_eq!(Piece::PlayerB.player(), Some(Player::B));
        assert_eq!(Piece::Blank.player(), None);
        assert_eq!(Piece::Invalid.player(), None);
    }

    #[test]
    fn test_cell_accessors() {
        let cell = Cell::from(Player::B);
        assert!(!cell.is_blank());
        assert_eq!(cell.player(), Some(Player::B));
        assert_eq!(cell.symbol(), 'O');
        assert!(Cell::default().is_blank());
        assert_eq!(Cell::Blank.symbol(), '.');
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Piece::PlayerA).unwrap(), "\"player_a\"");
        assert_eq!(serde_json::to_string(&Piece::Invalid).unwrap(), "\"invalid\"");
        assert_eq!(serde_json::to_string(&Player::B).unwrap(), "\"b\"");

        let back: Piece = serde_json::from_str("\"player_b\"").unwrap();
        assert_eq!(back, Piece::PlayerB);
        let back: Player = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(back, Player::A);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::A), "PlayerA");
        assert_eq!(format!("{}", Piece::Invalid), "Invalid");
    }
}
