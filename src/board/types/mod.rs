//! Core chess types.
//!
//! This module contains the value types shared by the rest of the board code:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - a checked (rank, file) pair
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `CastleSide` and `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use castling::{king_home, KING_HOME_FILE};
pub(crate) use piece::PROMOTION_PIECES;
