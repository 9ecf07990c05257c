//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = GameState::new();
//! assert_eq!(game.status(), GameStatus::Ongoing);
//! ```

pub use super::{
    Board, CastleSide, CastlingRights, Color, GameState, GameStateBuilder, GameStatus, Move,
    MoveKind, MoveList, MoveParseError, Piece, Square,
};
