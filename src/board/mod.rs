//! Chess board representation and game rules.
//!
//! A mailbox 8x8 grid with per-piece move generators, a simulate-then-test
//! legality filter and a game state with full make/undo history. Supports the
//! complete rules of movement including castling, en passant and promotions.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameState, GameStatus};
//!
//! let mut game = GameState::new();
//! let moves = game.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//!
//! for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.make_move_str(mv).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Checkmate);
//! ```

mod attack_tables;
mod builder;
mod error;
mod grid;
mod history;
mod legality;
mod make_unmake;
mod movegen;
mod notation;
mod perft;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameStateBuilder;
pub use error::{EmptyHistoryError, IllegalMoveError, MoveParseError, PositionError, SquareError};
pub use grid::{Board, Cell};
pub use history::HistoryEntry;
pub use legality::GameStatus;
pub use state::GameState;
pub use types::{CastleSide, CastlingRights, Color, Move, MoveKind, MoveList, Piece, Square};

pub(crate) use types::{king_home, KING_HOME_FILE, PROMOTION_PIECES};
