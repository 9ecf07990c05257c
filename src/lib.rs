#[macro_use]
mod trace;

pub mod board;
pub mod console;

pub use board::{Board, Color, GameState, GameStatus, Move, Piece, Square};
