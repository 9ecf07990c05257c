//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move-path counts against published reference values
//! - `movegen.rs` - Per-piece generation rules
//! - `make_unmake.rs` - Make/undo move correctness
//! - `status.rs` - Check, checkmate and stalemate detection
//! - `edge_cases.rs` - Pins, castling restrictions, en passant timing
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;

use crate::board::{Color, GameState, GameStateBuilder, Move, Piece, Square};

/// Parse a square, panicking on bad test input
pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Builder loaded with a position drawn as eight rows, rank 8 first.
///
/// `.` is an empty square; uppercase letters are White, lowercase Black.
/// Side to move, castling and en passant are left at the builder defaults.
pub(super) fn diagram(rows: [&str; 8]) -> GameStateBuilder {
    let mut builder = GameStateBuilder::new();
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), 8, "row {} has wrong width: {row:?}", 8 - i);
        for (file, c) in row.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let piece = Piece::from_char(c).unwrap_or_else(|| panic!("bad piece {c:?}"));
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            builder = builder.piece(Square::new(7 - i, file).unwrap(), color, piece);
        }
    }
    builder
}

/// Play a sequence of coordinate moves, panicking on the first failure
pub(super) fn play(game: &mut GameState, moves: &[&str]) {
    for text in moves {
        if let Err(err) = game.make_move_str(text) {
            panic!("{text}: {err}\n{game}");
        }
    }
}

/// The legal move from `from` to `to` with this promotion choice
pub(super) fn legal(game: &GameState, from: &str, to: &str, promotion: Option<Piece>) -> Move {
    game.find_move(sq(from), sq(to), promotion)
        .unwrap_or_else(|| panic!("{from}{to} not legal in\n{game}"))
}

/// Coordinate strings of all legal moves, sorted
pub(super) fn legal_strings(game: &GameState) -> Vec<String> {
    let mut moves: Vec<String> = game.legal_moves().iter().map(ToString::to_string).collect();
    moves.sort();
    moves
}

pub(super) fn kiwipete() -> GameState {
    diagram([
        "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
        "R...K..R",
    ])
    .castling(crate::board::CastlingRights::all())
    .build()
}
