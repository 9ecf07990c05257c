//! Fluent builder for constructing chess positions.
//!
//! Allows creating custom positions piece by piece, validated before they
//! become a `GameState`.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameStateBuilder, Piece, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let game = GameStateBuilder::new()
//!     .piece(sq("e1"), Color::White, Piece::King)
//!     .piece(sq("e8"), Color::Black, Piece::King)
//!     .piece(sq("a2"), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(game.legal_moves().len(), 7);
//! ```

use super::{
    king_home, Board, CastleSide, CastlingRights, Color, GameState, Piece, PositionError, Square,
};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        GameStateBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameStateBuilder {
            board: Board::starting_position(),
            castling_rights: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set_piece(square, Some((color, piece)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.remove_piece(square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling_rights.set(color, side);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Validate and build the game.
    ///
    /// Castling rights whose king or rook is away from home are silently
    /// dropped, as is an en passant target with no pawn to capture.
    pub fn try_build(self) -> Result<GameState, PositionError> {
        let board = self.board;

        for color in Color::BOTH {
            match board.count_kings(color) {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                count => return Err(PositionError::MultipleKings { color, count }),
            }
        }

        if let Some(square) = Square::all().find(|&sq| {
            matches!(board.piece_at(sq), Some((_, Piece::Pawn)))
                && (sq.rank() == 0 || sq.rank() == 7)
        }) {
            return Err(PositionError::PawnOnBackRank { square });
        }

        let waiting = self.side_to_move.opponent();
        if let Some(king) = board.find_king(waiting) {
            if board.is_square_attacked(king, self.side_to_move) {
                return Err(PositionError::SideNotToMoveInCheck { color: waiting });
            }
        }

        let castling_rights = sanitize_castling(&board, self.castling_rights);
        let en_passant_target = self
            .en_passant_target
            .filter(|&target| en_passant_is_capturable(&board, self.side_to_move, target));

        Ok(GameState::from_parts(
            board,
            self.side_to_move,
            castling_rights,
            en_passant_target,
        ))
    }

    /// Build the game, panicking on an invalid position.
    ///
    /// Convenience for fixtures; use [`GameStateBuilder::try_build`] for input
    /// that may be wrong.
    #[must_use]
    pub fn build(self) -> GameState {
        match self.try_build() {
            Ok(game) => game,
            Err(err) => panic!("invalid position: {err}"),
        }
    }
}

fn sanitize_castling(board: &Board, mut rights: CastlingRights) -> CastlingRights {
    for color in Color::BOTH {
        let king_home_ok = board.piece_at(king_home(color)) == Some((color, Piece::King));
        for side in CastleSide::BOTH {
            let rook_home_ok = board.piece_at(side.rook_home(color)) == Some((color, Piece::Rook));
            if !(king_home_ok && rook_home_ok) {
                rights.remove(color, side);
            }
        }
    }
    rights
}

/// The target must be empty, on the skipped rank, with the enemy pawn that
/// just double-pushed standing directly in front of it.
fn en_passant_is_capturable(board: &Board, side_to_move: Color, target: Square) -> bool {
    let pusher = side_to_move.opponent();
    let skipped_rank = (pusher.pawn_start_rank() as isize + pusher.pawn_direction()) as usize;
    if target.rank() != skipped_rank || !board.is_empty(target) {
        return false;
    }
    target
        .offset(pusher.pawn_direction(), 0)
        .is_some_and(|pawn| board.piece_at(pawn) == Some((pusher, Piece::Pawn)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn kings() -> GameStateBuilder {
        GameStateBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
    }

    #[test]
    fn test_starting_position() {
        let built = GameStateBuilder::starting_position().build();
        assert_eq!(built, GameState::new());
    }

    #[test]
    fn test_empty_board() {
        let game = kings().build();

        // Should have only two kings
        assert!(game.board().piece_at(sq("e1")).is_some());
        assert!(game.board().piece_at(sq("e8")).is_some());
        assert!(game.board().piece_at(sq("a1")).is_none());
        assert_eq!(game.king_square(Color::Black), sq("e8"));
    }

    #[test]
    fn test_castling_rights() {
        let game = GameStateBuilder::starting_position()
            .no_castling_rights()
            .castle(Color::White, CastleSide::Kingside)
            .build();

        let rights = game.castling_rights();
        assert!(rights.has(Color::White, CastleSide::Kingside));
        assert!(!rights.has(Color::White, CastleSide::Queenside));
        assert!(!rights.has_any(Color::Black));
    }

    #[test]
    fn test_castling_rights_dropped_without_rook() {
        let game = GameStateBuilder::starting_position()
            .clear(sq("h1"))
            .build();
        let rights = game.castling_rights();
        assert!(!rights.has(Color::White, CastleSide::Kingside));
        assert!(rights.has(Color::White, CastleSide::Queenside));
        assert!(rights.has(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn test_castling_rights_dropped_when_king_off_home() {
        let game = GameStateBuilder::new()
            .piece(sq("f1"), Color::White, Piece::King)
            .piece(sq("h1"), Color::White, Piece::Rook)
            .piece(sq("e8"), Color::Black, Piece::King)
            .piece(sq("a8"), Color::Black, Piece::Rook)
            .castling(CastlingRights::all())
            .build();
        assert!(!game.castling_rights().has_any(Color::White));
        assert!(game.castling_rights().has(Color::Black, CastleSide::Queenside));
        assert!(!game.castling_rights().has(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn test_side_to_move() {
        let game = kings().side_to_move(Color::Black).build();
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn test_clear_square() {
        let game = GameStateBuilder::starting_position()
            .clear(sq("a1")) // Remove white rook on a1
            .build();

        assert!(game.board().piece_at(sq("a1")).is_none());
        assert!(game.board().piece_at(sq("b1")).is_some()); // Knight still there
    }

    #[test]
    fn test_missing_and_extra_kings() {
        let err = GameStateBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .try_build()
            .unwrap_err();
        assert_eq!(
            err,
            PositionError::MissingKing {
                color: Color::Black
            }
        );

        let err = kings()
            .piece(sq("a1"), Color::White, Piece::King)
            .try_build()
            .unwrap_err();
        assert_eq!(
            err,
            PositionError::MultipleKings {
                color: Color::White,
                count: 2
            }
        );
    }

    #[test]
    fn test_pawn_on_back_rank_rejected() {
        let err = kings()
            .piece(sq("c8"), Color::White, Piece::Pawn)
            .try_build()
            .unwrap_err();
        assert_eq!(err, PositionError::PawnOnBackRank { square: sq("c8") });
    }

    #[test]
    fn test_side_not_to_move_in_check_rejected() {
        let err = kings()
            .piece(sq("e4"), Color::White, Piece::Rook)
            .side_to_move(Color::White)
            .try_build()
            .unwrap_err();
        assert_eq!(
            err,
            PositionError::SideNotToMoveInCheck {
                color: Color::Black
            }
        );

        // Same placement with Black to move is an ordinary check.
        let game = kings()
            .piece(sq("e4"), Color::White, Piece::Rook)
            .side_to_move(Color::Black)
            .build();
        assert!(game.is_in_check());
    }

    #[test]
    fn test_en_passant_kept_only_when_capturable() {
        let game = kings()
            .piece(sq("d5"), Color::Black, Piece::Pawn)
            .piece(sq("e5"), Color::White, Piece::Pawn)
            .en_passant(sq("d6"))
            .build();
        assert_eq!(game.en_passant_target(), Some(sq("d6")));

        let game = kings()
            .piece(sq("e5"), Color::White, Piece::Pawn)
            .en_passant(sq("d6"))
            .build();
        assert_eq!(game.en_passant_target(), None);

        // Wrong rank for White to move.
        let game = kings()
            .piece(sq("d4"), Color::Black, Piece::Pawn)
            .en_passant(sq("d3"))
            .build();
        assert_eq!(game.en_passant_target(), None);
    }

    #[test]
    #[should_panic(expected = "invalid position")]
    fn test_build_panics_on_invalid() {
        let _ = GameStateBuilder::new().build();
    }
}
