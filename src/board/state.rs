use super::{Board, CastlingRights, Color, HistoryEntry, Move, Square};

/// A game in progress.
///
/// Owns the board, the move log and everything the board alone cannot
/// express. Mutated only through `make_move` and `undo_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    // Indexed by Color::index; kept in step with every make/undo.
    pub(crate) king_squares: [Square; 2],
}

impl GameState {
    /// Standard starting position, White to move, all castling rights
    #[must_use]
    pub fn new() -> Self {
        let board = Board::starting_position();
        GameState {
            board,
            history: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            king_squares: [super::king_home(Color::White), super::king_home(Color::Black)],
        }
    }

    /// Assemble a game from already validated parts.
    ///
    /// Panics if either king is missing; callers check that first.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> Self {
        let king = |color: Color| {
            board
                .find_king(color)
                .unwrap_or_else(|| panic!("{color} king missing from validated board"))
        };
        GameState {
            board,
            history: Vec::new(),
            side_to_move,
            castling_rights,
            en_passant_target,
            king_squares: [king(Color::White), king(Color::Black)],
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square skipped by a pawn double push on the previous ply
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Cached king square for `color`
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Played moves, oldest first
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(HistoryEntry::mv)
    }

    /// Number of half-moves played since construction
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Check the cached king squares against the board.
    ///
    /// Exactly one king per color must exist; anything else means the
    /// engine corrupted its own state.
    pub(crate) fn assert_kings_consistent(&self) {
        for color in Color::BOTH {
            let cached = self.king_square(color);
            assert_eq!(
                self.board.piece_at(cached),
                Some((color, super::Piece::King)),
                "{color} king cache points at {cached}"
            );
            debug_assert_eq!(self.board.count_kings(color), 1);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move, castling {}", self.side_to_move, self.castling_rights)?;
        if let Some(ep) = self.en_passant_target {
            write!(f, ", en passant {ep}")?;
        }
        Ok(())
    }
}
