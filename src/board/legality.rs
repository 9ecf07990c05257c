//! Attack detection and the legal-move filter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attack_tables::{king_targets, knight_targets, DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
use super::{Board, Color, GameState, Move, MoveList, Piece, Square};

/// Outcome of the position for the side to move.
///
/// `Checkmate` and `Stalemate` are terminal; the two are never reported at
/// once since one requires check and the other forbids it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// True for checkmate and stalemate
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

impl Board {
    /// True if any piece of `by` attacks `square`.
    ///
    /// Pawns attack diagonally whether or not they could move there, and
    /// the king attacks its neighbours regardless of castling.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        // A pawn of `by` attacks from one rank behind, seen from its own direction.
        let behind = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = square.offset(behind, df) {
                if self.piece_at(from) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        if knight_targets(square)
            .iter()
            .any(|&from| self.piece_at(from) == Some((by, Piece::Knight)))
        {
            return true;
        }

        if king_targets(square)
            .iter()
            .any(|&from| self.piece_at(from) == Some((by, Piece::King)))
        {
            return true;
        }

        self.ray_hits(square, by, &DIAGONAL_DIRECTIONS, Piece::slides_diagonally)
            || self.ray_hits(square, by, &STRAIGHT_DIRECTIONS, Piece::slides_straight)
    }

    /// Walk each ray out of `square`; true if the first piece met belongs to
    /// `by` and slides along that kind of ray.
    fn ray_hits(
        &self,
        square: Square,
        by: Color,
        directions: &[(isize, isize)],
        slides: fn(Piece) -> bool,
    ) -> bool {
        for &(dr, df) in directions {
            let mut current = square;
            while let Some(next) = current.offset(dr, df) {
                if let Some((color, piece)) = self.piece_at(next) {
                    if color == by && slides(piece) {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }

    /// True if `mv`, played on a scratch copy, leaves the mover's king safe.
    ///
    /// `king_square` is where the mover's king stood before the move.
    pub(crate) fn leaves_king_safe(&self, mv: &Move, king_square: Square) -> bool {
        let mut scratch = *self;
        scratch.apply_move(mv);
        let king = if mv.piece() == Piece::King {
            mv.to()
        } else {
            king_square
        };
        !scratch.is_square_attacked(king, mv.color().opponent())
    }
}

impl GameState {
    /// All legal moves for the side to move, as a fresh snapshot.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let side = self.side_to_move();
        let king = self.king_square(side);
        let mut moves = self.pseudo_legal_moves();
        moves.retain(|mv| self.board().leaves_king_safe(mv, king));
        log_trace!("{} legal moves for {}", moves.len(), side);
        moves
    }

    /// Legal moves of the piece on `from`; empty if it is not the mover's piece
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        let side = self.side_to_move();
        if !self.board().is_occupied_by(from, side) {
            return MoveList::new();
        }
        let king = self.king_square(side);
        let mut moves = self.board().pseudo_legal_moves_from(
            from,
            self.en_passant_target(),
            self.castling_rights(),
        );
        moves.retain(|mv| self.board().leaves_king_safe(mv, king));
        moves
    }

    /// Pseudo-legal moves for the side to move, before the king-safety filter
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        self.board().pseudo_legal_moves(
            self.side_to_move(),
            self.en_passant_target(),
            self.castling_rights(),
        )
    }

    /// True if the side to move's king is attacked
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        let side = self.side_to_move();
        self.board()
            .is_square_attacked(self.king_square(side), side.opponent())
    }

    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        let king = self.king_square(self.side_to_move());
        self.pseudo_legal_moves()
            .iter()
            .any(|mv| self.board().leaves_king_safe(mv, king))
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match (self.is_in_check(), self.has_legal_moves()) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.status() == GameStatus::Stalemate
    }
}
