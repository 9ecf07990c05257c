//! Pseudo-legal move generation.
//!
//! Moves produced here obey piece movement and occupancy rules but may leave
//! the mover's king attacked; `GameState::legal_moves` filters them.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
use super::{Board, CastlingRights, Color, Move, MoveKind, MoveList, Piece, Square};

impl Board {
    /// Every pseudo-legal move for `side`.
    ///
    /// `en_passant_target` and `castling_rights` come from the game state;
    /// the board itself only holds placement.
    #[must_use]
    pub fn pseudo_legal_moves(
        &self,
        side: Color,
        en_passant_target: Option<Square>,
        castling_rights: CastlingRights,
    ) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces(side) {
            self.generate_piece_moves(
                from,
                side,
                piece,
                en_passant_target,
                castling_rights,
                &mut moves,
            );
        }
        moves
    }

    /// Pseudo-legal moves of the single piece on `from`, empty if the square is empty.
    #[must_use]
    pub fn pseudo_legal_moves_from(
        &self,
        from: Square,
        en_passant_target: Option<Square>,
        castling_rights: CastlingRights,
    ) -> MoveList {
        match self.piece_at(from) {
            Some((side, piece)) => {
                let mut moves = MoveList::new();
                self.generate_piece_moves(
                    from,
                    side,
                    piece,
                    en_passant_target,
                    castling_rights,
                    &mut moves,
                );
                moves
            }
            None => MoveList::new(),
        }
    }

    fn generate_piece_moves(
        &self,
        from: Square,
        side: Color,
        piece: Piece,
        en_passant_target: Option<Square>,
        castling_rights: CastlingRights,
        moves: &mut MoveList,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, side, en_passant_target, moves),
            Piece::Knight => self.generate_knight_moves(from, side, moves),
            Piece::Bishop => {
                self.generate_slider_moves(from, side, piece, &DIAGONAL_DIRECTIONS, moves);
            }
            Piece::Rook => {
                self.generate_slider_moves(from, side, piece, &STRAIGHT_DIRECTIONS, moves);
            }
            Piece::Queen => {
                self.generate_slider_moves(from, side, piece, &DIAGONAL_DIRECTIONS, moves);
                self.generate_slider_moves(from, side, piece, &STRAIGHT_DIRECTIONS, moves);
            }
            Piece::King => {
                self.generate_king_moves(from, side, moves);
                self.generate_castling_moves(from, side, castling_rights, moves);
            }
        }
    }

    /// Ordinary move or capture of `piece` onto `to`, unless a friendly piece sits there.
    #[inline]
    fn step_to(&self, from: Square, to: Square, side: Color, piece: Piece) -> Option<Move> {
        match self.piece_at(to) {
            Some((color, _)) if color == side => None,
            Some((_, captured)) => Some(Move::new(
                from,
                to,
                side,
                piece,
                Some(captured),
                MoveKind::Normal,
            )),
            None => Some(Move::new(from, to, side, piece, None, MoveKind::Normal)),
        }
    }
}
