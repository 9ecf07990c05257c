use super::super::attack_tables::king_targets;
use super::super::{
    king_home, Board, CastleSide, CastlingRights, Color, Move, MoveKind, MoveList, Piece, Square,
};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, side: Color, moves: &mut MoveList) {
        for &to in king_targets(from) {
            if let Some(mv) = self.step_to(from, to, side, Piece::King) {
                moves.push(mv);
            }
        }
    }

    /// Castling candidates for a king standing on `from`.
    ///
    /// Requires the right, the rook at home, an empty path between them and
    /// no enemy attack on the king's origin, transit or destination square.
    pub(crate) fn generate_castling_moves(
        &self,
        from: Square,
        side: Color,
        rights: CastlingRights,
        moves: &mut MoveList,
    ) {
        if from != king_home(side) || !rights.has_any(side) {
            return;
        }
        let enemy = side.opponent();

        for castle in CastleSide::BOTH {
            if !rights.has(side, castle) {
                continue;
            }
            if self.piece_at(castle.rook_home(side)) != Some((side, Piece::Rook)) {
                continue;
            }
            if !Board::castle_path(side, castle).all(|sq| self.is_empty(sq)) {
                continue;
            }
            let to = castle.king_target(side);
            if king_walk(from, to).any(|sq| self.is_square_attacked(sq, enemy)) {
                continue;
            }
            moves.push(Move::new(
                from,
                to,
                side,
                Piece::King,
                None,
                MoveKind::Castle(castle),
            ));
        }
    }
}

/// Squares the king occupies while castling, origin and destination included
fn king_walk(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let rank = from.rank();
    let (lo, hi) = if from.file() <= to.file() {
        (from.file(), to.file())
    } else {
        (to.file(), from.file())
    };
    (lo..=hi).map(move |file| Square::at(rank, file))
}
