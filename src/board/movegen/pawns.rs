use super::super::{Board, Color, Move, MoveKind, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        side: Color,
        en_passant_target: Option<Square>,
        moves: &mut MoveList,
    ) {
        let dir = side.pawn_direction();

        // A pawn on the far rank cannot exist in a valid position.
        let Some(forward) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(forward) {
            push_pawn_move(moves, from, forward, side, None);
            if from.rank() == side.pawn_start_rank() {
                if let Some(double) = forward.offset(dir, 0) {
                    if self.is_empty(double) {
                        moves.push(Move::new(
                            from,
                            double,
                            side,
                            Piece::Pawn,
                            None,
                            MoveKind::DoublePawnPush,
                        ));
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some((color, captured)) if color != side => {
                    push_pawn_move(moves, from, target, side, Some(captured));
                }
                Some(_) => {}
                None => {
                    if Some(target) != en_passant_target {
                        continue;
                    }
                    let victim = Square::at(from.rank(), target.file());
                    if self.piece_at(victim) == Some((side.opponent(), Piece::Pawn)) {
                        moves.push(Move::new(
                            from,
                            target,
                            side,
                            Piece::Pawn,
                            Some(Piece::Pawn),
                            MoveKind::EnPassant,
                        ));
                    }
                }
            }
        }
    }
}

/// Push a single-step pawn move, fanning out into one move per promotion
/// choice when it reaches the far rank.
fn push_pawn_move(
    moves: &mut MoveList,
    from: Square,
    to: Square,
    side: Color,
    captured: Option<Piece>,
) {
    if to.rank() == side.pawn_promotion_rank() {
        for promo in PROMOTION_PIECES {
            moves.push(Move::new(
                from,
                to,
                side,
                Piece::Pawn,
                captured,
                MoveKind::Promotion(promo),
            ));
        }
    } else {
        moves.push(Move::new(from, to, side, Piece::Pawn, captured, MoveKind::Normal));
    }
}
