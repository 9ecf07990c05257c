use super::{
    CastleSide, EmptyHistoryError, GameState, HistoryEntry, IllegalMoveError, Move, Piece, Square,
};

impl GameState {
    /// Play `mv` if it is legal in the current position.
    ///
    /// On error the game is left untouched.
    pub fn make_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        if !self.legal_moves().contains(&mv) {
            log_debug!("rejected {} for {}", mv, self.side_to_move);
            return Err(IllegalMoveError { mv });
        }
        self.make_move_unchecked(mv);
        self.assert_kings_consistent();
        Ok(())
    }

    /// Play a move already known to be legal.
    pub(crate) fn make_move_unchecked(&mut self, mv: Move) {
        debug_assert_eq!(mv.color(), self.side_to_move);
        let color = mv.color();

        self.history.push(HistoryEntry::new(
            mv,
            self.castling_rights,
            self.en_passant_target,
        ));

        self.board.apply_move(&mv);
        self.update_castling_rights(&mv);

        self.en_passant_target = if mv.is_double_pawn_push() {
            let skipped = (mv.from().rank() + mv.to().rank()) / 2;
            Some(Square::at(skipped, mv.from().file()))
        } else {
            None
        };

        if mv.piece() == Piece::King {
            self.king_squares[color.index()] = mv.to();
        }
        self.side_to_move = color.opponent();

        log_debug!("made {:?}", mv);
    }

    /// Take back the last move and return it.
    pub fn undo_move(&mut self) -> Result<Move, EmptyHistoryError> {
        let entry = self.history.pop().ok_or(EmptyHistoryError)?;
        let mv = entry.mv;

        self.board.revert_move(&mv);
        self.castling_rights = entry.previous_castling_rights;
        self.en_passant_target = entry.previous_en_passant_target;
        self.side_to_move = mv.color();
        if mv.piece() == Piece::King {
            self.king_squares[mv.color().index()] = mv.from();
        }

        self.assert_kings_consistent();
        log_debug!("undid {:?}", mv);
        Ok(mv)
    }

    /// Clear rights made void by `mv`: a king move drops both of the mover's,
    /// a rook leaving home drops its side, and a rook captured at home drops
    /// the opponent's right on that side.
    fn update_castling_rights(&mut self, mv: &Move) {
        let color = mv.color();
        match mv.piece() {
            Piece::King => self.castling_rights.remove_all(color),
            Piece::Rook => {
                if let Some(side) = CastleSide::from_rook_home(mv.from(), color) {
                    self.castling_rights.remove(color, side);
                }
            }
            _ => {}
        }

        if mv.captured() == Some(Piece::Rook) {
            let enemy = color.opponent();
            if let Some(side) = CastleSide::from_rook_home(mv.to(), enemy) {
                self.castling_rights.remove(enemy, side);
            }
        }
    }
}
