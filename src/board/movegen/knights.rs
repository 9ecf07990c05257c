use super::super::attack_tables::knight_targets;
use super::super::{Board, Color, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, side: Color, moves: &mut MoveList) {
        for &to in knight_targets(from) {
            if let Some(mv) = self.step_to(from, to, side, Piece::Knight) {
                moves.push(mv);
            }
        }
    }
}
