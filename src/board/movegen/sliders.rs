use super::super::{Board, Color, MoveList, Piece, Square};

impl Board {
    /// Walk each ray from `from` until it leaves the board or hits a piece.
    ///
    /// An enemy piece ends the ray as a capture; a friendly one ends it
    /// before its square.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        side: Color,
        piece: Piece,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.step_to(from, to, side, piece) {
                    Some(mv) => {
                        moves.push(mv);
                        if mv.is_capture() {
                            break;
                        }
                    }
                    None => break,
                }
                current = to;
            }
        }
    }
}
