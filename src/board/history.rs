#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Move, Square};

/// One played move plus the state it destroyed.
///
/// The move itself records the captured piece; castling rights and the en
/// passant target cannot be recomputed from the board, so they are kept here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    pub(crate) mv: Move,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
}

impl HistoryEntry {
    pub(crate) const fn new(
        mv: Move,
        previous_castling_rights: CastlingRights,
        previous_en_passant_target: Option<Square>,
    ) -> Self {
        HistoryEntry {
            mv,
            previous_castling_rights,
            previous_en_passant_target,
        }
    }

    #[must_use]
    pub const fn mv(&self) -> Move {
        self.mv
    }

    /// Castling rights in force before the move
    #[must_use]
    pub const fn previous_castling_rights(&self) -> CastlingRights {
        self.previous_castling_rights
    }

    /// En passant target in force before the move
    #[must_use]
    pub const fn previous_en_passant_target(&self) -> Option<Square> {
        self.previous_en_passant_target
    }
}
