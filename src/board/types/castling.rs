//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which rook the king castles with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// File the rook starts on (h or a)
    #[inline]
    #[must_use]
    pub const fn rook_home_file(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the rook lands on (f or d)
    #[inline]
    #[must_use]
    pub const fn rook_target_file(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// File the king lands on (g or c)
    #[inline]
    #[must_use]
    pub const fn king_target_file(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Home square of this side's rook for `color`
    #[inline]
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        Square::at(color.back_rank(), self.rook_home_file())
    }

    /// Square this side's rook ends on after castling
    #[inline]
    #[must_use]
    pub const fn rook_target(self, color: Color) -> Square {
        Square::at(color.back_rank(), self.rook_target_file())
    }

    /// Square the king ends on after castling
    #[inline]
    #[must_use]
    pub const fn king_target(self, color: Color) -> Square {
        Square::at(color.back_rank(), self.king_target_file())
    }

    /// Which side a rook home square belongs to, if any
    #[must_use]
    pub fn from_rook_home(square: Square, color: Color) -> Option<CastleSide> {
        CastleSide::BOTH
            .into_iter()
            .find(|side| side.rook_home(color) == square)
    }
}

/// File both kings start on
pub(crate) const KING_HOME_FILE: usize = 4;

/// Home square of the king for `color`
#[inline]
pub(crate) const fn king_home(color: Color) -> Square {
    Square::at(color.back_rank(), KING_HOME_FILE)
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Check if `color` may still castle on either side
    #[inline]
    #[must_use]
    pub const fn has_any(self, color: Color) -> bool {
        self.has(color, CastleSide::Kingside) || self.has(color, CastleSide::Queenside)
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both rights of `color`
    #[inline]
    pub fn remove_all(&mut self, color: Color) {
        self.remove(color, CastleSide::Kingside);
        self.remove(color, CastleSide::Queenside);
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => CASTLE_WHITE_K,
            (Color::White, CastleSide::Queenside) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_Q,
        }
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        for (color, side, c) in [
            (Color::White, CastleSide::Kingside, 'K'),
            (Color::White, CastleSide::Queenside, 'Q'),
            (Color::Black, CastleSide::Kingside, 'k'),
            (Color::Black, CastleSide::Queenside, 'q'),
        ] {
            if self.has(color, side) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rights_are_independent() {
        let mut rights = CastlingRights::all();
        rights.remove(Color::White, CastleSide::Queenside);
        assert!(rights.has(Color::White, CastleSide::Kingside));
        assert!(!rights.has(Color::White, CastleSide::Queenside));
        assert!(rights.has(Color::Black, CastleSide::Queenside));

        rights.remove_all(Color::Black);
        assert!(!rights.has_any(Color::Black));
        assert!(rights.has_any(Color::White));
        assert_eq!(rights.to_string(), "K");
    }

    #[test]
    fn test_set_from_none() {
        let mut rights = CastlingRights::none();
        assert_eq!(rights.to_string(), "-");
        rights.set(Color::Black, CastleSide::Kingside);
        assert!(rights.has(Color::Black, CastleSide::Kingside));
        assert!(!rights.has(Color::White, CastleSide::Kingside));
    }

    #[test]
    fn test_side_geometry() {
        assert_eq!(CastleSide::Kingside.king_target(Color::White).to_string(), "g1");
        assert_eq!(CastleSide::Queenside.rook_target(Color::Black).to_string(), "d8");
        assert_eq!(
            CastleSide::from_rook_home(Square::at(7, 0), Color::Black),
            Some(CastleSide::Queenside)
        );
        assert_eq!(CastleSide::from_rook_home(Square::at(0, 0), Color::Black), None);
        assert_eq!(king_home(Color::White).to_string(), "e1");
    }
}
