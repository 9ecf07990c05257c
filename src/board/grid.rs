use std::fmt;

use super::{CastleSide, Color, Move, MoveKind, Piece, Square};

/// Contents of one square
pub type Cell = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Fixed 8x8 grid of cells, indexed `[rank][file]`.
///
/// Pure placement data: side to move, castling and en passant state live in
/// `GameState`. `Copy` so the legality filter can simulate on scratch boards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting setup
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.cells[Color::White.back_rank()][file] = Some((Color::White, *piece));
            board.cells[Color::Black.back_rank()][file] = Some((Color::Black, *piece));
            board.cells[Color::White.pawn_start_rank()][file] = Some((Color::White, Piece::Pawn));
            board.cells[Color::Black.pawn_start_rank()][file] = Some((Color::Black, Piece::Pawn));
        }
        board
    }

    /// True when both coordinates lie in `0..8`.
    #[inline]
    #[must_use]
    pub const fn is_on_board(rank: isize, file: isize) -> bool {
        rank >= 0 && rank < 8 && file >= 0 && file < 8
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.cells[sq.rank()][sq.file()]
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.rank()][sq.file()] = cell;
    }

    /// Empty `sq`, returning what stood there
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Cell {
        self.cells[sq.rank()][sq.file()].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied_by(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some((c, _)) if c == color)
    }

    /// Read-only grid for rendering; `rows()[0]` is rank 1
    #[must_use]
    pub fn rows(&self) -> &[[Cell; 8]; 8] {
        &self.cells
    }

    /// Every piece of `color` with its square, a1 first
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Scan the board for `color`'s king
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    pub(crate) fn count_kings(&self, color: Color) -> usize {
        self.pieces(color)
            .filter(|&(_, piece)| piece == Piece::King)
            .count()
    }

    /// Move pieces for `mv` without touching any game state.
    ///
    /// Handles the rook hop for castling, the off-destination capture of en
    /// passant and the piece swap of promotion.
    pub fn apply_move(&mut self, mv: &Move) {
        let color = mv.color();
        self.remove_piece(mv.from());
        if mv.is_en_passant() {
            self.remove_piece(mv.capture_square());
        }
        self.set_piece(mv.to(), Some((color, mv.placed_piece())));
        if let MoveKind::Castle(side) = mv.kind() {
            self.relocate_rook(color, side.rook_home(color), side.rook_target(color));
        }
    }

    /// Exact inverse of [`Board::apply_move`].
    pub fn revert_move(&mut self, mv: &Move) {
        let color = mv.color();
        self.remove_piece(mv.to());
        self.set_piece(mv.from(), Some((color, mv.piece())));
        if let Some(captured) = mv.captured() {
            self.set_piece(mv.capture_square(), Some((color.opponent(), captured)));
        }
        if let MoveKind::Castle(side) = mv.kind() {
            self.relocate_rook(color, side.rook_target(color), side.rook_home(color));
        }
    }

    fn relocate_rook(&mut self, color: Color, from: Square, to: Square) {
        debug_assert_eq!(self.piece_at(from), Some((color, Piece::Rook)));
        self.remove_piece(from);
        self.set_piece(to, Some((color, Piece::Rook)));
    }

    /// Squares strictly between the king home and the rook home of `side`
    pub(crate) fn castle_path(color: Color, side: CastleSide) -> impl Iterator<Item = Square> {
        let rank = color.back_rank();
        let (lo, hi) = match side {
            CastleSide::Kingside => (super::KING_HOME_FILE + 1, side.rook_home_file()),
            CastleSide::Queenside => (side.rook_home_file() + 1, super::KING_HOME_FILE),
        };
        (lo..hi).map(move |file| Square::at(rank, file))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = match self.cells[rank][file] {
                    Some((color, piece)) => piece.to_colored_char(color),
                    None => ' ',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for rank in (0..8).rev() {
            let row: String = (0..8)
                .map(|file| match self.cells[rank][file] {
                    Some((color, piece)) => piece.to_colored_char(color),
                    None => '.',
                })
                .collect();
            writeln!(f, "    {row}")?;
        }
        write!(f, "}}")
    }
}
