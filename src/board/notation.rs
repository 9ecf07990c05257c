//! Coordinate notation (`e2e4`, `e7e8q`) against the legal move list.

use super::{GameState, IllegalMoveError, Move, MoveParseError, Piece, Square};

impl GameState {
    /// Find the legal move with exactly these squares and promotion choice.
    ///
    /// A promoting pawn move only matches when `promotion` names the piece;
    /// `None` never stands in for a queen.
    #[must_use]
    pub fn find_move(&self, from: Square, to: Square, promotion: Option<Piece>) -> Option<Move> {
        self.legal_moves_from(from)
            .into_iter()
            .find(|mv| mv.to() == to && mv.promotion() == promotion)
    }

    /// Parse a move in coordinate notation and match it against the legal moves.
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::GameState;
    ///
    /// let game = GameState::new();
    /// let mv = game.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let square = |file: char, rank: char| {
            let mut notation = String::with_capacity(2);
            notation.push(file);
            notation.push(rank);
            notation
                .parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: text.to_string(),
                })
        };
        let from = square(chars[0], chars[1])?;
        let to = square(chars[2], chars[3])?;

        // Parse promotion piece if present
        let promotion = match chars.get(4) {
            Some(&c) => {
                let piece = Piece::from_char(c)
                    .filter(|p| p.is_promotable())
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                Some(piece)
            }
            None => None,
        };

        self.find_move(from, to, promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Parse a coordinate move and play it in one call.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::GameState;
    ///
    /// let mut game = GameState::new();
    /// game.make_move_str("e2e4").unwrap();
    /// game.make_move_str("e7e5").unwrap();
    /// assert_eq!(game.ply_count(), 2);
    /// ```
    pub fn make_move_str(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv)
            .map_err(|IllegalMoveError { mv }| MoveParseError::IllegalMove {
                notation: mv.to_string(),
            })?;
        Ok(mv)
    }
}
