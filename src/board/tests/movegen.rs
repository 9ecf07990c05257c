//! Per-piece generation rules.

use super::{diagram, legal_strings, sq};
use crate::board::{Board, CastlingRights, Color, GameState, MoveKind, Piece};

fn targets_from(game: &GameState, from: &str) -> Vec<String> {
    let mut targets: Vec<String> = game
        .legal_moves_from(sq(from))
        .iter()
        .map(|m| m.to().to_string())
        .collect();
    targets.sort();
    targets
}

#[test]
fn test_start_position_has_twenty_moves() {
    let game = GameState::new();
    let moves = game.legal_moves();
    assert_eq!(moves.len(), 20);
    assert_eq!(moves.iter().filter(|m| m.piece() == Piece::Pawn).count(), 16);
    assert_eq!(moves.iter().filter(|m| m.piece() == Piece::Knight).count(), 4);
    assert!(moves.iter().all(|m| m.color() == Color::White));
}

#[test]
fn test_pawn_single_and_double_push() {
    let game = GameState::new();
    assert_eq!(targets_from(&game, "e2"), ["e3", "e4"]);
    let double = game.find_move(sq("e2"), sq("e4"), None).unwrap();
    assert_eq!(double.kind(), MoveKind::DoublePawnPush);
    let single = game.find_move(sq("e2"), sq("e3"), None).unwrap();
    assert_eq!(single.kind(), MoveKind::Normal);
}

#[test]
fn test_pawn_blocked_directly_ahead_has_no_pushes() {
    let game = diagram([
        "....k...", "........", "........", "........", "........", "....n...", "....P...",
        "....K...",
    ])
    .build();
    assert!(targets_from(&game, "e2").is_empty());
}

#[test]
fn test_pawn_double_push_blocked_on_second_square() {
    let game = diagram([
        "....k...", "........", "........", "........", "....n...", "........", "....P...",
        "....K...",
    ])
    .build();
    assert_eq!(targets_from(&game, "e2"), ["e3"]);
}

#[test]
fn test_pawn_no_double_push_off_start_rank() {
    let game = diagram([
        "....k...", "........", "........", "........", "........", "....P...", "........",
        "....K...",
    ])
    .build();
    assert_eq!(targets_from(&game, "e3"), ["e4"]);
}

#[test]
fn test_pawn_captures_only_enemy_diagonals() {
    let game = diagram([
        "....k...", "........", "........", "...p.N..", "....P...", "........", "........",
        "....K...",
    ])
    .build();
    assert_eq!(targets_from(&game, "e4"), ["d5", "e5"]);
    let capture = game.find_move(sq("e4"), sq("d5"), None).unwrap();
    assert_eq!(capture.captured(), Some(Piece::Pawn));
}

#[test]
fn test_black_pawns_move_down() {
    let game = diagram([
        "....k...", "...p....", "........", "........", "........", "........", "........",
        "....K...",
    ])
    .side_to_move(Color::Black)
    .build();
    assert_eq!(targets_from(&game, "d7"), ["d5", "d6"]);
}

#[test]
fn test_promotion_yields_four_moves_in_order() {
    let game = diagram([
        ".r..k...", "P.......", "........", "........", "........", "........", "........",
        "....K...",
    ])
    .build();
    let promos: Vec<_> = game
        .legal_moves_from(sq("a7"))
        .iter()
        .filter(|m| m.to() == sq("a8"))
        .map(|m| m.promotion())
        .collect();
    assert_eq!(
        promos,
        [
            Some(Piece::Queen),
            Some(Piece::Rook),
            Some(Piece::Bishop),
            Some(Piece::Knight)
        ]
    );
    let captures = game
        .legal_moves_from(sq("a7"))
        .iter()
        .filter(|m| m.to() == sq("b8"))
        .inspect(|m| assert_eq!(m.captured(), Some(Piece::Rook)))
        .count();
    assert_eq!(captures, 4);
}

#[test]
fn test_knight_in_corner_and_center() {
    let game = diagram([
        "....k...", "........", "........", "........", "...N....", "........", "........",
        "N...K...",
    ])
    .build();
    assert_eq!(targets_from(&game, "a1"), ["b3", "c2"]);
    assert_eq!(targets_from(&game, "d4").len(), 8);
}

#[test]
fn test_knight_does_not_capture_friendly() {
    let game = GameState::new();
    assert_eq!(targets_from(&game, "b1"), ["a3", "c3"]);
}

#[test]
fn test_rook_rays_stop_at_blockers() {
    let game = diagram([
        "....k...", "........", "........", "...p....", "........", "........", "...R.P..",
        "....K...",
    ])
    .build();
    // Up to and including the enemy pawn, right up to the friendly pawn, and
    // every square left and down to the edge.
    assert_eq!(
        targets_from(&game, "d2"),
        ["a2", "b2", "c2", "d1", "d3", "d4", "d5", "e2"]
    );
}

#[test]
fn test_bishop_on_empty_board_edge() {
    let game = diagram([
        "....k...", "........", "........", "........", "........", "........", "........",
        "B...K...",
    ])
    .build();
    assert_eq!(targets_from(&game, "a1").len(), 7);
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let game = diagram([
        "k.......", "........", "........", "........", "...Q....", "........", "........",
        ".......K",
    ])
    .build();
    assert_eq!(targets_from(&game, "d4").len(), 27);
}

#[test]
fn test_king_does_not_step_into_attack() {
    let game = diagram([
        "....k...", "........", "........", "........", "........", "........", "r.......",
        "....K...",
    ])
    .build();
    // Rank 2 is covered by the rook.
    assert_eq!(targets_from(&game, "e1"), ["d1", "f1"]);
}

#[test]
fn test_pseudo_legal_includes_self_check_moves() {
    let mut board = Board::empty();
    board.set_piece(sq("e1"), Some((Color::White, Piece::King)));
    board.set_piece(sq("a2"), Some((Color::Black, Piece::Rook)));
    let moves = board.pseudo_legal_moves(Color::White, None, CastlingRights::none());
    assert_eq!(moves.len(), 5);
    assert!(moves.iter().any(|m| m.to() == sq("e2")));
}

#[test]
fn test_castling_offered_when_clear() {
    let game = diagram([
        "r...k..r", "........", "........", "........", "........", "........", "........",
        "R...K..R",
    ])
    .castling(CastlingRights::all())
    .build();
    let moves = legal_strings(&game);
    assert!(moves.contains(&"e1g1".to_string()));
    assert!(moves.contains(&"e1c1".to_string()));
    let castle = game.find_move(sq("e1"), sq("c1"), None).unwrap();
    assert!(castle.is_castling());
}

#[test]
fn test_castling_blocked_by_piece_between() {
    // Knight on b1 blocks queenside even though the king never crosses b1.
    let game = diagram([
        "....k...", "........", "........", "........", "........", "........", "........",
        "RN..K..R",
    ])
    .castling(CastlingRights::all())
    .build();
    let moves = legal_strings(&game);
    assert!(!moves.contains(&"e1c1".to_string()));
    assert!(moves.contains(&"e1g1".to_string()));
}

#[test]
fn test_castling_needs_the_right() {
    let game = diagram([
        "....k...", "........", "........", "........", "........", "........", "........",
        "R...K..R",
    ])
    .build();
    assert!(game.legal_moves().iter().all(|m| !m.is_castling()));
}
