use std::mem::size_of;

use damas_core::board::{Board, BoardError};
use damas_core::notation::{encode_board, parse_board, STARTING_POSITION};
use damas_core::types::{Cell, Piece, Player, Square};
use damas_core::zobrist::zobrist_keys;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("valid square")
}

#[test]
fn board_stays_a_small_value_type() {
    assert!(
        size_of::<Board>() <= 256,
        "board too large: {}",
        size_of::<Board>()
    );
}

#[test]
fn starting_layout_matches_the_canonical_matrix() {
    let board = Board::new();
    let expected: [[i8; 8]; 8] = [
        [3, -1, 3, -1, 3, -1, 3, -1],
        [-1, 3, -1, 3, -1, 3, -1, 3],
        [3, -1, 3, -1, 3, -1, 3, -1],
        [0, 3, 0, 3, 0, 3, 0, 3],
        [3, 0, 3, 0, 3, 0, 3, 0],
        [1, 3, 1, 3, 1, 3, 1, 3],
        [3, 1, 3, 1, 3, 1, 3, 1],
        [1, 3, 1, 3, 1, 3, 1, 3],
    ];
    assert_eq!(board.to_codes(), expected);
}

#[test]
fn starting_layout_has_twelve_men_per_side() {
    let board = Board::new();
    let flat = board.to_flat();
    assert_eq!(flat.iter().filter(|&&code| code == 1).count(), 12);
    assert_eq!(flat.iter().filter(|&&code| code == -1).count(), 12);
    assert_eq!(flat.iter().filter(|&&code| code == 3).count(), 32);
}

#[test]
fn code_grid_round_trips() {
    let board = Board::new();
    let rebuilt = Board::from_codes(&board.to_codes()).expect("round trip");
    assert_eq!(rebuilt, board);

    let flat = board.to_flat();
    let from_flat = Board::from_flat(&flat).expect("flat round trip");
    assert_eq!(from_flat, board);
}

#[test]
fn from_codes_rejects_bad_grids() {
    let mut codes = Board::new().to_codes();
    codes[4][3] = 5;
    assert_eq!(Board::from_codes(&codes), Err(BoardError::InvalidCode(5)));

    // piece on a dark square
    let mut codes = Board::new().to_codes();
    codes[4][4] = 1;
    assert_eq!(
        Board::from_codes(&codes),
        Err(BoardError::PatternMismatch(4, 4))
    );

    // dark marker leaking onto a playable square
    let mut codes = Board::new().to_codes();
    codes[4][3] = 3;
    assert_eq!(
        Board::from_codes(&codes),
        Err(BoardError::PatternMismatch(4, 3))
    );
}

#[test]
fn put_and_remove_respect_the_board_rules() {
    let mut board = Board::empty();
    let square = sq(4, 3);
    let piece = Piece::man(Player::White);

    board.put(piece, square).unwrap();
    assert_eq!(board.piece_at(square), Some(piece));
    assert_eq!(
        board.put(Piece::man(Player::Black), square),
        Err(BoardError::SquareOccupied)
    );
    assert_eq!(
        board.put(piece, sq(4, 4)),
        Err(BoardError::DarkSquare)
    );

    assert_eq!(board.remove(square), Some(piece));
    assert_eq!(board.remove(square), None);
    assert_eq!(board.get(square), Cell::Empty);
}

#[test]
fn predicates_see_bounds_pattern_and_ownership() {
    let board = parse_board(
        "x.x.x.x./.x.x.x.x/x.x.x.x./.x.x.x.x/x.x.x.x./.xbx.x.x/x.xwx.x./.x.x.x.x",
    )
    .expect("parse");

    assert!(board.playable(4, 1));
    assert!(!board.playable(4, 4)); // dark square
    assert!(!board.playable(-1, 0));
    assert!(!board.playable(0, 8));

    assert!(board.empty_playable(4, 1));
    assert!(!board.empty_playable(5, 2)); // holds a piece
    assert!(!board.empty_playable(8, 1));

    assert!(board.opponent_at(5, 2, Player::White));
    assert!(!board.opponent_at(5, 2, Player::Black));
    assert!(!board.opponent_at(6, 3, Player::White)); // own piece
    assert!(!board.opponent_at(4, 1, Player::White)); // empty
    assert!(!board.opponent_at(-1, -1, Player::White));
}

#[test]
fn fingerprint_is_deterministic_and_position_sensitive() {
    assert_eq!(Board::new().fingerprint(), Board::new().fingerprint());

    let mut moved = Board::new();
    let piece = moved.remove(sq(5, 2)).expect("man at (5, 2)");
    moved.put(piece, sq(4, 3)).unwrap();
    assert_ne!(moved.fingerprint(), Board::new().fingerprint());

    // men and kings on the same square fingerprint differently
    let mut man = Board::empty();
    man.put(Piece::man(Player::White), sq(4, 3)).unwrap();
    let mut king = Board::empty();
    king.put(Piece::king(Player::White), sq(4, 3)).unwrap();
    assert_ne!(man.fingerprint(), king.fingerprint());
}

#[test]
fn zobrist_xor_tracks_board_edits() {
    let keys = zobrist_keys();
    let mut board = Board::empty();
    let square = sq(3, 4);
    let piece = Piece::king(Player::Black);

    let mut hash = board.fingerprint();
    let baseline = hash;

    board.put(piece, square).unwrap();
    keys.xor_piece(&mut hash, piece, square);
    assert_eq!(hash, board.fingerprint());

    assert_eq!(board.remove(square), Some(piece));
    keys.xor_piece(&mut hash, piece, square);
    assert_eq!(hash, baseline);
    assert_eq!(hash, board.fingerprint());
}

#[test]
fn notation_and_codes_agree_on_the_starting_position() {
    let board = parse_board(STARTING_POSITION).expect("parse");
    assert_eq!(board, Board::new());
    assert_eq!(encode_board(&Board::new()), STARTING_POSITION);
}
