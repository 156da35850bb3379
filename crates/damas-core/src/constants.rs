use crate::types::Square;

pub const BOARD_SIZE: usize = 8;

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: i32 = 12;

/// Points per crowned piece on top of the captured-piece count.
pub const KING_SCORE_BONUS: i32 = 3;

/// Every light square in row-major order; dark squares never enter play.
pub const PLAYABLE_SQUARES: [Square; 32] = [
    Square::new_unchecked(0, 1),
    Square::new_unchecked(0, 3),
    Square::new_unchecked(0, 5),
    Square::new_unchecked(0, 7),
    Square::new_unchecked(1, 0),
    Square::new_unchecked(1, 2),
    Square::new_unchecked(1, 4),
    Square::new_unchecked(1, 6),
    Square::new_unchecked(2, 1),
    Square::new_unchecked(2, 3),
    Square::new_unchecked(2, 5),
    Square::new_unchecked(2, 7),
    Square::new_unchecked(3, 0),
    Square::new_unchecked(3, 2),
    Square::new_unchecked(3, 4),
    Square::new_unchecked(3, 6),
    Square::new_unchecked(4, 1),
    Square::new_unchecked(4, 3),
    Square::new_unchecked(4, 5),
    Square::new_unchecked(4, 7),
    Square::new_unchecked(5, 0),
    Square::new_unchecked(5, 2),
    Square::new_unchecked(5, 4),
    Square::new_unchecked(5, 6),
    Square::new_unchecked(6, 1),
    Square::new_unchecked(6, 3),
    Square::new_unchecked(6, 5),
    Square::new_unchecked(6, 7),
    Square::new_unchecked(7, 0),
    Square::new_unchecked(7, 2),
    Square::new_unchecked(7, 4),
    Square::new_unchecked(7, 6),
];
