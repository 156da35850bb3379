use std::sync::LazyLock;

use crate::board::Board;
use crate::constants::{BOARD_SIZE, PLAYABLE_SQUARES};
use crate::types::{Piece, PieceKind, Player, Square};

const PIECE_CODES: usize = 4;
const PIECE_KEYS: usize = PIECE_CODES * BOARD_SIZE * BOARD_SIZE;

static ZOBRIST_KEYS: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::new);

/// Fixed random-key table for board fingerprinting. Seeded deterministically
/// so fingerprints are stable across processes and runs.
#[derive(Debug, Clone)]
pub struct ZobristKeys {
    piece_square: [u64; PIECE_KEYS],
}

pub fn zobrist_keys() -> &'static ZobristKeys {
    &ZOBRIST_KEYS
}

impl ZobristKeys {
    fn new() -> Self {
        let mut state = 0x9E37_79B9_7F4A_7C15u64;
        let mut piece_square = [0u64; PIECE_KEYS];
        for key in &mut piece_square {
            *key = next_u64(&mut state);
        }
        Self { piece_square }
    }

    pub fn piece_key(&self, piece: Piece, square: Square) -> u64 {
        let square_idx = usize::from(square.row) * BOARD_SIZE + usize::from(square.col);
        self.piece_square[piece_index(piece) * BOARD_SIZE * BOARD_SIZE + square_idx]
    }

    pub fn xor_piece(&self, hash: &mut u64, piece: Piece, square: Square) {
        *hash ^= self.piece_key(piece, square);
    }

    pub fn hash_board(&self, board: &Board) -> u64 {
        let mut hash = 0u64;
        for square in PLAYABLE_SQUARES {
            if let Some(piece) = board.piece_at(square) {
                self.xor_piece(&mut hash, piece, square);
            }
        }
        hash
    }
}

fn piece_index(piece: Piece) -> usize {
    let kind = match piece.kind {
        PieceKind::Man => 0,
        PieceKind::King => 1,
    };
    let owner = match piece.owner {
        Player::White => 0,
        Player::Black => 1,
    };
    owner * 2 + kind
}

fn next_u64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
